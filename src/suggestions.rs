//! Popular picks shown while the session has no results
//!
//! Each fixed title is resolved with its own first-page search. All lookups run
//! concurrently and the loader waits for every one of them; failures and empty
//! pages are dropped silently. The assembled list keeps the fixed title order
//! whatever order the lookups finish in.

use futures::future::join_all;

use crate::remote::{MovieLookup, ResultItem};

/// Titles resolved into the popular picks panel, in display order
pub const POPULAR_TITLES: [&str; 6] = [
    "The Shawshank Redemption",
    "The Dark Knight",
    "Inception",
    "Pulp Fiction",
    "The Matrix",
    "Interstellar",
];

/// Resolve every popular title to its best match
pub async fn load_suggestions<L: MovieLookup>(lookup: &L) -> Vec<ResultItem> {
    load_titles(lookup, &POPULAR_TITLES).await
}

/// Resolve `titles` concurrently, keeping the first item of each successful page
pub async fn load_titles<L: MovieLookup>(lookup: &L, titles: &[&str]) -> Vec<ResultItem> {
    let lookups = titles.iter().map(|&title| async move {
        match lookup.search(title, 1).await {
            Ok(page) => {
                let first = page.items.into_iter().next();
                if first.is_none() {
                    tracing::debug!(title, "no suggestion: empty result page");
                }
                first
            }
            Err(e) => {
                tracing::debug!(title, "no suggestion: {e}");
                None
            }
        }
    });

    join_all(lookups).await.into_iter().flatten().collect()
}

/// Ticket for one suggestion load; only the newest ticket may publish
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionTicket(u64);

/// Holds the displayed suggestion list and fences out superseded loads
#[derive(Debug, Clone, Default)]
pub struct SuggestionPanel {
    items: Vec<ResultItem>,
    generation: u64,
    loading: bool,
}

impl SuggestionPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding any load still in flight
    pub fn begin(&mut self) -> SuggestionTicket {
        self.generation += 1;
        self.loading = true;
        SuggestionTicket(self.generation)
    }

    /// Invalidate any in-flight load without starting a new one
    ///
    /// Called when the session gains results; late lookups are left to finish.
    pub fn supersede(&mut self) {
        self.generation += 1;
        self.loading = false;
    }

    /// Publish a finished load
    ///
    /// The list is kept only if `ticket` is the newest and the session is still
    /// empty. Returns whether it was kept.
    pub fn complete(
        &mut self,
        ticket: SuggestionTicket,
        items: Vec<ResultItem>,
        session_has_items: bool,
    ) -> bool {
        if ticket.0 != self.generation || session_has_items {
            tracing::debug!(ticket = ticket.0, "discarding stale suggestions");
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
