//! Search session state machine
//!
//! A [`SearchSession`] owns the committed query, pagination, year filter and
//! the currently fetched page. Transitions that need the network hand out a
//! [`SearchRequest`] carrying a sequence number; the caller performs the lookup
//! and feeds the outcome back through [`SearchSession::apply`]. Only the most
//! recently issued request can change state, so a slow response for a
//! superseded query or page is dropped instead of overwriting newer results.

pub mod filter;


use crate::error::Result;
use crate::remote::{self, MovieLookup, ResultItem, ResultPage};

pub use filter::{ALL_YEARS, YearFilter, available_years};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// No query submitted yet
    #[default]
    Idle,
    Loading,
    /// Items populated (possibly empty)
    Ready,
    /// The last request failed; see [`SearchSession::last_error`]
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// First page of a newly submitted query
    Submit,
    /// Another page of the committed query
    Page,
}

/// A lookup the session wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub query: String,
    pub page: u32,
    pub kind: RequestKind,
}

/// Whether a completed request changed the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Current,
    /// A newer request was issued after this one; the outcome was discarded
    Stale,
}

#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    current_page: u32,
    total_results: u64,
    year_filter: YearFilter,
    items: Vec<ResultItem>,
    status: SessionStatus,
    last_error: Option<String>,
    latest_seq: u64,
    latest_kind: RequestKind,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            total_results: 0,
            year_filter: YearFilter::All,
            items: Vec::new(),
            status: SessionStatus::Idle,
            last_error: None,
            latest_seq: 0,
            latest_kind: RequestKind::Submit,
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn issue(&mut self, page: u32, kind: RequestKind) -> SearchRequest {
        self.latest_seq += 1;
        self.latest_kind = kind;
        self.status = SessionStatus::Loading;
        SearchRequest {
            seq: self.latest_seq,
            query: self.query.clone(),
            page,
            kind,
        }
    }

    /// Start a new search for `raw`
    ///
    /// Blank input is rejected with a validation error and leaves the session
    /// untouched. Otherwise the trimmed text becomes the committed query and a
    /// request for page 1 is returned.
    pub fn submit(&mut self, raw: &str) -> Result<SearchRequest> {
        let query = remote::validate_query(raw)?;
        self.query = query.to_string();
        Ok(self.issue(1, RequestKind::Submit))
    }

    /// Request page `n` of the committed query
    ///
    /// Returns `None` (and changes nothing) when `n` is the current page, lies
    /// outside `1..=total_pages()`, or no query has been committed. While a
    /// new query's first page is loading the page count belongs to the old
    /// query, so navigation waits for it.
    pub fn go_to_page(&mut self, n: u32) -> Option<SearchRequest> {
        if self.awaiting_submit() {
            return None;
        }
        if self.query.is_empty() || n == self.current_page || n < 1 || n > self.total_pages() {
            return None;
        }
        Some(self.issue(n, RequestKind::Page))
    }

    fn awaiting_submit(&self) -> bool {
        self.status == SessionStatus::Loading && self.latest_kind == RequestKind::Submit
    }

    pub fn next_page(&mut self) -> Option<SearchRequest> {
        self.go_to_page(self.current_page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> Option<SearchRequest> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Record the outcome of `request`
    ///
    /// A failed submit clears items and resets the total to zero. A failed page
    /// change clears items but keeps the current page and total as they were.
    pub fn apply(&mut self, request: &SearchRequest, result: Result<ResultPage>) -> Applied {
        if request.seq != self.latest_seq {
            tracing::debug!(
                seq = request.seq,
                latest = self.latest_seq,
                "discarding stale search result"
            );
            return Applied::Stale;
        }

        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_results = page.total_results;
                self.current_page = request.page.min(remote::total_pages(self.total_results));
                if request.kind == RequestKind::Submit {
                    self.year_filter = YearFilter::All;
                }
                self.status = SessionStatus::Ready;
                self.last_error = None;
            }
            Err(e) => {
                self.items.clear();
                if request.kind == RequestKind::Submit {
                    self.total_results = 0;
                    self.current_page = 1;
                }
                self.status = SessionStatus::Failed;
                self.last_error = Some(e.to_string());
            }
        }
        Applied::Current
    }

    /// Perform `request` against `lookup` and apply the outcome
    pub async fn run<L: MovieLookup>(&mut self, request: &SearchRequest, lookup: &L) -> Applied {
        let result = lookup.search(&request.query, request.page).await;
        self.apply(request, result)
    }

    /// Change the year filter; never issues a request
    ///
    /// `"All"` is matched without regard to case, so `"all"` also clears the
    /// filter. Any other value is compared verbatim with each item's year.
    pub fn set_year_filter(&mut self, value: &str) {
        self.year_filter = YearFilter::parse(value);
    }

    pub fn year_filter(&self) -> &YearFilter {
        &self.year_filter
    }

    /// Items of the current page that pass the year filter
    pub fn displayed_items(&self) -> Vec<&ResultItem> {
        self.year_filter.apply(&self.items)
    }

    /// The suggestion list narrowed by the same year filter
    pub fn displayed_suggestions<'a>(&self, suggestions: &'a [ResultItem]) -> Vec<&'a ResultItem> {
        self.year_filter.apply(suggestions)
    }

    /// Years offered by the filter: from results when present, else suggestions
    pub fn available_years(&self, suggestions: &[ResultItem]) -> Vec<String> {
        if self.items.is_empty() {
            available_years(suggestions)
        } else {
            available_years(&self.items)
        }
    }

    /// True when the popular-picks panel should be shown
    pub fn needs_suggestions(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        remote::total_pages(self.total_results)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.items
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SessionStatus::Loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Look up an item on the current page by its position in the displayed list
    pub fn displayed_item(&self, index: usize) -> Option<&ResultItem> {
        self.displayed_items().get(index).copied()
    }
}
