//! Detail view loader
//!
//! Resolves one identifier to a [`DetailRecord`]. Every new identifier starts a
//! fresh load; results for an identifier that is no longer selected are
//! discarded.

use crate::error::Result;
use crate::remote::{DetailRecord, MovieLookup};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailState {
    #[default]
    Idle,
    Loading,
    Ready(DetailRecord),
    /// Literal error message from the lookup
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub seq: u64,
    pub id: String,
}

#[derive(Debug, Clone, Default)]
pub struct DetailView {
    id: Option<String>,
    state: DetailState,
    latest_seq: u64,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `id` and start loading it
    ///
    /// An absent or blank identifier is ignored.
    pub fn open(&mut self, id: Option<&str>) -> Option<DetailRequest> {
        let id = id.map(str::trim).filter(|id| !id.is_empty())?;

        self.latest_seq += 1;
        self.id = Some(id.to_string());
        self.state = DetailState::Loading;
        Some(DetailRequest {
            seq: self.latest_seq,
            id: id.to_string(),
        })
    }

    /// Record the outcome of `request`; returns false if it was superseded
    pub fn apply(&mut self, request: &DetailRequest, result: Result<DetailRecord>) -> bool {
        if request.seq != self.latest_seq {
            tracing::debug!(id = %request.id, "discarding stale detail result");
            return false;
        }

        self.state = match result {
            Ok(record) => DetailState::Ready(record),
            Err(e) => DetailState::Failed(e.to_string()),
        };
        true
    }

    /// Perform `request` against `lookup` and apply the outcome
    pub async fn run<L: MovieLookup>(&mut self, request: &DetailRequest, lookup: &L) -> bool {
        let result = lookup.fetch_by_id(&request.id).await;
        self.apply(request, result)
    }

    /// Return to search; any load still in flight is ignored when it lands
    pub fn close(&mut self) {
        self.latest_seq += 1;
        self.id = None;
        self.state = DetailState::Idle;
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn record(&self) -> Option<&DetailRecord> {
        match &self.state {
            DetailState::Ready(record) => Some(record),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            DetailState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.id.is_some()
    }
}
