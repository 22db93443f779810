//! Remote movie lookup.
//!
//! This module defines the normalized catalogue types and the [`MovieLookup`]
//! trait that the session, suggestion and detail loaders talk to. The OMDb
//! HTTP implementation lives in [`omdb`]; response decoding lives in [`wire`].

#[cfg(test)]
pub mod fake;
pub mod omdb;
pub mod wire;

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::{MarqueeError, Result};

pub use omdb::OmdbClient;

/// Number of items the service returns per result page
pub const PAGE_SIZE: u64 = 10;

/// Literal the service uses for fields that have no value
pub const NOT_APPLICABLE: &str = "N/A";

/// Poster artwork for a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Poster {
    Url(String),
    /// The service reported no artwork; renderers must not try to fetch it
    Missing,
}

impl Poster {
    /// Map the raw `Poster` field, treating `"N/A"`, blank and absent as missing
    pub fn from_field(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(url) if !url.is_empty() && url != NOT_APPLICABLE => Poster::Url(url.to_string()),
            _ => Poster::Missing,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Poster::Url(url) => Some(url),
            Poster::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Poster::Missing)
    }
}

impl fmt::Display for Poster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Poster::Url(url) => write!(f, "{url}"),
            Poster::Missing => write!(f, "(no poster)"),
        }
    }
}

/// One entry of a search result page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    /// Stable identifier (an IMDb id such as `tt1375666`)
    pub id: String,
    pub title: String,
    /// Release year as reported; used as a filter key, never parsed
    pub year: String,
    pub poster: Poster,
}

/// A single page of search results in server order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultPage {
    pub items: Vec<ResultItem>,
    pub total_results: u64,
    pub page: u32,
}

/// Full attributes of one title
///
/// Text fields the service marks `"N/A"` are kept as that literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    pub id: String,
    pub title: String,
    pub year: String,
    pub runtime: String,
    pub rating: String,
    pub genres: Vec<String>,
    pub plot: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub poster: Poster,
}

/// Number of pages needed to show `total_results`, never less than one
pub fn total_pages(total_results: u64) -> u32 {
    let pages = total_results.div_ceil(PAGE_SIZE).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Trim a search query, rejecting blank input
pub fn validate_query(query: &str) -> Result<&str> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(MarqueeError::Validation(
            "Please enter a movie title".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Trim a title identifier, rejecting blank input
pub fn validate_id(id: &str) -> Result<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(MarqueeError::Validation(
            "A title identifier is required".to_string(),
        ));
    }
    Ok(trimmed)
}

/// Common interface for movie catalogue backends
pub trait MovieLookup: Send + Sync {
    /// Fetch one page of results for a title query
    ///
    /// Fails with `Validation` for a blank query or page 0, `NotFound` when the
    /// service reports no match, and `Transport` for network or decoding errors.
    fn search(&self, query: &str, page: u32)
    -> impl Future<Output = Result<ResultPage>> + Send;

    /// Fetch the full record for one identifier
    fn fetch_by_id(&self, id: &str) -> impl Future<Output = Result<DetailRecord>> + Send;
}
