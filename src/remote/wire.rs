//! OMDb JSON envelopes and their conversion into catalogue types.
//!
//! Every OMDb response carries `Response: "True" | "False"`. A `"False"`
//! response always has an `Error` string, which is surfaced verbatim as
//! [`MarqueeError::NotFound`]. Malformed bodies are transport failures.

use serde::Deserialize;

use crate::error::{MarqueeError, Result};

use super::{DetailRecord, NOT_APPLICABLE, Poster, ResultItem, ResultPage};

const UNKNOWN_SERVICE_ERROR: &str = "Unknown error from OMDb";

#[derive(Debug, Deserialize)]
struct Status {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
}

impl Status {
    fn into_result(self) -> Result<()> {
        if self.response.eq_ignore_ascii_case("true") {
            Ok(())
        } else {
            Err(MarqueeError::NotFound(
                self.error
                    .unwrap_or_else(|| UNKNOWN_SERVICE_ERROR.to_string()),
            ))
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(flatten)]
    status: Status,
    #[serde(rename = "Search")]
    search: Option<Vec<SearchEntry>>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchEntry {
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "imdbID", default)]
    imdb_id: String,
    #[serde(rename = "Poster")]
    poster: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetailEnvelope {
    #[serde(flatten)]
    status: Status,
    #[serde(rename = "imdbID")]
    imdb_id: Option<String>,
    title: Option<String>,
    year: Option<String>,
    runtime: Option<String>,
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
    genre: Option<String>,
    plot: Option<String>,
    director: Option<String>,
    writer: Option<String>,
    actors: Option<String>,
    language: Option<String>,
    country: Option<String>,
    awards: Option<String>,
    poster: Option<String>,
}

fn parse<'a, T: Deserialize<'a>>(body: &'a str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| MarqueeError::Transport(e.to_string()))
}

/// Extract the service's error text from a body, if it is a `"False"` envelope
///
/// Used for non-success HTTP statuses, where OMDb still answers with an envelope
/// (e.g. `Invalid API key!` on 401).
pub fn service_error(body: &str) -> Option<String> {
    let status: Status = serde_json::from_str(body).ok()?;
    match status.into_result() {
        Err(MarqueeError::NotFound(message)) => Some(message),
        _ => None,
    }
}

/// Decode a search response body into a result page
///
/// A missing `totalResults` (or one that is not a number) falls back to the
/// number of items on the page.
pub fn decode_search(body: &str, page: u32) -> Result<ResultPage> {
    let envelope: SearchEnvelope = parse(body)?;
    envelope.status.into_result()?;

    let items: Vec<ResultItem> = envelope
        .search
        .unwrap_or_default()
        .into_iter()
        .map(|entry| ResultItem {
            id: entry.imdb_id,
            title: entry.title,
            year: entry.year,
            poster: Poster::from_field(entry.poster.as_deref()),
        })
        .collect();

    let total_results = envelope
        .total_results
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(items.len() as u64);

    Ok(ResultPage {
        items,
        total_results,
        page,
    })
}

/// Split the comma-separated `Genre` field into an ordered list
pub fn split_genres(raw: &str) -> Vec<String> {
    if raw.trim() == NOT_APPLICABLE {
        return Vec::new();
    }
    raw.split(',')
        .map(str::trim)
        .filter(|genre| !genre.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decode a detail response body
///
/// `requested_id` is used when the body does not echo `imdbID`.
pub fn decode_detail(body: &str, requested_id: &str) -> Result<DetailRecord> {
    let envelope: DetailEnvelope = parse(body)?;
    envelope.status.into_result()?;

    let text = |field: Option<String>| field.unwrap_or_else(|| NOT_APPLICABLE.to_string());

    Ok(DetailRecord {
        id: envelope
            .imdb_id
            .unwrap_or_else(|| requested_id.to_string()),
        genres: split_genres(envelope.genre.as_deref().unwrap_or(NOT_APPLICABLE)),
        poster: Poster::from_field(envelope.poster.as_deref()),
        title: text(envelope.title),
        year: text(envelope.year),
        runtime: text(envelope.runtime),
        rating: text(envelope.imdb_rating),
        plot: text(envelope.plot),
        director: text(envelope.director),
        writer: text(envelope.writer),
        actors: text(envelope.actors),
        language: text(envelope.language),
        country: text(envelope.country),
        awards: text(envelope.awards),
    })
}
