//! Scripted in-memory lookup for unit tests.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::{MarqueeError, Result};

use super::{DetailRecord, MovieLookup, Poster, ResultItem, ResultPage};

#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    NotFound(String),
    Transport(String),
}

impl<T: Clone> Reply<T> {
    fn to_result(&self) -> Result<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::NotFound(msg) => Err(MarqueeError::NotFound(msg.clone())),
            Reply::Transport(msg) => Err(MarqueeError::Transport(msg.clone())),
        }
    }
}

#[derive(Default)]
pub struct FakeLookup {
    searches: Mutex<HashMap<(String, u32), (Reply<ResultPage>, Duration)>>,
    details: Mutex<HashMap<String, Reply<DetailRecord>>>,
    pub search_calls: Mutex<Vec<(String, u32)>>,
    pub detail_calls: Mutex<Vec<String>>,
}

impl FakeLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_search(self, query: &str, page: u32, reply: Reply<ResultPage>) -> Self {
        self.on_search_delayed(query, page, reply, Duration::ZERO)
    }

    pub fn on_search_delayed(
        self,
        query: &str,
        page: u32,
        reply: Reply<ResultPage>,
        delay: Duration,
    ) -> Self {
        self.searches
            .lock()
            .insert((query.to_string(), page), (reply, delay));
        self
    }

    pub fn on_detail(self, id: &str, reply: Reply<DetailRecord>) -> Self {
        self.details.lock().insert(id.to_string(), reply);
        self
    }

    pub fn search_call_count(&self) -> usize {
        self.search_calls.lock().len()
    }
}

impl MovieLookup for FakeLookup {
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage> {
        self.search_calls.lock().push((query.to_string(), page));
        let scripted = self.searches.lock().get(&(query.to_string(), page)).cloned();
        match scripted {
            Some((reply, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                reply.to_result()
            }
            None => Err(MarqueeError::NotFound("Movie not found!".to_string())),
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Result<DetailRecord> {
        self.detail_calls.lock().push(id.to_string());
        let scripted = self.details.lock().get(id).cloned();
        match scripted {
            Some(reply) => reply.to_result(),
            None => Err(MarqueeError::NotFound("Incorrect IMDb ID.".to_string())),
        }
    }
}

pub fn item(id: &str, title: &str, year: &str) -> ResultItem {
    ResultItem {
        id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster: Poster::Missing,
    }
}

pub fn page(items: Vec<ResultItem>, total_results: u64, page: u32) -> ResultPage {
    ResultPage {
        items,
        total_results,
        page,
    }
}

pub fn record(id: &str, title: &str) -> DetailRecord {
    DetailRecord {
        id: id.to_string(),
        title: title.to_string(),
        year: "2010".to_string(),
        runtime: "148 min".to_string(),
        rating: "8.8".to_string(),
        genres: vec!["Action".to_string(), "Sci-Fi".to_string()],
        plot: "N/A".to_string(),
        director: "N/A".to_string(),
        writer: "N/A".to_string(),
        actors: "N/A".to_string(),
        language: "English".to_string(),
        country: "N/A".to_string(),
        awards: "N/A".to_string(),
        poster: Poster::Missing,
    }
}
