//! Scripted catalogue standing in for the remote service

use std::collections::HashMap;
use std::time::Duration;

use marquee::remote::{DetailRecord, MovieLookup, Poster, ResultItem, ResultPage};
use marquee::{MarqueeError, Result};
use parking_lot::Mutex;

#[derive(Default)]
pub struct ScriptedLookup {
    pages: HashMap<(String, u32), (std::result::Result<ResultPage, String>, Duration)>,
    records: HashMap<String, DetailRecord>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, query: &str, page: u32, items: Vec<ResultItem>, total: u64) -> Self {
        let result = ResultPage {
            items,
            total_results: total,
            page,
        };
        self.pages
            .insert((query.to_string(), page), (Ok(result), Duration::ZERO));
        self
    }

    pub fn slow_page(
        mut self,
        query: &str,
        page: u32,
        items: Vec<ResultItem>,
        total: u64,
        delay: Duration,
    ) -> Self {
        let result = ResultPage {
            items,
            total_results: total,
            page,
        };
        self.pages
            .insert((query.to_string(), page), (Ok(result), delay));
        self
    }

    pub fn failing(mut self, query: &str, page: u32, message: &str) -> Self {
        self.pages.insert(
            (query.to_string(), page),
            (Err(message.to_string()), Duration::ZERO),
        );
        self
    }

    pub fn record(mut self, record: DetailRecord) -> Self {
        self.records.insert(record.id.clone(), record);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl MovieLookup for ScriptedLookup {
    async fn search(&self, query: &str, page: u32) -> Result<ResultPage> {
        self.calls.lock().push(format!("search:{query}:{page}"));
        match self.pages.get(&(query.to_string(), page)) {
            Some((result, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(*delay).await;
                }
                result.clone().map_err(MarqueeError::NotFound)
            }
            None => Err(MarqueeError::NotFound("Movie not found!".to_string())),
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Result<DetailRecord> {
        self.calls.lock().push(format!("detail:{id}"));
        self.records
            .get(id)
            .cloned()
            .ok_or_else(|| MarqueeError::NotFound("Incorrect IMDb ID.".to_string()))
    }
}

pub fn movie(id: &str, title: &str, year: &str) -> ResultItem {
    ResultItem {
        id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster: Poster::from_field(Some(&format!("https://img.example/{id}.jpg"))),
    }
}

pub fn detail(id: &str, title: &str, genres: &[&str]) -> DetailRecord {
    DetailRecord {
        id: id.to_string(),
        title: title.to_string(),
        year: "2008".to_string(),
        runtime: "152 min".to_string(),
        rating: "9.0".to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        plot: "When the menace known as the Joker wreaks havoc...".to_string(),
        director: "Christopher Nolan".to_string(),
        writer: "Jonathan Nolan".to_string(),
        actors: "Christian Bale, Heath Ledger".to_string(),
        language: "English".to_string(),
        country: "United States".to_string(),
        awards: "Won 2 Oscars".to_string(),
        poster: Poster::Missing,
    }
}
