//! Per-title favorite flags
//!
//! The favorite set lives under a single key as a JSON array of identifiers.
//! An absent key means no favorites.

pub mod store;

use crate::error::Result;

pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Storage key holding the favorite identifiers
pub const FAVORITES_KEY: &str = "favorites";

#[derive(Debug)]
pub struct FavoriteStore<S> {
    store: S,
}

impl<S: KeyValueStore> FavoriteStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read_ids(&self) -> Result<Vec<String>> {
        match self.store.get(FAVORITES_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn write_ids(&self, ids: &[String]) -> Result<()> {
        let raw = serde_json::to_string(ids)?;
        self.store.set(FAVORITES_KEY, &raw)
    }

    pub fn is_favorite(&self, id: &str) -> Result<bool> {
        Ok(self.read_ids()?.iter().any(|fav| fav == id))
    }

    /// Flip membership of `id` and return the new state
    pub fn toggle(&self, id: &str) -> Result<bool> {
        let mut ids = self.read_ids()?;
        let now_favorite = match ids.iter().position(|fav| fav == id) {
            Some(index) => {
                ids.remove(index);
                false
            }
            None => {
                ids.push(id.to_string());
                true
            }
        };
        self.write_ids(&ids)?;
        tracing::debug!(id, now_favorite, "toggled favorite");
        Ok(now_favorite)
    }

    /// All favorite identifiers in the order they were added
    pub fn list(&self) -> Result<Vec<String>> {
        self.read_ids()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
