//! Persistence module - remembering UI state between sessions
//!
//! State is kept in a host key-value store under three keys. The
//! [`Persistence`] adapter is best-effort: store failures are logged and
//! swallowed, and unreadable values fall back to defaults.
//!
//! - `file_store`: JSON document on disk
//! - `memory`: process-local store

mod file_store;
mod memory;

use std::path::Path;

use crate::error::StoreResult;
use crate::model::{CategoryFilter, FavoriteSet};

pub use file_store::FileStore;
pub use memory::MemoryStore;

pub const SEARCH_TEXT_KEY: &str = "bookclub-library-search";
pub const CATEGORY_KEY: &str = "bookclub-library-category";
pub const FAVORITES_KEY: &str = "bookclub-library-favorites";

/// Synchronous string key-value store provided by the host
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// Open the file store in `data_dir`, or an in-memory store when there is
/// no directory or the file cannot be read.
pub fn open_store(data_dir: Option<&Path>) -> Box<dyn KeyValueStore> {
    let Some(dir) = data_dir else {
        tracing::info!("Using in-memory storage, nothing will be kept");
        return Box::new(MemoryStore::new());
    };

    match FileStore::open(dir) {
        Ok(store) => {
            tracing::info!(path = %store.path().display(), "Opened storage");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Storage unavailable, falling back to memory");
            Box::new(MemoryStore::new())
        }
    }
}

/// Best-effort adapter over a [`KeyValueStore`]
pub struct Persistence {
    store: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    pub fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Could not read from storage");
                None
            }
        }
    }

    pub fn write(&mut self, key: &str, value: &str) {
        match self.store.set(key, value) {
            Ok(()) => tracing::trace!(key, bytes = value.len(), "Stored value"),
            Err(e) => tracing::warn!(key, error = %e, "Could not write to storage"),
        }
    }

    pub fn load_search_text(&self) -> String {
        self.read(SEARCH_TEXT_KEY).unwrap_or_default()
    }

    pub fn load_category(&self) -> CategoryFilter {
        self.read(CATEGORY_KEY)
            .map(|raw| CategoryFilter::from_stored(&raw))
            .unwrap_or_default()
    }

    pub fn load_favorites(&self) -> FavoriteSet {
        let Some(payload) = self.read(FAVORITES_KEY) else {
            return FavoriteSet::new();
        };
        if payload.is_empty() {
            return FavoriteSet::new();
        }
        match FavoriteSet::from_json(&payload) {
            Ok(favorites) => favorites,
            Err(e) => {
                tracing::warn!(error = %e, "Stored favorites are unreadable, starting empty");
                FavoriteSet::new()
            }
        }
    }

    pub fn save_search_text(&mut self, text: &str) {
        self.write(SEARCH_TEXT_KEY, text);
    }

    pub fn save_category(&mut self, category: &CategoryFilter) {
        self.write(CATEGORY_KEY, category.as_str());
    }

    pub fn save_favorites(&mut self, favorites: &FavoriteSet) {
        match favorites.to_json() {
            Ok(payload) => self.write(FAVORITES_KEY, &payload),
            Err(e) => tracing::warn!(error = %e, "Could not encode favorites"),
        }
    }

    /// Forget everything this adapter stores.
    pub fn reset(&mut self) {
        for key in [SEARCH_TEXT_KEY, CATEGORY_KEY, FAVORITES_KEY] {
            if let Err(e) = self.store.remove(key) {
                tracing::warn!(key, error = %e, "Could not remove from storage");
            }
        }
    }
}
