//! Reading history and the submit-reading flow used by the pH reader screen.

mod service;

pub use service::*;

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::config::EngineConfig;
use crate::engine::ValidationError;
use crate::models::ReadingHistoryEntry;
use crate::store::{KeyValueStore, StoreError};

/// History errors.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type HistoryResult<T> = Result<T, HistoryError>;

/// Most-recent-first list of readings, capped at a fixed length.
pub struct ReadingHistory<S: KeyValueStore> {
    store: S,
    key: String,
    limit: usize,
}

impl<S: KeyValueStore> ReadingHistory<S> {
    /// Create a history over `store` using the configured key and limit.
    pub fn new(store: S, config: &EngineConfig) -> Self {
        Self {
            store,
            key: config.history_key.clone(),
            limit: config.history_limit.max(1),
        }
    }

    /// Stored entries, newest first.
    ///
    /// A value that no longer deserializes is treated as empty history.
    pub fn load(&self) -> HistoryResult<Vec<ReadingHistoryEntry>> {
        let Some(value) = self.store.get(&self.key)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_value(value) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding unreadable reading history");
                Ok(Vec::new())
            }
        }
    }

    /// Add an entry at the front, evicting the oldest beyond the limit.
    pub fn record(&self, entry: ReadingHistoryEntry) -> HistoryResult<Vec<ReadingHistoryEntry>> {
        let mut entries = self.load()?;
        entries.insert(0, entry);
        entries.truncate(self.limit);

        let value: Value = serde_json::to_value(&entries)?;
        self.store.set(&self.key, &value)?;
        Ok(entries)
    }

    /// Remove all entries.
    pub fn clear(&self) -> HistoryResult<()> {
        self.store.remove(&self.key)?;
        Ok(())
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
