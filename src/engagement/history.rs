use std::sync::Arc;

use crate::error::Result;
use crate::storage::collection::{read_collection, write_collection};
use crate::storage::{keys, KeyValueStore};

pub const MAX_HISTORY: usize = 5;

/// Recent search queries, most recent first.
#[derive(Clone)]
pub struct SearchHistory {
    store: Arc<dyn KeyValueStore>,
}

impl SearchHistory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn entries(&self) -> Result<Vec<String>> {
        read_collection(self.store.as_ref(), keys::SEARCH_HISTORY)
    }

    /// Move `query` to the front, dropping an identical older entry and
    /// anything past the fifth. Blank queries are ignored.
    pub fn record(&self, query: &str) -> Result<()> {
        if query.trim().is_empty() {
            return Ok(());
        }

        let mut entries = self.entries()?;
        entries.retain(|entry| entry != query);
        entries.insert(0, query.to_string());
        entries.truncate(MAX_HISTORY);
        write_collection(self.store.as_ref(), keys::SEARCH_HISTORY, &entries)
    }

    pub fn clear(&self) -> Result<()> {
        write_collection::<String>(self.store.as_ref(), keys::SEARCH_HISTORY, &[])
    }
}
