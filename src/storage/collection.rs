//! JSON-array collections stored under a single key.
//!
//! Every mutation in the crate goes through the same full-collection
//! rewrite: read the whole array, change it in memory, write it back.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::storage::traits::KeyValueStore;

/// Read the array stored under `key`. An absent or blank value is an empty
/// collection; a malformed one is a serialization error.
pub fn read_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Vec<T>> {
    match store.read(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
        _ => Ok(Vec::new()),
    }
}

/// Replace the array stored under `key`.
pub fn write_collection<T: Serialize>(store: &dyn KeyValueStore, key: &str, items: &[T]) -> Result<()> {
    let raw = serde_json::to_string(items)?;
    debug!(key, items = items.len(), bytes = raw.len(), "Writing collection");
    store.write(key, &raw)
}
