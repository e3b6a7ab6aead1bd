use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;

use crate::error::Result;

/// Durable string-keyed storage the rest of the crate is written against.
///
/// Values are opaque strings; the collection helpers layer JSON on top.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// List every key currently present.
    fn keys(&self) -> Result<Vec<String>>;

    /// Human-readable location, used by status output.
    fn describe(&self) -> String;

    /// Count keys and bytes held by the store.
    fn stats(&self) -> Result<StoreStats> {
        let mut stats = StoreStats::default();
        for key in self.keys()? {
            if let Some(value) = self.read(&key)? {
                stats.total_keys += 1;
                stats.total_bytes += value.len() as u64;
            }
        }
        Ok(stats)
    }
}

/// Storage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStats {
    pub total_keys: usize,
    pub total_bytes: u64,
}

/// Memory-only store for tests and throwaway sessions.
///
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Arc::new(RwLock::new(map)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = self.entries.read().keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_basic_operations() {
        let store = MemoryStore::new();
        assert_eq!(store.read("missing").unwrap(), None);

        store.write("greeting", "hello").unwrap();
        assert_eq!(store.read("greeting").unwrap().as_deref(), Some("hello"));

        store.write("greeting", "bye").unwrap();
        assert_eq!(store.read("greeting").unwrap().as_deref(), Some("bye"));
        assert_eq!(store.len(), 1);

        store.remove("greeting").unwrap();
        store.remove("greeting").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.write("k", "v").unwrap();
        assert_eq!(handle.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_store_stats() {
        let store = MemoryStore::with_entries([("a", "123"), ("b", "45")]);
        let stats = store.stats().unwrap();
        assert_eq!(stats.total_keys, 2);
        assert_eq!(stats.total_bytes, 5);
        assert_eq!(store.keys().unwrap(), vec!["a", "b"]);
    }
}
