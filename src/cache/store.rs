//! Cache Store Module
//!
//! Generic in-memory key/value store with per-entry TTL expiration.
//! Carries no knowledge of weather semantics; values are opaque clones.

use std::collections::HashMap;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// In-memory TTL cache keyed by strings.
///
/// Expiration is lazy: `get` evicts an expired entry at read time, so
/// correctness never depends on the periodic [`cleanup_expired`] sweep.
///
/// [`cleanup_expired`]: CacheStore::cleanup_expired
#[derive(Debug, Default)]
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V: Clone> CacheStore<V> {
    // == Constructor ==
    /// Creates a new empty CacheStore.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `None` if the key was never set, was deleted, or has
    /// expired. Expired entries are evicted on read so that occupancy
    /// stats stay accurate. A hit has no side effects.
    pub fn get(&mut self, key: &str) -> Option<V> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                self.entries.remove(key);
                tracing::debug!("cache entry expired: {}", key);
                None
            }
            Some(entry) => {
                tracing::debug!("cache hit: {}", key);
                Some(entry.value.clone())
            }
            None => None,
        }
    }

    // == Set ==
    /// Stores a key-value pair, unconditionally replacing any existing entry.
    ///
    /// A `ttl_seconds` of zero is clamped to one second (see [`CacheEntry::new`]);
    /// the entry invariant `expires_at > created_at` always holds.
    pub fn set(&mut self, key: String, value: V, ttl_seconds: u64) {
        tracing::debug!("cache set: {} (ttl: {}s)", key, ttl_seconds.max(1));
        self.entries.insert(key, CacheEntry::new(value, ttl_seconds));
    }

    // == Delete ==
    /// Removes an entry by key. Returns whether an entry existed.
    pub fn delete(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            tracing::debug!("cache deleted: {}", key);
        }
        removed
    }

    // == Clear ==
    /// Empties the store unconditionally. Used for test isolation.
    pub fn clear(&mut self) {
        let count = self.entries.len();
        self.entries.clear();
        tracing::info!("cache cleared: {} entries removed", count);
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed. Purely an optimization;
    /// `get` handles expiry on its own.
    pub fn cleanup_expired(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        let removed = before - self.entries.len();

        if removed > 0 {
            tracing::info!("cache cleanup: {} expired entries removed", removed);
        }

        removed
    }

    // == Stats ==
    /// Returns an occupancy snapshot of the store.
    ///
    /// All counts derive from the same pass over the mapping, so they are
    /// consistent with each other.
    pub fn stats(&self) -> CacheStats {
        let now = current_timestamp_ms();
        let total_entries = self.entries.len();
        let expired_entries = self
            .entries
            .values()
            .filter(|entry| now >= entry.expires_at)
            .count();

        CacheStats {
            total_entries,
            active_entries: total_entries - expired_entries,
            expired_entries,
            cache_keys: self.entries.keys().cloned().collect(),
        }
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_store_new() {
        let store: CacheStore<String> = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 60);
        let value = store.get("key1");

        assert_eq!(value.as_deref(), Some("value1"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new();
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_store_delete() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 60);
        assert!(store.delete("key1"));

        assert!(store.is_empty());
        assert!(store.get("key1").is_none());
    }

    #[test]
    fn test_store_delete_nonexistent() {
        let mut store: CacheStore<String> = CacheStore::new();
        assert!(!store.delete("nonexistent"));
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 60);
        store.set("key1".to_string(), "value2".to_string(), 60);

        assert_eq!(store.get("key1").as_deref(), Some("value2"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 1);

        // Should be accessible immediately
        assert!(store.get("key1").is_some());

        sleep(Duration::from_millis(1100));

        // Should be expired now, and lazily evicted
        assert!(store.get("key1").is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_store_clear() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 60);
        store.set("key2".to_string(), "value2".to_string(), 60);
        store.clear();

        assert!(store.is_empty());
        assert!(store.get("key1").is_none());
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = CacheStore::new();

        store.set("key1".to_string(), "value1".to_string(), 1);
        store.set("key2".to_string(), "value2".to_string(), 10);

        // Wait for key1 to expire
        sleep(Duration::from_millis(1100));

        let removed = store.cleanup_expired();
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("key2").is_some());
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();
        store.clear();

        store.set("key1".to_string(), "value1".to_string(), 60);
        store.set("key2".to_string(), "value2".to_string(), 60);

        let stats = store.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.active_entries, 2);
        assert_eq!(stats.expired_entries, 0);
        assert!(stats.cache_keys.contains(&"key1".to_string()));
    }

    #[test]
    fn test_store_stats_counts_expired() {
        let mut store = CacheStore::new();

        store.set("short".to_string(), "v".to_string(), 1);
        store.set("long".to_string(), "v".to_string(), 60);

        sleep(Duration::from_millis(1100));

        // No get() has run, so the expired entry is still in the mapping
        let stats = store.stats();
        assert_eq!(stats.total_entries, 2);
        assert_eq!(stats.active_entries, 1);
        assert_eq!(stats.expired_entries, 1);
    }
}
