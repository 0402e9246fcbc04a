//! Cache Statistics Module
//!
//! Occupancy snapshot of the cache store, taken under a single lock scope
//! so the counts are always mutually consistent.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache occupancy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Current number of entries in the mapping, expired or not
    pub total_entries: usize,
    /// Entries whose expiration time is still in the future
    pub active_entries: usize,
    /// Entries that have expired but not yet been evicted
    pub expired_entries: usize,
    /// Keys currently present in the mapping
    pub cache_keys: Vec<String>,
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.active_entries, 0);
        assert_eq!(stats.expired_entries, 0);
        assert!(stats.cache_keys.is_empty());
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats {
            total_entries: 2,
            active_entries: 1,
            expired_entries: 1,
            cache_keys: vec!["london_metric".to_string(), "paris_metric".to_string()],
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"total_entries\":2"));
        assert!(json.contains("london_metric"));
    }
}
