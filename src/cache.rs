//! Bounded in-memory response cache.

use tracing::debug;

/// A least-recently-used cache with fixed capacity.
///
/// Lookups refresh an entry's recency; inserting past capacity evicts the
/// least-recently-used entry. Entries are kept in recency order, oldest
/// first; a linear scan is plenty at the single-digit capacities used here.
pub struct LruCache<K, V> {
    capacity: usize,
    entries: Vec<(K, V)>,
}

impl<K: Eq, V: Clone> LruCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Returns the cached value for `key`, marking it most-recently-used.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.iter().position(|(k, _)| k == key) {
            Some(pos) => {
                debug!("cache HIT");
                let entry = self.entries.remove(pos);
                let value = entry.1.clone();
                self.entries.push(entry);
                Some(value)
            }
            None => {
                debug!("cache MISS");
                None
            }
        }
    }

    /// Inserts `value` under `key` as the most-recently-used entry,
    /// replacing any previous value for the key and evicting the
    /// least-recently-used entry if the cache is full.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
            self.entries.remove(pos);
        } else if self.entries.len() == self.capacity {
            debug!("cache EVICT");
            self.entries.remove(0);
        }
        debug!("cache PUT");
        self.entries.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_put() {
        let mut cache = LruCache::<String, i32>::new(8);

        assert!(cache.get(&"key1".to_string()).is_none());

        cache.put("key1".to_string(), 123);
        assert_eq!(cache.get(&"key1".to_string()), Some(123));
        assert!(cache.get(&"key2".to_string()).is_none());
    }

    #[test]
    fn test_put_replaces_existing_key() {
        let mut cache = LruCache::<&str, i32>::new(2);
        cache.put("a", 1);
        cache.put("a", 2);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a"), Some(2));
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = LruCache::<&str, i32>::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        assert!(cache.get(&"a").is_none());
        assert_eq!(cache.get(&"b"), Some(2));
        assert_eq!(cache.get(&"c"), Some(3));
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache = LruCache::<&str, i32>::new(2);
        cache.put("a", 1);
        cache.put("b", 2);

        // "a" becomes most-recently-used, so "b" is the eviction victim.
        assert_eq!(cache.get(&"a"), Some(1));
        cache.put("c", 3);

        assert_eq!(cache.get(&"a"), Some(1));
        assert!(cache.get(&"b").is_none());
        assert_eq!(cache.get(&"c"), Some(3));
    }

    #[test]
    fn test_capacity_bound_holds() {
        let mut cache = LruCache::<i32, i32>::new(8);
        for i in 0..20 {
            cache.put(i, i);
        }
        assert_eq!(cache.len(), 8);
        assert!(cache.get(&11).is_none());
        assert_eq!(cache.get(&12), Some(12));
        assert_eq!(cache.get(&19), Some(19));
    }
}
