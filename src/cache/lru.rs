//! Least-recently-used cache.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::{BoundedCache, CacheEvent};

/// Bounded cache that evicts the least recently used key.
///
/// Internally the most recently used key sits at the back.
#[derive(Debug, Clone)]
pub struct LruCache<K> {
    entries: VecDeque<K>,
    capacity: NonZeroUsize,
}

impl<K: Clone + PartialEq> LruCache<K> {
    /// Creates an empty cache holding at most `capacity` keys.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get() + 1),
            capacity,
        }
    }

    /// Keys from most to least recently used.
    pub fn iter_recent(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().rev()
    }

    /// Keys from most to least recently used, cloned.
    pub fn snapshot(&self) -> Vec<K> {
        self.iter_recent().cloned().collect()
    }

    /// The most recently used key.
    pub fn most_recent(&self) -> Option<&K> {
        self.entries.back()
    }
}

impl<K: Clone + PartialEq> BoundedCache<K> for LruCache<K> {
    fn touch(&mut self, key: K) -> CacheEvent<K> {
        let hit = match self.entries.iter().position(|k| *k == key) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        };
        self.entries.push_back(key);

        if self.entries.len() > self.capacity.get() {
            if let Some(old) = self.entries.pop_front() {
                return CacheEvent::Evicted(old);
            }
        }

        if hit {
            CacheEvent::Hit
        } else {
            CacheEvent::Inserted
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity.get()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cap(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn touch_all(cache: &mut LruCache<String>, keys: &[&str]) {
        for key in keys {
            cache.touch(key.to_string());
        }
    }

    #[test]
    fn test_snapshot_most_recent_first() {
        let mut cache = LruCache::new(cap(5));
        touch_all(&mut cache, &["c1", "c2", "c3"]);
        assert_eq!(cache.snapshot(), vec!["c3", "c2", "c1"]);
        assert_eq!(cache.most_recent().map(String::as_str), Some("c3"));
    }

    #[test]
    fn test_repeat_moves_to_front_without_growing() {
        let mut cache = LruCache::new(cap(5));
        touch_all(&mut cache, &["c1", "c2", "c3"]);
        assert!(cache.touch("c1".to_string()).is_hit());
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.snapshot(), vec!["c1", "c3", "c2"]);
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let mut cache = LruCache::new(cap(3));
        touch_all(&mut cache, &["a", "b", "c", "a"]);
        // "b" is now the least recently used
        assert_eq!(
            cache.touch("d".to_string()),
            CacheEvent::Evicted("b".to_string())
        );
        assert_eq!(cache.snapshot(), vec!["d", "a", "c"]);
    }

    #[test]
    fn test_keeps_last_distinct_keys() {
        let mut cache = LruCache::new(cap(5));
        touch_all(&mut cache, &["c1", "c2", "c3", "c4", "c5", "c6", "c7"]);
        assert_eq!(cache.snapshot(), vec!["c7", "c6", "c5", "c4", "c3"]);
        assert!(!cache.contains(&"c1".to_string()));
    }

    #[test]
    fn test_capacity_one() {
        let mut cache = LruCache::new(cap(1));
        assert_eq!(cache.touch(1), CacheEvent::Inserted);
        assert_eq!(cache.touch(1), CacheEvent::Hit);
        assert_eq!(cache.touch(2), CacheEvent::Evicted(1));
        assert_eq!(cache.snapshot(), vec![2]);
    }

    #[test]
    fn test_clear() {
        let mut cache = LruCache::new(cap(2));
        touch_all(&mut cache, &["a"]);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.most_recent().is_none());
    }

    #[test]
    fn test_len_never_exceeds_capacity() {
        let mut cache = LruCache::new(NonZeroUsize::MIN);
        for key in [1u32, 2, 2, 3, 1] {
            let event = cache.touch(key);
            assert_ne!(event, CacheEvent::Evicted(key));
            assert!(cache.len() <= cache.capacity());
        }
        assert_eq!(cache.snapshot(), vec![1]);
    }
}
