//! First-in-first-out cache.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::{BoundedCache, CacheEvent};

/// Bounded cache that evicts the oldest insertion.
///
/// Re-inserting a cached key leaves the cache untouched; its position is
/// fixed by its first insertion. A key that has been evicted is treated as
/// new when it comes back.
#[derive(Debug, Clone)]
pub struct FifoCache<K> {
    entries: VecDeque<K>,
    capacity: NonZeroUsize,
}

impl<K: Clone + PartialEq> FifoCache<K> {
    /// Creates an empty cache holding at most `capacity` keys.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.get()),
            capacity,
        }
    }

    /// Keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.entries.iter()
    }
}

impl<K: AsRef<str>> FifoCache<K> {
    /// Labels from oldest to newest, skipping blank entries.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|k| k.as_ref())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl<K: Clone + PartialEq> BoundedCache<K> for FifoCache<K> {
    fn touch(&mut self, key: K) -> CacheEvent<K> {
        if self.entries.contains(&key) {
            return CacheEvent::Hit;
        }

        let evicted = if self.entries.len() >= self.capacity.get() {
            self.entries.pop_front()
        } else {
            None
        };
        self.entries.push_back(key);

        match evicted {
            Some(old) => CacheEvent::Evicted(old),
            None => CacheEvent::Inserted,
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
