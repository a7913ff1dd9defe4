//! Bounded caches fed by the intake event stream.
//!
//! Two eviction disciplines share the [`BoundedCache`] interface:
//!
//! | Cache | Repeat key | Full |
//! |-------|-----------|------|
//! | [`FifoCache`] | no-op | evict oldest insertion |
//! | [`LruCache`] | move to most recent | evict least recently used |
//!
//! Capacities are small, so both keep their keys in a `VecDeque` and find
//! keys by linear scan.

mod fifo;
mod lru;

pub use fifo::FifoCache;
pub use lru::LruCache;

/// Outcome of touching a cache with a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEvent<K> {
    /// The key was already cached.
    Hit,
    /// The key was added without evicting anything.
    Inserted,
    /// The key was added and the returned key was evicted.
    Evicted(K),
}

impl<K> CacheEvent<K> {
    /// Whether the key was already cached.
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheEvent::Hit)
    }

    /// The evicted key, if any.
    pub fn evicted(&self) -> Option<&K> {
        match self {
            CacheEvent::Evicted(key) => Some(key),
            _ => None,
        }
    }
}

/// A capacity-bounded set of keys with an eviction discipline.
pub trait BoundedCache<K> {
    /// Records a use of `key`, evicting according to the discipline.
    fn touch(&mut self, key: K) -> CacheEvent<K>;

    /// Whether `key` is cached.
    fn contains(&self, key: &K) -> bool;

    /// Number of cached keys.
    fn len(&self) -> usize;

    /// Maximum number of cached keys.
    fn capacity(&self) -> usize;

    /// Removes every key.
    fn clear(&mut self);

    /// Whether the cache holds no keys.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
