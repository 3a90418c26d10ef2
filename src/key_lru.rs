//! Bare-key LRU variant with a touch-only write API.
//!
//! [`KeyLru`] tracks keys with no payload: `touch` inserts the key if absent
//! or promotes it if present, with the same capacity-eviction policy as
//! [`LruCache::set`](crate::lru::LruCache::set). It is exactly the degenerate
//! case of the item cache where the item is its own key, and is implemented
//! as a thin wrapper over `LruCache` so both variants share one set of list
//! and index mechanics.

use std::fmt;
use std::hash::Hash;

use crate::error::{EvictError, LruError};
use crate::lru::LruCache;
use crate::traits::{LruItem, ReadOnlyLru};

/// A tracked key standing in as its own item.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Keyed<K>(K);

impl<K: Eq + Hash + Clone> LruItem for Keyed<K> {
    type Key = K;

    fn id(&self) -> K {
        self.0.clone()
    }
}

/// Fixed-capacity LRU of bare keys.
///
/// # Example
///
/// ```
/// use lrukit::key_lru::KeyLru;
/// use lrukit::traits::ReadOnlyLru;
///
/// let mut lru: KeyLru<u32> = KeyLru::new(2);
/// lru.touch(11).unwrap();
/// lru.touch(22).unwrap();
///
/// let (inserted, evicted) = lru.touch(33).unwrap();
/// assert!(inserted);
/// assert_eq!(evicted, Some(11));
/// assert_eq!(lru.newest(), Some(33));
/// ```
pub struct KeyLru<K: Eq + Hash + Clone> {
    inner: LruCache<Keyed<K>>,
}

impl<K: Eq + Hash + Clone> KeyLru<K> {
    /// Creates a key LRU holding at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: LruCache::new(capacity),
        }
    }

    /// Creates a key LRU with an eviction callback installed at
    /// construction. The callback receives a reference to each key that ages
    /// out or is removed.
    pub fn with_evict(
        capacity: usize,
        mut on_evict: impl FnMut(&K) -> Result<(), EvictError> + Send + 'static,
    ) -> Self {
        Self {
            inner: LruCache::with_evict(capacity, move |keyed: &Keyed<K>| on_evict(&keyed.0)),
        }
    }

    /// Bumps `key` to the front, inserting it if absent.
    ///
    /// Returns `(was_inserted, evicted)`; when the insert pushed the LRU
    /// past capacity, the least recently used key is evicted, passed to the
    /// callback, and returned.
    pub fn touch(&mut self, key: K) -> Result<(bool, Option<K>), LruError> {
        let (inserted, evicted) = self.inner.set(Keyed(key))?;
        Ok((inserted, evicted.map(|keyed| keyed.0)))
    }

    /// Removes `key`, firing the eviction callback with it.
    ///
    /// Returns whether the key was present.
    pub fn remove(&mut self, key: &K) -> Result<bool, LruError> {
        Ok(self.inner.remove(key)?.is_some())
    }

    /// Removes and returns the least recently used key.
    ///
    /// Fails with [`LruError::EmptyCache`] when nothing is tracked.
    pub fn pop_oldest(&mut self) -> Result<K, LruError> {
        self.inner.pop_oldest().map(|keyed| keyed.0)
    }

    /// Every tracked key, in no particular order.
    pub fn keys(&self) -> Vec<K> {
        self.inner.keys()
    }

    /// Removes every key without firing callbacks.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Diagnostic listing of the LRU front-to-back.
    pub fn dump(&self) -> String
    where
        K: fmt::Debug,
    {
        self.inner.dump()
    }
}

impl<K: Eq + Hash + Clone> ReadOnlyLru<K> for KeyLru<K> {
    fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn newest(&self) -> Option<K> {
        self.inner.newest()
    }

    fn oldest(&self) -> Option<K> {
        self.inner.oldest()
    }

    fn find_position(&self, key: &K) -> Option<usize> {
        self.inner.find_position(key)
    }
}

impl<K: Eq + Hash + Clone> fmt::Debug for KeyLru<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyLru")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn touch_inserts_then_promotes() {
        let mut lru = KeyLru::new(3);

        let (inserted, evicted) = lru.touch(11).unwrap();
        assert!(inserted);
        assert!(evicted.is_none());

        lru.touch(22).unwrap();
        assert_eq!(lru.newest(), Some(22));
        assert_eq!(lru.oldest(), Some(11));

        let (inserted, _) = lru.touch(11).unwrap();
        assert!(!inserted);
        assert_eq!(lru.newest(), Some(11));
        assert_eq!(lru.oldest(), Some(22));
        assert_eq!(lru.len(), 2);
    }

    #[test]
    fn overflow_drops_least_recent_key() {
        let dropped = Arc::new(AtomicI64::new(-1));
        let seen = Arc::clone(&dropped);
        let mut lru = KeyLru::with_evict(2, move |key: &i64| {
            seen.store(*key, Ordering::SeqCst);
            Ok(())
        });

        lru.touch(11).unwrap();
        lru.touch(22).unwrap();
        let (_, evicted) = lru.touch(33).unwrap();

        assert_eq!(evicted, Some(11));
        assert_eq!(dropped.load(Ordering::SeqCst), 11);
        assert_eq!(lru.len(), 2);
        assert!(!lru.contains(&11));
    }

    #[test]
    fn remove_reports_presence() {
        let mut lru = KeyLru::new(2);
        lru.touch("a").unwrap();
        lru.touch("b").unwrap();

        assert!(!lru.remove(&"z").unwrap());
        assert!(lru.remove(&"a").unwrap());
        assert_eq!(lru.len(), 1);
    }

    #[test]
    fn pop_oldest_then_empty_error() {
        let mut lru = KeyLru::new(2);
        lru.touch(1).unwrap();
        lru.touch(2).unwrap();

        assert_eq!(lru.pop_oldest().unwrap(), 1);
        assert_eq!(lru.pop_oldest().unwrap(), 2);
        assert!(lru.pop_oldest().unwrap_err().is_empty_cache());
    }

    #[test]
    fn find_position_shifts_with_touches() {
        let mut lru = KeyLru::new(2);
        lru.touch(11).unwrap();
        assert_eq!(lru.find_position(&11), Some(0));

        lru.touch(22).unwrap();
        assert_eq!(lru.find_position(&11), Some(1));
        assert_eq!(lru.find_position(&22), Some(0));

        lru.touch(11).unwrap();
        assert_eq!(lru.find_position(&11), Some(0));
    }

    #[test]
    fn keys_and_dump() {
        let mut lru = KeyLru::new(4);
        lru.touch(1).unwrap();
        lru.touch(2).unwrap();

        let mut keys = lru.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 2]);

        let dump = lru.dump();
        assert!(dump.contains("count: (2)"));
        assert!(dump.contains("000: 2"));
    }
}
