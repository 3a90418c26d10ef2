//! Bounded LRU cache over items with identity keys.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────────────────────────┐
//!   │                      LruCache<T: LruItem>                   │
//!   │                                                             │
//!   │   FxHashMap<T::Key, SlotId>      RecencyList<T>             │
//!   │   ┌─────────┬────────┐           head ─► [T] ◄──► [T] ◄──►  │
//!   │   │   key   │ SlotId │ ────────►        (MRU)      ...      │
//!   │   └─────────┴────────┘           [T] ◄── tail (LRU)         │
//!   │                                                             │
//!   │   on_evict: Option<EvictCallback<T>>                        │
//!   └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The index gives O(1) lookup by key; the list keeps items ordered from
//! most- to least-recently used. Every mutating operation updates both in one
//! step — there is no intermediate observable state. When an insert pushes
//! the entry count past capacity, the back of the list is unlinked, the
//! eviction callback fires, and the victim is handed back to the caller.
//!
//! The cache is single-threaded: no locking, no suspension points, no I/O.
//! Wrap it in [`SharedLru`](crate::sync::SharedLru) (feature `concurrency`)
//! for cross-thread use. The eviction callback runs inline with the
//! triggering operation and must not call back into the same cache.

use std::fmt;
use std::fmt::Write as _;

use rustc_hash::FxHashMap;

use crate::ds::recency_list::{Iter, RecencyList};
use crate::ds::slot_arena::SlotId;
use crate::error::{EvictError, LruError};
#[cfg(feature = "metrics")]
use crate::metrics::{LruMetrics, LruMetricsSnapshot};
use crate::traits::{LruItem, ReadOnlyLru};

/// Callback invoked with every item that leaves the cache through capacity
/// eviction, [`remove`](LruCache::remove), or
/// [`pop_oldest`](LruCache::pop_oldest).
///
/// The node is fully unlinked before the callback fires, so a callback error
/// never leaves a dangling entry; the error is surfaced to the caller as
/// [`LruError::EvictionCallback`].
pub type EvictCallback<T> = Box<dyn FnMut(&T) -> Result<(), EvictError> + Send>;

/// Fixed-capacity LRU cache tracking items by their [`LruItem::id`] key.
///
/// # Example
///
/// ```
/// use lrukit::lru::LruCache;
/// use lrukit::traits::{LruItem, ReadOnlyLru};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Entry {
///     id: u32,
///     payload: &'static str,
/// }
///
/// impl LruItem for Entry {
///     type Key = u32;
///     fn id(&self) -> u32 {
///         self.id
///     }
/// }
///
/// let mut cache = LruCache::new(2);
/// cache.set(Entry { id: 1, payload: "a" }).unwrap();
/// cache.set(Entry { id: 2, payload: "b" }).unwrap();
///
/// // Inserting a third entry evicts the least recently used (id 1).
/// let (inserted, evicted) = cache.set(Entry { id: 3, payload: "c" }).unwrap();
/// assert!(inserted);
/// assert_eq!(evicted.map(|e| e.id), Some(1));
/// assert_eq!(cache.newest(), Some(3));
/// assert_eq!(cache.oldest(), Some(2));
/// ```
pub struct LruCache<T: LruItem> {
    index: FxHashMap<T::Key, SlotId>,
    list: RecencyList<T>,
    capacity: usize,
    on_evict: Option<EvictCallback<T>>,
    #[cfg(feature = "metrics")]
    metrics: LruMetrics,
}

impl<T: LruItem> LruCache<T> {
    /// Creates a cache holding at most `capacity` items, with no eviction
    /// callback.
    ///
    /// A capacity of 0 is accepted: every `set` of a new key then evicts the
    /// just-inserted item. Use [`LruBuilder::try_build`](crate::builder::LruBuilder::try_build)
    /// to reject zero capacity instead.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            list: RecencyList::with_capacity(capacity),
            capacity,
            on_evict: None,
            #[cfg(feature = "metrics")]
            metrics: LruMetrics::default(),
        }
    }

    /// Creates a cache with an eviction callback installed at construction.
    ///
    /// The callback fires once per node removal (capacity eviction, explicit
    /// remove, or pop), after the node is unlinked. It must not call back
    /// into this cache.
    pub fn with_evict(
        capacity: usize,
        on_evict: impl FnMut(&T) -> Result<(), EvictError> + Send + 'static,
    ) -> Self {
        let mut cache = Self::new(capacity);
        cache.on_evict = Some(Box::new(on_evict));
        cache
    }

    pub(crate) fn set_evict_callback(&mut self, on_evict: EvictCallback<T>) {
        self.on_evict = Some(on_evict);
    }

    /// Inserts or updates `item`, promoting its key to the front.
    ///
    /// Returns `(was_inserted, evicted)`:
    /// - existing key: the payload is replaced in place, the entry moves to
    ///   the front, result is `(false, None)`;
    /// - new key: the entry is inserted at the front, result is `(true, _)`.
    ///   If the insert pushed the cache past capacity, the back entry is
    ///   evicted, passed to the callback, and returned. At most one eviction
    ///   can occur, because capacity is exceeded by exactly one.
    ///
    /// The only failure is a callback error; the eviction itself is already
    /// complete when that surfaces.
    pub fn set(&mut self, item: T) -> Result<(bool, Option<T>), LruError> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.set_calls += 1;
        }

        let key = item.id();
        if let Some(&id) = self.index.get(&key) {
            #[cfg(feature = "metrics")]
            {
                self.metrics.set_updates += 1;
            }
            if let Some(slot) = self.list.get_mut(id) {
                *slot = item;
            }
            self.list.move_to_front(id);
            return Ok((false, None));
        }

        #[cfg(feature = "metrics")]
        {
            self.metrics.set_inserts += 1;
        }
        let id = self.list.push_front(item);
        self.index.insert(key, id);

        let mut evicted = None;
        if self.index.len() > self.capacity {
            if let Some(victim) = self.list.pop_back() {
                self.index.remove(&victim.id());
                #[cfg(feature = "metrics")]
                {
                    self.metrics.evicted_entries += 1;
                }
                self.notify(&victim)?;
                evicted = Some(victim);
            }
        }

        Ok((true, evicted))
    }

    /// Looks up `key`, promoting the entry to the front on a hit.
    ///
    /// A miss returns `None` with no structural change: recency order is
    /// never mutated by a miss.
    pub fn get(&mut self, key: &T::Key) -> Option<&T> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.get_calls += 1;
        }
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.get_misses += 1;
                }
                return None;
            },
        };
        #[cfg(feature = "metrics")]
        {
            self.metrics.get_hits += 1;
        }
        self.list.move_to_front(id);
        self.list.get(id)
    }

    /// Looks up `key` without promoting it. Order is untouched.
    pub fn peek(&self, key: &T::Key) -> Option<&T> {
        self.index.get(key).and_then(|&id| self.list.get(id))
    }

    /// Promotes `key` to the front without returning the item.
    ///
    /// Returns `true` if the key was present. Touching the current front
    /// repeatedly is a no-op beyond the boolean.
    pub fn touch(&mut self, key: &T::Key) -> bool {
        #[cfg(feature = "metrics")]
        {
            self.metrics.touch_calls += 1;
        }
        match self.index.get(key) {
            Some(&id) => {
                #[cfg(feature = "metrics")]
                {
                    self.metrics.touch_found += 1;
                }
                self.list.move_to_front(id)
            },
            None => false,
        }
    }

    /// Removes the entry for `key`, relinking its neighbors and firing the
    /// eviction callback with the removed item.
    ///
    /// Returns the removed item, or `Ok(None)` if the key was absent.
    pub fn remove(&mut self, key: &T::Key) -> Result<Option<T>, LruError> {
        let id = match self.index.remove(key) {
            Some(id) => id,
            None => return Ok(None),
        };
        let item = match self.list.remove(id) {
            Some(item) => item,
            None => return Ok(None),
        };
        #[cfg(feature = "metrics")]
        {
            self.metrics.removed_entries += 1;
        }
        self.notify(&item)?;
        Ok(Some(item))
    }

    /// Removes and returns the least recently used item.
    ///
    /// Fails with [`LruError::EmptyCache`] when nothing is tracked. Fires
    /// the eviction callback with the popped item, like [`remove`](Self::remove).
    pub fn pop_oldest(&mut self) -> Result<T, LruError> {
        #[cfg(feature = "metrics")]
        {
            self.metrics.pop_oldest_calls += 1;
        }
        let item = self.list.pop_back().ok_or(LruError::EmptyCache)?;
        self.index.remove(&item.id());
        #[cfg(feature = "metrics")]
        {
            self.metrics.pop_oldest_found += 1;
        }
        self.notify(&item)?;
        Ok(item)
    }

    /// Every tracked key, in no particular order.
    pub fn keys(&self) -> Vec<T::Key> {
        self.index.keys().cloned().collect()
    }

    /// Iterates items front-to-back (most to least recently used).
    pub fn iter(&self) -> Iter<'_, T> {
        self.list.iter()
    }

    /// Removes every entry. The eviction callback does not fire: it covers
    /// capacity eviction, explicit removes, and pops only.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    /// Diagnostic listing of the cache front-to-back, one key per line.
    /// Not part of the functional contract.
    pub fn dump(&self) -> String
    where
        T::Key: fmt::Debug,
    {
        let mut out = String::new();
        let _ = writeln!(out, "count: ({}) capacity: ({})", self.len(), self.capacity);
        for (position, item) in self.iter().enumerate() {
            let _ = writeln!(out, "{:03}: {:?}", position, item.id());
        }
        out
    }

    /// Copies out the operation counters.
    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> LruMetricsSnapshot {
        self.metrics.snapshot(self.index.len(), self.capacity)
    }

    fn notify(&mut self, item: &T) -> Result<(), LruError> {
        if let Some(cb) = self.on_evict.as_mut() {
            cb(item).map_err(LruError::EvictionCallback)?;
        }
        Ok(())
    }
}

impl<T: LruItem> ReadOnlyLru<T::Key> for LruCache<T> {
    fn contains(&self, key: &T::Key) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn newest(&self) -> Option<T::Key> {
        self.list.front().map(|item| item.id())
    }

    fn oldest(&self) -> Option<T::Key> {
        self.list.back().map(|item| item.id())
    }

    fn find_position(&self, key: &T::Key) -> Option<usize> {
        let target = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_find_position(false);
                return None;
            },
        };
        let position = self.list.iter_ids().position(|id| id == target);
        #[cfg(feature = "metrics")]
        self.metrics.record_find_position(position.is_some());
        position
    }
}

impl<T: LruItem> fmt::Debug for LruCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("len", &self.index.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
