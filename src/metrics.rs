//! Operation counters for [`LruCache`](crate::lru::LruCache).
//!
//! Counters are recorded inline by the cache under the `metrics` feature and
//! read out as an owned [`LruMetricsSnapshot`]. Read-path counters
//! (`find_position`) use `Cell` because those methods take `&self`.
//!
//! Recording adds a plain integer increment per operation; there is no
//! locking and no allocation.

use std::cell::Cell;

/// Mutable counter block owned by a cache instance.
#[derive(Debug, Default)]
pub struct LruMetrics {
    pub set_calls: u64,
    pub set_updates: u64,
    pub set_inserts: u64,
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub evicted_entries: u64,
    pub removed_entries: u64,
    pub pop_oldest_calls: u64,
    pub pop_oldest_found: u64,
    pub find_position_calls: Cell<u64>,
    pub find_position_found: Cell<u64>,
}

impl LruMetrics {
    pub(crate) fn record_find_position(&self, found: bool) {
        self.find_position_calls.set(self.find_position_calls.get() + 1);
        if found {
            self.find_position_found.set(self.find_position_found.get() + 1);
        }
    }
}

/// Point-in-time copy of a cache's counters plus its size and capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LruMetricsSnapshot {
    pub set_calls: u64,
    pub set_updates: u64,
    pub set_inserts: u64,
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub touch_calls: u64,
    pub touch_found: u64,
    pub evicted_entries: u64,
    pub removed_entries: u64,
    pub pop_oldest_calls: u64,
    pub pop_oldest_found: u64,
    pub find_position_calls: u64,
    pub find_position_found: u64,
    pub cache_len: u64,
    pub capacity: u64,
}

impl LruMetrics {
    pub(crate) fn snapshot(&self, cache_len: usize, capacity: usize) -> LruMetricsSnapshot {
        LruMetricsSnapshot {
            set_calls: self.set_calls,
            set_updates: self.set_updates,
            set_inserts: self.set_inserts,
            get_calls: self.get_calls,
            get_hits: self.get_hits,
            get_misses: self.get_misses,
            touch_calls: self.touch_calls,
            touch_found: self.touch_found,
            evicted_entries: self.evicted_entries,
            removed_entries: self.removed_entries,
            pop_oldest_calls: self.pop_oldest_calls,
            pop_oldest_found: self.pop_oldest_found,
            find_position_calls: self.find_position_calls.get(),
            find_position_found: self.find_position_found.get(),
            cache_len: cache_len as u64,
            capacity: capacity as u64,
        }
    }
}
