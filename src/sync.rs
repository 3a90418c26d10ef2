//! Thread-safe wrapper around the single-threaded cache core.
//!
//! The core's list relinking is not safe under interleaved mutation, so the
//! wrapper serializes every operation behind one `parking_lot::Mutex` — a
//! mutex rather than an RwLock because every LRU read is also a structural
//! write (promotion). Items are returned by value (`T: Clone` for `get`) so
//! no borrow outlives the critical section.
//!
//! Handles are cheap to clone and share one cache:
//!
//! ```
//! use lrukit::sync::SharedLru;
//! use lrukit::traits::LruItem;
//!
//! #[derive(Debug, Clone)]
//! struct Job(u32);
//!
//! impl LruItem for Job {
//!     type Key = u32;
//!     fn id(&self) -> u32 {
//!         self.0
//!     }
//! }
//!
//! let cache = SharedLru::new(64);
//! let handle = cache.clone();
//! std::thread::spawn(move || {
//!     handle.set(Job(1)).unwrap();
//! })
//! .join()
//! .unwrap();
//! assert!(cache.contains(&1));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::{EvictError, LruError};
use crate::lru::LruCache;
use crate::traits::{LruItem, ReadOnlyLru};

/// Cloneable, mutex-serialized handle to an [`LruCache`].
pub struct SharedLru<T: LruItem> {
    inner: Arc<Mutex<LruCache<T>>>,
}

impl<T: LruItem> Clone for SharedLru<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: LruItem> SharedLru<T> {
    /// Creates a shared cache holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Creates a shared cache with an eviction callback. The callback runs
    /// inside the lock; it must not touch this cache.
    pub fn with_evict(
        capacity: usize,
        on_evict: impl FnMut(&T) -> Result<(), EvictError> + Send + 'static,
    ) -> Self {
        Self {
            inner: Arc::new(Mutex::new(LruCache::with_evict(capacity, on_evict))),
        }
    }

    /// See [`LruCache::set`].
    pub fn set(&self, item: T) -> Result<(bool, Option<T>), LruError> {
        self.inner.lock().set(item)
    }

    /// Looks up and promotes `key`, returning a clone of the item.
    pub fn get(&self, key: &T::Key) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Looks up `key` without promoting it.
    pub fn peek(&self, key: &T::Key) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    /// See [`LruCache::touch`].
    pub fn touch(&self, key: &T::Key) -> bool {
        self.inner.lock().touch(key)
    }

    /// See [`LruCache::remove`].
    pub fn remove(&self, key: &T::Key) -> Result<Option<T>, LruError> {
        self.inner.lock().remove(key)
    }

    /// See [`LruCache::pop_oldest`].
    pub fn pop_oldest(&self) -> Result<T, LruError> {
        self.inner.lock().pop_oldest()
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn newest(&self) -> Option<T::Key> {
        self.inner.lock().newest()
    }

    pub fn oldest(&self) -> Option<T::Key> {
        self.inner.lock().oldest()
    }

    pub fn find_position(&self, key: &T::Key) -> Option<usize> {
        self.inner.lock().find_position(key)
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}
