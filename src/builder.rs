//! Builder for [`LruCache`] with construction-time callback injection.
//!
//! The eviction callback is part of the cache's configuration, not mutable
//! state: it is installed once here and cannot be swapped afterwards.
//!
//! ## Example
//!
//! ```
//! use lrukit::builder::LruBuilder;
//! use lrukit::traits::{LruItem, ReadOnlyLru};
//!
//! #[derive(Debug, Clone)]
//! struct Blob {
//!     id: u64,
//! }
//!
//! impl LruItem for Blob {
//!     type Key = u64;
//!     fn id(&self) -> u64 {
//!         self.id
//!     }
//! }
//!
//! let mut cache = LruBuilder::new(16)
//!     .on_evict(|blob: &Blob| {
//!         println!("aged out: {}", blob.id);
//!         Ok(())
//!     })
//!     .build();
//! cache.set(Blob { id: 1 }).unwrap();
//! assert_eq!(cache.len(), 1);
//! ```

use crate::error::{ConfigError, EvictError};
use crate::lru::{EvictCallback, LruCache};
use crate::traits::LruItem;

/// Configures and constructs an [`LruCache`].
pub struct LruBuilder<T: LruItem> {
    capacity: usize,
    on_evict: Option<EvictCallback<T>>,
}

impl<T: LruItem> LruBuilder<T> {
    /// Starts a builder for a cache holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            on_evict: None,
        }
    }

    /// Installs the eviction callback. It fires once per node removal
    /// (capacity eviction, explicit remove, or pop), after the node is
    /// unlinked.
    pub fn on_evict(
        mut self,
        cb: impl FnMut(&T) -> Result<(), EvictError> + Send + 'static,
    ) -> Self {
        self.on_evict = Some(Box::new(cb));
        self
    }

    /// Builds the cache. Zero capacity is accepted (every `set` of a new key
    /// then immediately evicts it); use [`try_build`](Self::try_build) to
    /// reject it.
    pub fn build(self) -> LruCache<T> {
        let mut cache = LruCache::new(self.capacity);
        if let Some(cb) = self.on_evict {
            cache.set_evict_callback(cb);
        }
        cache
    }

    /// Builds the cache, rejecting invalid configuration.
    pub fn try_build(self) -> Result<LruCache<T>, ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::new("capacity must be > 0"));
        }
        Ok(self.build())
    }
}
