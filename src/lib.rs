//! lrukit: bounded least-recently-used tracking with eviction callbacks.
//!
//! Two cache variants share one set of index + recency-list mechanics:
//! [`lru::LruCache`] tracks key+payload items, [`key_lru::KeyLru`] tracks
//! bare keys with a touch-only API. Both are single-threaded; the optional
//! [`sync::SharedLru`] wrapper (feature `concurrency`) serializes a cache
//! behind one mutex.

pub mod builder;
pub mod ds;
pub mod error;
pub mod key_lru;
pub mod lru;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
#[cfg(feature = "concurrency")]
pub mod sync;
pub mod traits;
