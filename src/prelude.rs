pub use crate::builder::LruBuilder;
pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::{ConfigError, EvictError, LruError};
pub use crate::key_lru::KeyLru;
pub use crate::lru::{EvictCallback, LruCache};
pub use crate::traits::{LruItem, ReadOnlyLru};

#[cfg(feature = "metrics")]
pub use crate::metrics::LruMetricsSnapshot;
#[cfg(feature = "concurrency")]
pub use crate::sync::SharedLru;
