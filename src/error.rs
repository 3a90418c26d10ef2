//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`LruError`]: Operational errors — popping from an empty cache, or an
//!   eviction callback reporting failure.
//! - [`ConfigError`]: Returned by fallible constructors when construction
//!   parameters are invalid (e.g. zero capacity).
//! - [`EvictError`]: The boxed error type eviction callbacks may return.
//!
//! There is nothing transient here: operations either succeed or report one
//! of these synchronously, with no retry path.

use std::fmt;

/// Error type eviction callbacks may return.
///
/// Whatever the callback reports is wrapped in
/// [`LruError::EvictionCallback`] and surfaced to the caller of the
/// operation that triggered the removal.
pub type EvictError = Box<dyn std::error::Error + Send + Sync>;

// ---------------------------------------------------------------------------
// LruError
// ---------------------------------------------------------------------------

/// Operational error from a cache mutation.
#[derive(Debug)]
pub enum LruError {
    /// `pop_oldest` was called on an empty cache.
    EmptyCache,

    /// The eviction callback failed. The structural removal is not undone:
    /// the node was already unlinked before the callback fired.
    EvictionCallback(EvictError),
}

impl fmt::Display for LruError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LruError::EmptyCache => f.write_str("pop from empty cache"),
            LruError::EvictionCallback(err) => write!(f, "eviction callback failed: {err}"),
        }
    }
}

impl std::error::Error for LruError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LruError::EmptyCache => None,
            LruError::EvictionCallback(err) => Some(err.as_ref()),
        }
    }
}

impl LruError {
    /// Returns `true` for the empty-cache case.
    #[inline]
    pub fn is_empty_cache(&self) -> bool {
        matches!(self, LruError::EmptyCache)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by [`LruBuilder::try_build`](crate::builder::LruBuilder::try_build)
/// when the configured capacity is zero. Carries a human-readable description
/// of which parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
