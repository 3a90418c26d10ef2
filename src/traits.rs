//! Trait seams for the cache types.
//!
//! [`LruItem`] is the identity capability tracked items must provide, and
//! [`ReadOnlyLru`] is the side-effect-free surface shared by both cache
//! variants ([`LruCache`](crate::lru::LruCache) for key+payload items,
//! [`KeyLru`](crate::key_lru::KeyLru) for bare keys).

use std::hash::Hash;

/// A payload type that can report a stable identity key.
///
/// The key indexes the item for the whole time it is tracked, so it must not
/// change while the item is in a cache. Two items with equal keys are treated
/// as the same logical entry: a `set` with an existing key replaces the
/// payload in place.
///
/// # Example
///
/// ```
/// use lrukit::traits::LruItem;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Page {
///     id: u64,
///     bytes: Vec<u8>,
/// }
///
/// impl LruItem for Page {
///     type Key = u64;
///
///     fn id(&self) -> u64 {
///         self.id
///     }
/// }
/// ```
pub trait LruItem {
    /// The identity key. Must be usable as a hash-map key.
    type Key: Eq + Hash + Clone;

    /// Returns this item's identity key.
    fn id(&self) -> Self::Key;
}

/// Read-only queries shared by both cache variants.
///
/// None of these mutate recency order; use the inherent `get`/`touch`/`set`
/// methods on the concrete types to promote an entry.
pub trait ReadOnlyLru<K> {
    /// Returns `true` if `key` is currently tracked. Never affects order.
    fn contains(&self, key: &K) -> bool;

    /// Number of tracked entries.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured maximum number of entries.
    fn capacity(&self) -> usize;

    /// Returns `true` when the next insert of a new key would evict.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Key at the front (most recently used), or `None` when empty.
    fn newest(&self) -> Option<K>;

    /// Key at the back (least recently used), or `None` when empty.
    fn oldest(&self) -> Option<K>;

    /// 0-based distance of `key` from the front, or `None` if absent.
    ///
    /// O(n): walks the order list. Absent keys return `None` rather than an
    /// error; both variants follow this one policy.
    fn find_position(&self, key: &K) -> Option<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLru {
        keys: Vec<u32>,
        capacity: usize,
    }

    impl ReadOnlyLru<u32> for FixedLru {
        fn contains(&self, key: &u32) -> bool {
            self.keys.contains(key)
        }

        fn len(&self) -> usize {
            self.keys.len()
        }

        fn capacity(&self) -> usize {
            self.capacity
        }

        fn newest(&self) -> Option<u32> {
            self.keys.first().copied()
        }

        fn oldest(&self) -> Option<u32> {
            self.keys.last().copied()
        }

        fn find_position(&self, key: &u32) -> Option<usize> {
            self.keys.iter().position(|k| k == key)
        }
    }

    #[test]
    fn default_methods_derive_from_len_and_capacity() {
        let lru = FixedLru {
            keys: vec![3, 2, 1],
            capacity: 3,
        };

        assert!(!lru.is_empty());
        assert!(lru.is_full());
        assert_eq!(lru.newest(), Some(3));
        assert_eq!(lru.oldest(), Some(1));
        assert_eq!(lru.find_position(&2), Some(1));
        assert_eq!(lru.find_position(&9), None);
    }
}
