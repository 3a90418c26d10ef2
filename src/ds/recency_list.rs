//! Doubly linked recency list backed by [`SlotArena`].
//!
//! Nodes are linked by `SlotId`, never by pointer. `head` is the front (most
//! recently used), `tail` is the back (least recently used, the eviction
//! target). Each node carries `before` (toward the front) and `after` (toward
//! the back) links.
//!
//! ```text
//!   head ──► [id_2] ◄──► [id_0] ◄──► [id_1] ◄── tail
//!            (MRU)                   (LRU)
//! ```
//!
//! All mutations are O(1); `iter`/`iter_ids` walk `after` links from the
//! front. `debug_validate` checks the link invariants in debug builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Node<T> {
    value: T,
    before: Option<SlotId>,
    after: Option<SlotId>,
}

/// Ordered sequence of values from most- to least-recently used.
#[derive(Debug)]
pub struct RecencyList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> RecencyList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with node storage reserved for `capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Value at the front (most recently used).
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Value at the back (least recently used).
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Inserts a new node at the front and returns its handle.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            before: None,
            after: self.head,
        });
        match self.head {
            Some(head) => {
                if let Some(node) = self.arena.get_mut(head) {
                    node.before = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.debug_validate();
        id
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Unlinks the node `id`, frees its slot, and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        let value = self.arena.remove(id).map(|node| node.value);
        self.debug_validate();
        value
    }

    /// Moves an existing node to the front; returns `false` if `id` is not
    /// in the list. Already-front nodes are left alone.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if self.head == Some(id) {
            return true;
        }
        if self.detach(id).is_none() {
            return false;
        }
        self.attach_front(id);
        self.debug_validate();
        true
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates values front-to-back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Iterates node handles front-to-back.
    pub fn iter_ids(&self) -> IdIter<'_, T> {
        IdIter {
            list: self,
            current: self.head,
        }
    }

    /// Unlinks `id` from its neighbors without freeing the slot. The node's
    /// own links are cleared so a later attach starts clean.
    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (before, after) = {
            let node = self.arena.get(id)?;
            (node.before, node.after)
        };

        match before {
            Some(b) => {
                if let Some(node) = self.arena.get_mut(b) {
                    node.after = after;
                }
            },
            None => self.head = after,
        }

        match after {
            Some(a) => {
                if let Some(node) = self.arena.get_mut(a) {
                    node.before = before;
                }
            },
            None => self.tail = before,
        }

        if let Some(node) = self.arena.get_mut(id) {
            node.before = None;
            node.after = None;
        }
        Some(())
    }

    /// Links an already-detached node in at the front.
    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(node) = self.arena.get_mut(id) {
            node.before = None;
            node.after = old_head;
        }
        match old_head {
            Some(head) => {
                if let Some(node) = self.arena.get_mut(head) {
                    node.before = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    /// Walks the list both ways and panics on a broken invariant. Compiled
    /// out of release builds.
    #[inline]
    pub(crate) fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        {
            if self.arena.is_empty() {
                debug_assert!(self.head.is_none());
                debug_assert!(self.tail.is_none());
                return;
            }

            let head = self.head.expect("non-empty list has no head");
            let tail = self.tail.expect("non-empty list has no tail");
            debug_assert!(self.arena.get(head).map_or(false, |n| n.before.is_none()));
            debug_assert!(self.arena.get(tail).map_or(false, |n| n.after.is_none()));

            let mut count = 0usize;
            let mut current = self.head;
            let mut last = None;
            while let Some(id) = current {
                count += 1;
                if count > self.arena.len() {
                    panic!("cycle detected in recency list");
                }
                let node = self.arena.get(id).expect("linked node missing from arena");
                debug_assert_eq!(node.before, last, "before link disagrees with walk");
                last = Some(id);
                current = node.after;
            }
            debug_assert_eq!(last, Some(tail));
            debug_assert_eq!(count, self.arena.len());
        }
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-back value iterator.
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.after;
        Some(&node.value)
    }
}

/// Front-to-back handle iterator.
pub struct IdIter<'a, T> {
    list: &'a RecencyList<T>,
    current: Option<SlotId>,
}

impl<T> Iterator for IdIter<'_, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<SlotId> {
        let id = self.current?;
        self.current = self.list.arena.get(id).and_then(|node| node.after);
        Some(id)
    }
}
