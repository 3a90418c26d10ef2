//! Slab of reusable slots addressed by stable `SlotId` handles.
//!
//! Nodes of the recency list live here so that list links can be plain
//! `SlotId` values instead of raw pointers. A freed slot index is recycled by
//! the next insert, so the arena never grows past the high-water mark of live
//! entries.

/// Stable handle for a slot in a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) u32);

impl SlotId {
    /// Returns the raw slot index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Growable slot store with a free list for O(1) insert and remove.
#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Option<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> SlotArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates an empty arena with space reserved for `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `value` and returns its handle, reusing a freed slot if any.
    pub fn insert(&mut self, value: T) -> SlotId {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Some(value);
                idx
            },
            None => {
                self.slots.push(Some(value));
                (self.slots.len() - 1) as u32
            },
        };
        self.len += 1;
        SlotId(idx)
    }

    /// Frees the slot for `id` and returns its value, or `None` if the slot
    /// is already vacant.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let value = self.slots.get_mut(id.index())?.take()?;
        self.free.push(id.0);
        self.len -= 1;
        Some(value)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.index()).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.index()).and_then(|slot| slot.as_mut())
    }

    /// Returns `true` if `id` refers to an occupied slot.
    pub fn contains(&self, id: SlotId) -> bool {
        matches!(self.slots.get(id.index()), Some(Some(_)))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value and forgets the free list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let mut arena = SlotArena::new();
        let a = arena.insert("a");
        let b = arena.insert("b");

        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a), Some(&"a"));
        assert_eq!(arena.get(b), Some(&"b"));

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.len(), 1);
        assert!(!arena.contains(a));
        assert_eq!(arena.remove(a), None);
    }

    #[test]
    fn freed_slot_is_reused() {
        let mut arena = SlotArena::with_capacity(2);
        let a = arena.insert(1);
        arena.insert(2);

        arena.remove(a);
        let c = arena.insert(3);

        assert_eq!(a.index(), c.index());
        assert_eq!(arena.get(c), Some(&3));
    }

    #[test]
    fn stale_handle_after_reuse_reads_new_value() {
        // SlotIds are stable only while the slot stays occupied; the caller
        // (the cache index) must drop handles when it frees slots.
        let mut arena = SlotArena::new();
        let a = arena.insert(10);
        arena.remove(a);
        arena.insert(20);
        assert_eq!(arena.get(a), Some(&20));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = SlotArena::new();
        let a = arena.insert(String::from("x"));
        if let Some(v) = arena.get_mut(a) {
            v.push('y');
        }
        assert_eq!(arena.get(a).map(String::as_str), Some("xy"));
    }

    #[test]
    fn clear_resets_everything() {
        let mut arena = SlotArena::new();
        let a = arena.insert(1);
        arena.insert(2);
        arena.clear();

        assert!(arena.is_empty());
        assert!(!arena.contains(a));
    }
}
