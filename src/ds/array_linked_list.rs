//! Keyed singly linked list stored in a `LinkArena`.
//!
//! Elements live in the arena's parallel arrays and are threaded into an
//! occupied chain by slot index; the arena recycles removed slots through
//! its free chain. List order is purely logical and independent of slot
//! indices.
//!
//! ## Architecture
//!
//! ```text
//!   arena (LinkArena<T>)
//!   ┌────────┬───────────────────────┐
//!   │ SlotId │ value        next     │
//!   ├────────┼───────────────────────┤
//!   │ 0      │ Some(B)      2        │      head ─► [1] ─► [0] ─► [2]
//!   │ 1      │ Some(A)      0        │                logical order A, B, C
//!   │ 2      │ Some(C)      NIL      │
//!   └────────┴───────────────────────┘
//! ```
//!
//! ## Operations
//! - positional: `insert`, `get_at`, `remove_at` (+ first/last shorthands)
//! - keyed: `get`, `remove`, `insert_before`, `insert_after`
//!
//! ## Performance
//!
//! | Operation            | Time              | Notes                        |
//! |----------------------|-------------------|------------------------------|
//! | `insert(p, v)`       | O(p) + O(1) amort.| walk, then free-chain pop    |
//! | `remove_at(i)`       | O(i)              | predecessor walk             |
//! | `get(key)`           | O(len)            | linear scan, no hashing      |
//! | `len`                | O(1)              |                              |
//!
//! The chain is singly linked, so `remove_last` still walks from the head.
//! `debug_validate_invariants()` is available in debug/test builds.
use crate::ds::link_arena::{LinkArena, SlotId};
use crate::error::{ConfigError, ListError};
use crate::traits::Keyed;

#[derive(Debug)]
/// Ordered keyed collection over arena-backed parallel arrays.
pub struct ArrayLinkedList<T> {
    arena: LinkArena<T>,
    head: Option<SlotId>,
}

impl<T: Keyed> ArrayLinkedList<T> {
    /// Creates an empty list with `initial_capacity` pre-linked free slots.
    ///
    /// A zero capacity is honored: the backing arrays stay empty until the
    /// first insert triggers growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            arena: LinkArena::with_capacity(initial_capacity),
            head: None,
        }
    }

    /// Creates an empty list, rejecting a zero initial capacity.
    pub fn try_new(initial_capacity: usize) -> Result<Self, ConfigError> {
        if initial_capacity == 0 {
            return Err(ConfigError::new(
                "initial capacity must be greater than zero",
            ));
        }
        Ok(Self::new(initial_capacity))
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns the current slot capacity of the backing arrays.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Returns the element whose key equals `key`.
    ///
    /// # Errors
    ///
    /// [`ListError::KeyNotFound`] if no live element carries the key.
    pub fn get(&self, key: &T::Key) -> Result<&T, ListError> {
        self.slot_of(key)
            .and_then(|id| self.arena.value(id))
            .ok_or(ListError::KeyNotFound)
    }

    /// Returns the element at logical position `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] unless `index < len()`.
    pub fn get_at(&self, index: usize) -> Result<&T, ListError> {
        if index >= self.len() {
            return Err(ListError::OutOfRange {
                index,
                len: self.len(),
            });
        }
        self.slot_at(index)
            .and_then(|id| self.arena.value(id))
            .ok_or(ListError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Inserts `value` so that it ends up at logical position `position`,
    /// shifting later elements back by one.
    ///
    /// Triggers arena growth when the free chain is exhausted; all existing
    /// positions and keys are preserved across growth.
    ///
    /// # Errors
    ///
    /// [`ListError::OutOfRange`] unless `position <= len()`.
    pub fn insert(&mut self, position: usize, value: T) -> Result<(), ListError> {
        let len = self.len();
        if position > len {
            return Err(ListError::OutOfRange {
                index: position,
                len,
            });
        }
        if position == 0 {
            let id = self.arena.acquire(value);
            self.arena.set_next(id, self.head);
            self.head = Some(id);
        } else {
            let prev = self
                .slot_at(position - 1)
                .ok_or(ListError::OutOfRange {
                    index: position,
                    len,
                })?;
            let next = self.arena.next(prev);
            let id = self.arena.acquire(value);
            self.arena.set_next(prev, Some(id));
            self.arena.set_next(id, next);
        }
        Ok(())
    }

    /// Inserts `value` at the front. Equivalent to `insert(0, value)`.
    pub fn insert_first(&mut self, value: T) -> Result<(), ListError> {
        self.insert(0, value)
    }

    /// Inserts `value` at the back. Equivalent to `insert(len(), value)`.
    pub fn insert_last(&mut self, value: T) -> Result<(), ListError> {
        self.insert(self.len(), value)
    }

    /// Inserts `value` immediately before the element keyed by `key`.
    ///
    /// # Errors
    ///
    /// [`ListError::KeyNotFound`] if no live element carries `key`.
    pub fn insert_before(&mut self, key: &T::Key, value: T) -> Result<(), ListError> {
        let position = self.position_of(key).ok_or(ListError::KeyNotFound)?;
        self.insert(position, value)
    }

    /// Inserts `value` immediately after the element keyed by `key` (at the
    /// back when that element is last).
    ///
    /// # Errors
    ///
    /// [`ListError::KeyNotFound`] if no live element carries `key`.
    pub fn insert_after(&mut self, key: &T::Key, value: T) -> Result<(), ListError> {
        let position = self.position_of(key).ok_or(ListError::KeyNotFound)?;
        self.insert(position + 1, value)
    }

    /// Removes and returns the element keyed by `key`.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] on an empty list, [`ListError::KeyNotFound`]
    /// when no live element carries the key.
    pub fn remove(&mut self, key: &T::Key) -> Result<T, ListError> {
        let head = self.head.ok_or(ListError::Empty)?;
        if self.arena.value(head).is_some_and(|v| v.key() == key) {
            return self.unlink_head().ok_or(ListError::KeyNotFound);
        }
        // Predecessor scan over the occupied chain; correct for any length,
        // including two- and three-element lists.
        let mut cursor = head;
        while let Some(next) = self.arena.next(cursor) {
            if self.arena.value(next).is_some_and(|v| v.key() == key) {
                return self.unlink_after(cursor).ok_or(ListError::KeyNotFound);
            }
            cursor = next;
        }
        Err(ListError::KeyNotFound)
    }

    /// Removes and returns the element at logical position `index`.
    ///
    /// # Errors
    ///
    /// [`ListError::Empty`] on an empty list, otherwise
    /// [`ListError::OutOfRange`] unless `index < len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        let len = self.len();
        if index >= len {
            return Err(ListError::OutOfRange { index, len });
        }
        let removed = if index == 0 {
            self.unlink_head()
        } else {
            self.slot_at(index - 1)
                .and_then(|prev| self.unlink_after(prev))
        };
        removed.ok_or(ListError::OutOfRange { index, len })
    }

    /// Removes and returns the first element. Equivalent to `remove_at(0)`.
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        self.remove_at(0)
    }

    /// Removes and returns the last element; still O(len) because the chain
    /// is singly linked and must be walked from the head.
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        if self.is_empty() {
            return Err(ListError::Empty);
        }
        self.remove_at(self.len() - 1)
    }

    /// Detaches the head slot and recycles it through the free chain.
    fn unlink_head(&mut self) -> Option<T> {
        let id = self.head?;
        self.head = self.arena.next(id);
        self.arena.release(id)
    }

    /// Detaches the slot after `prev` and recycles it through the free chain.
    fn unlink_after(&mut self, prev: SlotId) -> Option<T> {
        let id = self.arena.next(prev)?;
        self.arena.set_next(prev, self.arena.next(id));
        self.arena.release(id)
    }

    /// Walks `index` steps along the occupied chain from the head.
    fn slot_at(&self, index: usize) -> Option<SlotId> {
        let mut id = self.head?;
        for _ in 0..index {
            id = self.arena.next(id)?;
        }
        Some(id)
    }

    /// Scans the occupied chain for the slot keyed by `key`.
    fn slot_of(&self, key: &T::Key) -> Option<SlotId> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            if self.arena.value(id).is_some_and(|v| v.key() == key) {
                return Some(id);
            }
            cursor = self.arena.next(id);
        }
        None
    }

    /// Scans the occupied chain for the logical position of `key`.
    fn position_of(&self, key: &T::Key) -> Option<usize> {
        let mut cursor = self.head;
        let mut position = 0;
        while let Some(id) = cursor {
            if self.arena.value(id).is_some_and(|v| v.key() == key) {
                return Some(position);
            }
            cursor = self.arena.next(id);
            position += 1;
        }
        None
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        // The occupied chain must visit exactly len() live, distinct slots;
        // the arena asserts the complementary free-chain half, so together
        // the two chains partition [0, capacity).
        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            assert!(seen.insert(id), "occupied chain revisits a slot");
            assert!(
                self.arena.value(id).is_some(),
                "occupied chain reaches a cleared slot"
            );
            count += 1;
            assert!(count <= self.len());
            cursor = self.arena.next(id);
        }
        assert_eq!(count, self.len());
        self.arena.debug_validate_invariants();
    }
}

#[cfg(feature = "concurrency")]
#[derive(Debug)]
/// Thread-safe wrapper serializing every operation on a whole
/// [`ArrayLinkedList`] behind a `parking_lot::RwLock`.
///
/// The core list is single-threaded by design; this wrapper is the
/// "mutex around the whole structure" callers are otherwise expected to
/// provide themselves.
pub struct ConcurrentArrayLinkedList<T> {
    inner: parking_lot::RwLock<ArrayLinkedList<T>>,
}

#[cfg(feature = "concurrency")]
impl<T: Keyed> ConcurrentArrayLinkedList<T> {
    /// Creates an empty list with `initial_capacity` pre-linked free slots.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            inner: parking_lot::RwLock::new(ArrayLinkedList::new(initial_capacity)),
        }
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        let list = self.inner.read();
        list.len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        let list = self.inner.read();
        list.is_empty()
    }

    /// Returns the current slot capacity of the backing arrays.
    pub fn capacity(&self) -> usize {
        let list = self.inner.read();
        list.capacity()
    }

    /// Runs `f` on the element keyed by `key`.
    pub fn get_with<R>(&self, key: &T::Key, f: impl FnOnce(&T) -> R) -> Result<R, ListError> {
        let list = self.inner.read();
        list.get(key).map(f)
    }

    /// Tries to run `f` on the element keyed by `key` without blocking.
    pub fn try_get_with<R>(
        &self,
        key: &T::Key,
        f: impl FnOnce(&T) -> R,
    ) -> Option<Result<R, ListError>> {
        let list = self.inner.try_read()?;
        Some(list.get(key).map(f))
    }

    /// Runs `f` on the element at logical position `index`.
    pub fn get_at_with<R>(&self, index: usize, f: impl FnOnce(&T) -> R) -> Result<R, ListError> {
        let list = self.inner.read();
        list.get_at(index).map(f)
    }

    /// Inserts `value` at logical position `position`.
    pub fn insert(&self, position: usize, value: T) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.insert(position, value)
    }

    /// Inserts `value` at the front.
    pub fn insert_first(&self, value: T) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.insert_first(value)
    }

    /// Inserts `value` at the back.
    pub fn insert_last(&self, value: T) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.insert_last(value)
    }

    /// Tries to insert `value` at the back without blocking.
    pub fn try_insert_last(&self, value: T) -> Option<Result<(), ListError>> {
        let mut list = self.inner.try_write()?;
        Some(list.insert_last(value))
    }

    /// Inserts `value` immediately before the element keyed by `key`.
    pub fn insert_before(&self, key: &T::Key, value: T) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.insert_before(key, value)
    }

    /// Inserts `value` immediately after the element keyed by `key`.
    pub fn insert_after(&self, key: &T::Key, value: T) -> Result<(), ListError> {
        let mut list = self.inner.write();
        list.insert_after(key, value)
    }

    /// Removes and returns the element keyed by `key`.
    pub fn remove(&self, key: &T::Key) -> Result<T, ListError> {
        let mut list = self.inner.write();
        list.remove(key)
    }

    /// Removes and returns the element at logical position `index`.
    pub fn remove_at(&self, index: usize) -> Result<T, ListError> {
        let mut list = self.inner.write();
        list.remove_at(index)
    }

    /// Removes and returns the first element.
    pub fn remove_first(&self) -> Result<T, ListError> {
        let mut list = self.inner.write();
        list.remove_first()
    }

    /// Tries to remove the first element without blocking.
    pub fn try_remove_first(&self) -> Option<Result<T, ListError>> {
        let mut list = self.inner.try_write()?;
        Some(list.remove_first())
    }

    /// Removes and returns the last element.
    pub fn remove_last(&self) -> Result<T, ListError> {
        let mut list = self.inner.write();
        list.remove_last()
    }
}
