//! Slot arena with chain links threaded through a parallel index array.
//!
//! Two arrays of equal length back the whole structure: `values` holds the
//! payloads and `links` holds, for each slot, the index of the next slot in
//! whichever chain the slot currently belongs to. Free slots form a singly
//! linked chain owned by the arena; occupied slots form a chain owned by the
//! caller and spliced through [`next`](LinkArena::next) /
//! [`set_next`](LinkArena::set_next).
//!
//! ## Architecture
//!
//! ```text
//!   values: Vec<Option<T>>      links: Vec<usize>
//!   ┌───┬──────────┐            ┌───┬──────┐
//!   │ 0 │ Some(B)  │            │ 0 │ 2    │   occupied: 1 ─► 0 ─► 2 ─► NIL
//!   │ 1 │ Some(A)  │            │ 1 │ 0    │
//!   │ 2 │ Some(C)  │            │ 2 │ NIL  │
//!   │ 3 │ None     │            │ 3 │ 4    │   free: 3 ─► 4 ─► capacity
//!   │ 4 │ None     │            │ 4 │ 5    │         (virtual tail = 5)
//!   └───┴──────────┘            └───┴──────┘
//! ```
//!
//! ## Free-chain invariant
//!
//! The free chain's terminal link value always equals the current capacity
//! ("one past the last slot"). Growth therefore never rewrites existing free
//! links: it appends slots linked `old_cap -> old_cap+1 -> ... -> new_cap`
//! and points the free head at `old_cap`. Growth only runs when the free
//! chain is exhausted (`free_head == capacity`), so the old terminal value
//! aliases directly into the new tail segment.
//!
//! ## Performance
//! - `acquire` / `release`: O(1) amortized / O(1)
//! - `next` / `set_next` / `value`: O(1)
//!
//! `debug_validate_invariants()` is available in debug/test builds.

/// Chain terminator for occupied links. Never a valid slot id: the arena
/// would exhaust memory long before `usize::MAX` slots exist.
const NIL: usize = usize::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena of value slots with caller-spliceable links and internal slot reuse.
#[derive(Debug)]
pub struct LinkArena<T> {
    values: Vec<Option<T>>,
    links: Vec<usize>,
    free_head: usize,
    len: usize,
}

impl<T> LinkArena<T> {
    /// Creates an arena with `capacity` slots, all pre-linked into an
    /// ascending free chain (`i -> i+1`, virtual tail = `capacity`).
    pub fn with_capacity(capacity: usize) -> Self {
        let mut values = Vec::with_capacity(capacity);
        values.resize_with(capacity, || None);
        Self {
            values,
            links: (1..=capacity).collect(),
            free_head: 0,
            len: 0,
        }
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of slots (occupied + free).
    pub fn capacity(&self) -> usize {
        self.links.len()
    }

    /// Stores `value` in a slot popped from the free chain, growing the
    /// backing arrays first if the free chain is exhausted. The new slot's
    /// link starts as a chain terminator.
    pub fn acquire(&mut self, value: T) -> SlotId {
        if self.free_head == self.links.len() {
            self.grow();
        }
        let idx = self.free_head;
        self.free_head = self.links[idx];
        self.values[idx] = Some(value);
        self.links[idx] = NIL;
        self.len += 1;
        SlotId(idx)
    }

    /// Clears the slot and pushes it onto the free-chain head for reuse.
    /// Returns the stored value, or `None` if the slot was already free.
    pub fn release(&mut self, id: SlotId) -> Option<T> {
        let value = self.values.get_mut(id.0)?.take()?;
        self.links[id.0] = self.free_head;
        self.free_head = id.0;
        self.len -= 1;
        Some(value)
    }

    /// Returns the value stored in an occupied slot.
    pub fn value(&self, id: SlotId) -> Option<&T> {
        self.values.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Returns a mutable reference to the value stored in an occupied slot.
    pub fn value_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.values.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    /// Returns the successor of `id` in the caller's chain, or `None` at the
    /// chain terminator.
    pub fn next(&self, id: SlotId) -> Option<SlotId> {
        match self.links[id.0] {
            NIL => None,
            next => Some(SlotId(next)),
        }
    }

    /// Points `id`'s link at `next` (`None` writes the chain terminator).
    pub fn set_next(&mut self, id: SlotId, next: Option<SlotId>) {
        self.links[id.0] = next.map_or(NIL, |n| n.0);
    }

    /// Doubles capacity (or adds the first slot for a zero-capacity arena)
    /// by appending an ascending free segment. Only legal when the free
    /// chain is exhausted, which is the only moment the old virtual tail
    /// already equals the start of the new segment.
    fn grow(&mut self) {
        debug_assert_eq!(self.free_head, self.links.len());
        let old_cap = self.links.len();
        let new_cap = old_cap + old_cap.max(1);
        self.links.extend(old_cap + 1..=new_cap);
        self.values.resize_with(new_cap, || None);
        self.free_head = old_cap;
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert_eq!(self.values.len(), self.links.len());
        let capacity = self.links.len();

        // Walking the free chain must visit capacity - len cleared slots and
        // terminate at the virtual tail, whose value is exactly `capacity`.
        let mut free = 0usize;
        let mut cursor = self.free_head;
        while cursor != capacity {
            assert!(cursor < capacity, "free link escapes the arena");
            assert!(self.values[cursor].is_none(), "free slot retains a value");
            free += 1;
            assert!(free <= capacity, "free chain cycles");
            cursor = self.links[cursor];
        }
        assert_eq!(free + self.len, capacity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_arena_hands_out_ascending_slots() {
        let mut arena = LinkArena::with_capacity(3);
        assert_eq!(arena.capacity(), 3);
        assert!(arena.is_empty());

        let a = arena.acquire("a");
        let b = arena.acquire("b");
        let c = arena.acquire("c");
        assert_eq!((a.index(), b.index(), c.index()), (0, 1, 2));
        assert_eq!(arena.len(), 3);
        arena.debug_validate_invariants();
    }

    #[test]
    fn release_recycles_most_recently_freed_slot() {
        let mut arena = LinkArena::with_capacity(4);
        let a = arena.acquire(1);
        let b = arena.acquire(2);

        assert_eq!(arena.release(a), Some(1));
        assert_eq!(arena.value(a), None);
        assert_eq!(arena.len(), 1);

        let c = arena.acquire(3);
        assert_eq!(c.index(), a.index());
        assert_eq!(arena.value(c), Some(&3));
        assert_eq!(arena.value(b), Some(&2));
        arena.debug_validate_invariants();
    }

    #[test]
    fn release_clears_slot_zero() {
        let mut arena = LinkArena::with_capacity(2);
        let a = arena.acquire(String::from("zero"));
        assert_eq!(a.index(), 0);
        assert_eq!(arena.release(a), Some(String::from("zero")));
        assert_eq!(arena.value(a), None);
        arena.debug_validate_invariants();
    }

    #[test]
    fn value_mut_updates_in_place() {
        let mut arena = LinkArena::with_capacity(1);
        let a = arena.acquire(10);
        if let Some(value) = arena.value_mut(a) {
            *value = 20;
        }
        assert_eq!(arena.value(a), Some(&20));
    }

    #[test]
    fn release_of_free_slot_is_rejected() {
        let mut arena = LinkArena::with_capacity(2);
        let a = arena.acquire(7);
        assert_eq!(arena.release(a), Some(7));
        assert_eq!(arena.release(a), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn growth_doubles_and_preserves_occupied_slots() {
        let mut arena = LinkArena::with_capacity(2);
        let a = arena.acquire("a");
        let b = arena.acquire("b");
        assert_eq!(arena.capacity(), 2);

        let c = arena.acquire("c");
        assert_eq!(arena.capacity(), 4);
        assert_eq!(c.index(), 2);
        assert_eq!(arena.value(a), Some(&"a"));
        assert_eq!(arena.value(b), Some(&"b"));
        assert_eq!(arena.value(c), Some(&"c"));
        arena.debug_validate_invariants();
    }

    #[test]
    fn growth_from_zero_capacity() {
        let mut arena = LinkArena::with_capacity(0);
        assert_eq!(arena.capacity(), 0);
        let a = arena.acquire(42);
        assert_eq!(a.index(), 0);
        assert_eq!(arena.capacity(), 1);
        let b = arena.acquire(43);
        assert_eq!(b.index(), 1);
        assert_eq!(arena.capacity(), 2);
        arena.debug_validate_invariants();
    }

    #[test]
    fn caller_chain_links_survive_growth() {
        let mut arena = LinkArena::with_capacity(2);
        let a = arena.acquire(10);
        let b = arena.acquire(20);
        arena.set_next(a, Some(b));

        // Exhausts the free chain and reallocates both arrays.
        let c = arena.acquire(30);
        arena.set_next(b, Some(c));

        assert_eq!(arena.next(a), Some(b));
        assert_eq!(arena.next(b), Some(c));
        assert_eq!(arena.next(c), None);
        arena.debug_validate_invariants();
    }

    #[test]
    fn set_next_none_writes_terminator() {
        let mut arena = LinkArena::with_capacity(2);
        let a = arena.acquire(1);
        let b = arena.acquire(2);
        arena.set_next(a, Some(b));
        arena.set_next(a, None);
        assert_eq!(arena.next(a), None);
    }

    #[test]
    fn free_chain_tail_tracks_capacity_across_growth_cycles() {
        let mut arena = LinkArena::with_capacity(1);
        let mut held = Vec::new();
        for i in 0..40 {
            held.push(arena.acquire(i));
            arena.debug_validate_invariants();
        }
        assert_eq!(arena.capacity(), 64);
        for id in held.drain(10..20) {
            arena.release(id);
            arena.debug_validate_invariants();
        }
        assert_eq!(arena.len(), 30);
    }
}
