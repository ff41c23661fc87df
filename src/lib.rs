//! listkit: keyed list semantics over arena-backed parallel arrays.
//!
//! An [`ds::ArrayLinkedList`] behaves like a singly linked list (positional
//! insert/remove, key-based lookup, first/last access) but stores every
//! element in two parallel arrays and threads the links through integer
//! indices, so no per-node heap allocation happens. Freed slots are recycled
//! through a free chain woven through the same link array.

pub mod ds;
pub mod error;
pub mod prelude;
pub mod traits;
