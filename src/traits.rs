//! Element trait for keyed storage.
//!
//! [`ArrayLinkedList`](crate::ds::ArrayLinkedList) addresses elements two
//! ways: by position, and by a key the element itself exposes. This module
//! defines the single trait stored elements must implement.
//!
//! ## Contract
//!
//! | Requirement       | Meaning                                          |
//! |-------------------|--------------------------------------------------|
//! | `Key: Eq`         | keys are compared by equality during chain scans |
//! | unique keys       | assumed by the caller, never enforced            |
//! | no hashing        | lookup is a linear scan, not an index            |
//!
//! # Example
//!
//! ```
//! use listkit::traits::Keyed;
//!
//! struct Session {
//!     id: u64,
//!     user: String,
//! }
//!
//! impl Keyed for Session {
//!     type Key = u64;
//!
//!     fn key(&self) -> &u64 {
//!         &self.id
//!     }
//! }
//!
//! // `(K, V)` pairs are keyed on the first component out of the box.
//! let pair = (7u32, "payload");
//! assert_eq!(pair.key(), &7);
//! ```

/// An element that exposes a lookup key.
pub trait Keyed {
    /// Key type used by `get`, `remove`, `insert_before`, and `insert_after`.
    type Key: Eq;

    /// Returns the element's key. Must be stable for as long as the element
    /// is stored in a list.
    fn key(&self) -> &Self::Key;
}

impl<K: Eq, V> Keyed for (K, V) {
    type Key = K;

    fn key(&self) -> &K {
        &self.0
    }
}
