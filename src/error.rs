//! Error types for the listkit library.
//!
//! ## Key Components
//!
//! - [`ListError`]: Returned by list operations whose preconditions the
//!   caller violated (bad index, absent key, empty list). Every variant is
//!   recoverable; nothing is retried internally.
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (zero initial capacity).
//!
//! ## Example Usage
//!
//! ```
//! use listkit::ds::ArrayLinkedList;
//! use listkit::error::ListError;
//!
//! let mut list: ArrayLinkedList<(u32, &str)> = ArrayLinkedList::new(4);
//! assert_eq!(list.get_at(0), Err(ListError::OutOfRange { index: 0, len: 0 }));
//!
//! list.insert_last((1, "one")).unwrap();
//! assert_eq!(list.remove(&9), Err(ListError::KeyNotFound));
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ListError
// ---------------------------------------------------------------------------

/// Error returned when a list operation's precondition is violated.
///
/// All variants are caller-correctable; the structure has no transient or
/// fatal failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// The index lies outside the operation's valid bound: `[0, len)` for
    /// `get_at`/`remove_at`, `[0, len]` for `insert`.
    OutOfRange {
        /// The offending index.
        index: usize,
        /// The list length at the time of the call.
        len: usize,
    },
    /// No live element's key matched the one supplied to `get`, `remove`,
    /// `insert_before`, or `insert_after`.
    KeyNotFound,
    /// A removal was attempted on an empty list.
    Empty,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::KeyNotFound => f.write_str("no element with the provided key"),
            Self::Empty => f.write_str("list is empty"),
        }
    }
}

impl std::error::Error for ListError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when construction parameters are invalid.
///
/// Produced by [`ArrayLinkedList::try_new`](crate::ds::ArrayLinkedList::try_new)
/// when the initial capacity is zero. Carries a human-readable description of
/// which parameter failed validation.
///
/// # Example
///
/// ```
/// use listkit::ds::ArrayLinkedList;
///
/// let err = ArrayLinkedList::<(u64, u64)>::try_new(0).unwrap_err();
/// assert!(err.to_string().contains("capacity"));
/// ```
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
