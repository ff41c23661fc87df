pub use crate::ds::{ArrayLinkedList, LinkArena, SlotId};
pub use crate::error::{ConfigError, ListError};
pub use crate::traits::Keyed;

#[cfg(feature = "concurrency")]
pub use crate::ds::ConcurrentArrayLinkedList;
