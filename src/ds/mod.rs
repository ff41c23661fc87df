pub mod array_linked_list;
pub mod link_arena;

pub use array_linked_list::ArrayLinkedList;
#[cfg(feature = "concurrency")]
pub use array_linked_list::ConcurrentArrayLinkedList;
pub use link_arena::{LinkArena, SlotId};
