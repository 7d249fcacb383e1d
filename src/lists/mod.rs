//! Drills over singly linked lists. Nodes are relinked, never rebuilt.

pub mod dedup;
pub mod merge;
pub mod reverse;

pub use dedup::delete_duplicates;
pub use merge::merge_k_lists;
pub use reverse::reverse_between;
