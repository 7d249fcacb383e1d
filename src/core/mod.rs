//! Small value types shared by the drills.
//!
//! Everything here lives for a single call at most:
//!
//! - [`coord`]: board cells and queen slide directions.
//! - [`list`]: singly linked list nodes with judge-style builders.
//! - [`tree`]: binary tree nodes with a breadth-first builder.

pub mod coord;
pub mod list;
pub mod tree;

pub use list::ListNode;
pub use tree::TreeNode;
