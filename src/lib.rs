//! A collection of self-contained algorithm drills: sorting, string manipulation,
//! tree/list traversal and backtracking.
//!
//! Each drill is a single function over a fixed input shape with no shared state. The
//! one piece with real structure is the bitmask N-Queens search in [`queens`], which
//! also backs the `n_queens` binary.

pub mod arrays;
pub mod core;
pub mod lists;
pub mod numbers;
pub mod queens;
pub mod strings;
pub mod trees;
