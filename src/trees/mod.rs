//! Drills over binary trees.

pub mod balance;
pub mod levels;

pub use balance::is_balanced;
pub use levels::level_order_bottom;
