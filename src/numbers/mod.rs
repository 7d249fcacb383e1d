//! Drills over single numbers and number sequences.

pub mod happy;
pub mod palindrome;
pub mod pascal;
pub mod power;

pub use happy::is_happy;
pub use palindrome::is_palindrome;
pub use pascal::{pascal_row, pascal_triangle, MAX_PASCAL_ROW};
pub use power::my_pow;
