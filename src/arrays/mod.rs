//! Drills over integer slices and grids.

pub mod digits;
pub mod partition;
pub mod product;
pub mod spiral;
pub mod two_sum;

pub use digits::{plus_one, single_number};
pub use partition::move_zeroes;
pub use product::max_product;
pub use spiral::generate_spiral;
pub use two_sum::two_sum;
