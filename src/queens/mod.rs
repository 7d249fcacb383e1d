//! N-Queens: place `n` mutually non-attacking queens on an `n`×`n` board.
//!
//! - [`board`]: column bitmasks and the per-column row templates.
//! - [`solver`]: the depth-first bitmask search, its limits and placements.
//! - [`check`]: an independent legality checker for placements and drawn boards.
//! - [`report`]: a serializable summary used by the `n_queens` binary.

pub mod board;
pub mod check;
pub mod error;
pub mod report;
pub mod solver;

pub use board::{BoardMask, RowTemplates, MAX_BOARD};
pub use check::{is_valid_placement, validate_board};
pub use error::SolveError;
pub use report::SolutionReport;
pub use solver::{count_n_queens, solve_n_queens, Placement, SolveLimits, Solver};
