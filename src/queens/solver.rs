//! Depth-first placement search over column/diagonal bitmasks.
//!
//! Rows are filled top to bottom. For each row the solver carries three masks, projected
//! onto that row:
//! - `cols`: columns already holding a queen,
//! - `falling`: cells attacked along "\" diagonals (shift towards higher columns per row),
//! - `rising`: cells attacked along "/" diagonals (shift towards lower columns per row).
//!
//! Masks are passed by value, so returning from a branch restores the parent state with no
//! explicit undo. Legal columns are `full & !(cols | falling | rising)`, tried lowest bit
//! first; this fixes the enumeration order.

use serde::{Deserialize, Serialize};

use crate::queens::board::{BoardMask, RowTemplates, MAX_BOARD};
use crate::queens::error::SolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Search budget for the solver.
///
/// `max_solutions` caps how many placements may be materialized; counting ignores it.
pub struct SolveLimits {
    pub max_solutions: usize,
}

impl SolveLimits {
    /// No cap on materialized placements.
    pub const fn unlimited() -> Self {
        Self {
            max_solutions: usize::MAX,
        }
    }
}

impl Default for SolveLimits {
    fn default() -> Self {
        Self {
            max_solutions: 10_000_000,
        }
    }
}

/// One complete placement: `columns[row]` is the queen's column in that row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub columns: Vec<usize>,
}

impl Placement {
    #[inline]
    pub fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Draw the placement as row strings using shared templates.
    ///
    /// `None` if the templates are for a different board width or a column falls off
    /// the board.
    pub fn render(&self, templates: &RowTemplates) -> Option<Vec<String>> {
        if templates.width() != self.size() {
            return None;
        }
        self.columns
            .iter()
            .map(|&c| templates.get(c).map(str::to_owned))
            .collect()
    }
}

/// A configured N-Queens solver for one board size.
#[derive(Debug, Clone)]
pub struct Solver {
    n: usize,
    full: BoardMask,
    templates: RowTemplates,
    limits: SolveLimits,
}

impl Solver {
    pub fn new(n: usize, limits: SolveLimits) -> Result<Self, SolveError> {
        if n == 0 || n > MAX_BOARD {
            return Err(SolveError::InvalidSize { n, max: MAX_BOARD });
        }
        Ok(Self {
            n,
            full: BoardMask::full(n),
            templates: RowTemplates::new(n),
            limits,
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn limits(&self) -> SolveLimits {
        self.limits
    }

    #[inline]
    pub fn templates(&self) -> &RowTemplates {
        &self.templates
    }

    /// All placements in column form, in canonical order.
    pub fn placements(&self) -> Result<Vec<Placement>, SolveError> {
        let mut out = Vec::new();
        self.collect(|columns| Placement::new(columns.to_vec()), &mut out)?;
        Ok(out)
    }

    /// All placements drawn as rows of `Q` and `.`, in canonical order.
    pub fn boards(&self) -> Result<Vec<Vec<String>>, SolveError> {
        let mut out = Vec::new();
        self.collect(
            |columns| {
                columns
                    .iter()
                    .map(|&c| self.templates.row(c).to_owned())
                    .collect()
            },
            &mut out,
        )?;
        Ok(out)
    }

    /// Number of placements, without materializing any of them.
    pub fn count(&self) -> u64 {
        self.count_from(0, BoardMask::EMPTY, BoardMask::EMPTY, BoardMask::EMPTY)
    }

    fn collect<T>(
        &self,
        mut record: impl FnMut(&[usize]) -> T,
        out: &mut Vec<T>,
    ) -> Result<(), SolveError> {
        let limit = self.limits.max_solutions;
        let mut columns = vec![0usize; self.n];
        let mut visit = |columns: &[usize]| {
            if out.len() >= limit {
                return Err(SolveError::LimitExceeded {
                    limit,
                    observed: out.len() + 1,
                });
            }
            out.push(record(columns));
            Ok(())
        };
        self.place(
            0,
            BoardMask::EMPTY,
            BoardMask::EMPTY,
            BoardMask::EMPTY,
            &mut columns,
            &mut visit,
        )
    }

    fn place(
        &self,
        row: usize,
        cols: BoardMask,
        falling: BoardMask,
        rising: BoardMask,
        columns: &mut [usize],
        visit: &mut dyn FnMut(&[usize]) -> Result<(), SolveError>,
    ) -> Result<(), SolveError> {
        if row == self.n {
            return visit(columns);
        }
        let mut avail = self.full.without(cols.union(falling).union(rising));
        while !avail.is_empty() {
            let bit = avail.lowest();
            avail = avail.without(bit);
            // Overwritten by the next sibling, so nothing to undo.
            columns[row] = bit.lowest_index();
            self.place(
                row + 1,
                cols.union(bit),
                falling.union(bit).shift_up(self.full),
                rising.union(bit).shift_down(),
                columns,
                visit,
            )?;
        }
        Ok(())
    }

    fn count_from(&self, row: usize, cols: BoardMask, falling: BoardMask, rising: BoardMask) -> u64 {
        if row == self.n {
            return 1;
        }
        let mut total = 0;
        let mut avail = self.full.without(cols.union(falling).union(rising));
        while !avail.is_empty() {
            let bit = avail.lowest();
            avail = avail.without(bit);
            total += self.count_from(
                row + 1,
                cols.union(bit),
                falling.union(bit).shift_up(self.full),
                rising.union(bit).shift_down(),
            );
        }
        total
    }
}

/// Every way to place `n` non-attacking queens on an `n`×`n` board, as row strings.
///
/// No solution limit applies, so memory grows with the answer: `n = 16` alone holds
/// 14 772 512 boards of 16 strings each. Use a [`Solver`] with [`SolveLimits`] to cap it.
/// Degenerate sizes (`0` or above [`MAX_BOARD`]) give no boards.
pub fn solve_n_queens(n: usize) -> Vec<Vec<String>> {
    let Ok(solver) = Solver::new(n, SolveLimits::unlimited()) else {
        return Vec::new();
    };
    // an unlimited solver never reports LimitExceeded
    solver.boards().unwrap_or_default()
}

/// Number of `n`-queens placements. Degenerate sizes give `0`.
pub fn count_n_queens(n: usize) -> u64 {
    Solver::new(n, SolveLimits::default()).map_or(0, |solver| solver.count())
}
