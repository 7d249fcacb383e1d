//! Placement checking that does not share code with the solver.
//!
//! Queens are dropped on an occupancy grid and each one slides along the eight queen
//! directions until it leaves the board; meeting another queen on the way means the
//! placement is illegal.

use crate::core::coord::{Coord, QUEEN_DIRS};
use crate::queens::board::{EMPTY, MARKER};
use crate::queens::error::SolveError;
use crate::queens::solver::Placement;

/// Occupancy bitset over the cells of an `n`×`n` board.
#[derive(Clone, Debug)]
struct Occ {
    n: usize,
    data: Vec<u64>,
}

impl Occ {
    fn new(n: usize) -> Self {
        let words = (n * n).div_ceil(64);
        Self {
            n,
            data: vec![0; words],
        }
    }

    #[inline]
    fn set(&mut self, c: Coord) {
        let i = c.index(self.n);
        self.data[i >> 6] |= 1u64 << (i & 63);
    }

    #[inline]
    fn get(&self, c: Coord) -> bool {
        let i = c.index(self.n);
        (self.data[i >> 6] >> (i & 63)) & 1 == 1
    }
}

/// True iff some other queen lies on one of the lines through `from`.
fn is_attacked(from: Coord, occ: &Occ) -> bool {
    QUEEN_DIRS.iter().any(|&dir| {
        let mut step = 1;
        loop {
            let to = from + dir * step;
            if !to.on_board(occ.n) {
                return false;
            }
            if occ.get(to) {
                return true;
            }
            step += 1;
        }
    })
}

/// True iff `placement` puts exactly one queen per row, all on the board, with no two
/// sharing a column or a diagonal.
pub fn is_valid_placement(placement: &Placement) -> bool {
    let n = placement.size();
    if n == 0 || placement.columns.iter().any(|&c| c >= n) {
        return false;
    }

    let queens: Vec<Coord> = placement
        .columns
        .iter()
        .enumerate()
        .map(|(row, &col)| Coord::new(row as i32, col as i32))
        .collect();

    let mut occ = Occ::new(n);
    for &q in &queens {
        if occ.get(q) {
            return false;
        }
        occ.set(q);
    }
    !queens.iter().any(|&q| is_attacked(q, &occ))
}

/// Parse a drawn board back into a placement and check it.
pub fn validate_board<S: AsRef<str>>(rows: &[S]) -> Result<Placement, SolveError> {
    let n = rows.len();
    if n == 0 {
        return Err(SolveError::InvalidBoard {
            row: 0,
            reason: "empty board".to_string(),
        });
    }

    let mut columns = Vec::with_capacity(n);
    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let width = line.chars().count();
        if width != n {
            return Err(SolveError::InvalidBoard {
                row,
                reason: format!("expected {n} cells, found {width}"),
            });
        }
        let mut found = None;
        for (col, cell) in line.chars().enumerate() {
            match cell {
                MARKER if found.is_some() => {
                    return Err(SolveError::InvalidBoard {
                        row,
                        reason: "more than one queen".to_string(),
                    });
                }
                MARKER => found = Some(col),
                EMPTY => {}
                other => {
                    return Err(SolveError::InvalidBoard {
                        row,
                        reason: format!("unexpected cell {other:?}"),
                    });
                }
            }
        }
        let Some(col) = found else {
            return Err(SolveError::InvalidBoard {
                row,
                reason: "no queen".to_string(),
            });
        };
        columns.push(col);
    }

    let placement = Placement::new(columns);
    if !is_valid_placement(&placement) {
        return Err(SolveError::InvalidBoard {
            row: first_conflict_row(&placement),
            reason: "queens attack each other".to_string(),
        });
    }
    Ok(placement)
}

/// First row whose queen shares a column or diagonal with an earlier row.
fn first_conflict_row(placement: &Placement) -> usize {
    let cols = &placement.columns;
    (1..cols.len())
        .find(|&r| {
            (0..r).any(|p| cols[p] == cols[r] || cols[p].abs_diff(cols[r]) == r - p)
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_row_points_at_the_later_queen() {
        assert_eq!(first_conflict_row(&Placement::new(vec![0, 2, 1])), 2);
        assert_eq!(first_conflict_row(&Placement::new(vec![1, 1])), 1);
    }
}
