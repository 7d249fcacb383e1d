use std::ops::{Add, Mul};

/// A cell on a square board: `row` counts down from the top, `col` from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// True iff the cell lies on an `n`×`n` board.
    #[inline]
    pub fn on_board(self, n: usize) -> bool {
        let n = n as i64;
        (0..n).contains(&(self.row as i64)) && (0..n).contains(&(self.col as i64))
    }

    /// Row-major index of the cell on an `n`×`n` board.
    #[inline]
    pub fn index(self, n: usize) -> usize {
        debug_assert!(self.on_board(n));
        self.row as usize * n + self.col as usize
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Mul<i32> for Coord {
    type Output = Coord;

    #[inline]
    fn mul(self, rhs: i32) -> Coord {
        Coord {
            row: self.row * rhs,
            col: self.col * rhs,
        }
    }
}

/// Unit directions a queen slides along.
pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];
