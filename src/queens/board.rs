//! Bit-level board primitives for the placement search.

/// Marker drawn where a queen stands.
pub const MARKER: char = 'Q';
/// Marker drawn on an empty cell.
pub const EMPTY: char = '.';

/// Largest board the solver accepts. Masks are `u64`, but anything past this is far out
/// of reach of exhaustive enumeration anyway.
pub const MAX_BOARD: usize = 32;

/// A set of board columns packed into a `u64`, bit `c` for column `c`.
///
/// The solver keeps three of these per row: occupied columns and the two diagonal
/// directions, projected onto the row being filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoardMask(u64);

impl BoardMask {
    pub const EMPTY: BoardMask = BoardMask(0);

    /// All `n` columns of an `n`-wide board.
    #[inline]
    pub fn full(n: usize) -> Self {
        debug_assert!(n <= MAX_BOARD);
        if n == 0 {
            Self::EMPTY
        } else {
            Self(u64::MAX >> (64 - n))
        }
    }

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn union(self, other: BoardMask) -> Self {
        Self(self.0 | other.0)
    }

    /// Columns of `self` not present in `taken`.
    #[inline]
    pub const fn without(self, taken: BoardMask) -> Self {
        Self(self.0 & !taken.0)
    }

    /// The lowest set column as a single-bit mask (empty if `self` is empty).
    #[inline]
    pub const fn lowest(self) -> Self {
        Self(self.0 & self.0.wrapping_neg())
    }

    /// Index of the lowest set column. Only meaningful on a non-empty mask.
    #[inline]
    pub const fn lowest_index(self) -> usize {
        self.0.trailing_zeros() as usize
    }

    /// Shift every column one step right (towards higher indices), dropping what falls
    /// off an `n`-wide board.
    #[inline]
    pub fn shift_up(self, full: BoardMask) -> Self {
        Self((self.0 << 1) & full.0)
    }

    /// Shift every column one step left (towards lower indices).
    #[inline]
    pub const fn shift_down(self) -> Self {
        Self(self.0 >> 1)
    }

    /// Iterate over the set columns, lowest first.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        let mut rest = self;
        std::iter::from_fn(move || {
            if rest.is_empty() {
                return None;
            }
            let col = rest.lowest_index();
            rest = rest.without(rest.lowest());
            Some(col)
        })
    }
}

/// Precomputed rows, one per column, each with the marker at that column.
///
/// Built once per board size and shared by every solution, so recording a placement
/// clones ready strings instead of drawing rows cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplates {
    rows: Vec<String>,
}

impl RowTemplates {
    pub fn new(n: usize) -> Self {
        let mut cells = vec![EMPTY; n];
        let rows = (0..n)
            .map(|c| {
                cells[c] = MARKER;
                let row: String = cells.iter().collect();
                cells[c] = EMPTY;
                row
            })
            .collect();
        Self { rows }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rows.len()
    }

    /// The row with the marker at `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= self.width()`. Use [`RowTemplates::get`] for unchecked input.
    #[inline]
    pub fn row(&self, col: usize) -> &str {
        &self.rows[col]
    }

    /// The row with the marker at `col`, or `None` past the board edge.
    #[inline]
    pub fn get(&self, col: usize) -> Option<&str> {
        self.rows.get(col).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_mask_has_n_bits() {
        assert_eq!(BoardMask::full(1).bits(), 0b1);
        assert_eq!(BoardMask::full(4).bits(), 0b1111);
        assert_eq!(BoardMask::full(MAX_BOARD).len(), MAX_BOARD);
        assert!(BoardMask::full(0).is_empty());
    }

    #[test]
    fn iter_yields_lowest_first() {
        let m = BoardMask::from_bits(0b1010_0110);
        assert_eq!(m.iter().collect::<Vec<_>>(), vec![1, 2, 5, 7]);
        assert_eq!(m.lowest(), BoardMask::from_bits(0b10));
    }

    #[test]
    fn shift_up_is_clipped_to_the_board() {
        let full = BoardMask::full(4);
        let m = BoardMask::from_bits(0b1001);
        assert_eq!(m.shift_up(full), BoardMask::from_bits(0b0010));
        assert_eq!(m.shift_down(), BoardMask::from_bits(0b0100));
    }

    #[test]
    fn templates_place_marker_once() {
        let t = RowTemplates::new(4);
        assert_eq!(t.width(), 4);
        assert_eq!(t.row(0), "Q...");
        assert_eq!(t.row(2), "..Q.");
        assert_eq!(t.row(3), "...Q");
        assert_eq!(t.get(1), Some(".Q.."));
        assert_eq!(t.get(4), None);
    }
}
