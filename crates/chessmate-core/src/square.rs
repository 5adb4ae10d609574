//! Board coordinates as zero-based (row, col) pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A square on the 8x8 board.
///
/// Row 0 is the top edge (rank 8 in algebraic terms) and column 0 is file a,
/// so `Square::new(6, 6)` is g2. The same convention is used for display and
/// internal addressing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Number of rows and of columns.
    pub const SIZE: u8 = 8;

    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square, returning `None` if either coordinate is off-board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if row < Self::SIZE && col < Self::SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Create a square without bounds checking.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are below 8.
    #[inline]
    pub(crate) const fn new_unchecked(row: u8, col: u8) -> Square {
        debug_assert!(row < Self::SIZE && col < Self::SIZE);
        Square { row, col }
    }

    /// Row index, 0 at the top (rank 8).
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index, 0 for file a.
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the square `(d_row, d_col)` away, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..Self::SIZE as i8).contains(&row) && (0..Self::SIZE as i8).contains(&col) {
            Some(Square::new_unchecked(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares row by row, starting at (0, 0).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = Self::SIZE - self.row;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}
