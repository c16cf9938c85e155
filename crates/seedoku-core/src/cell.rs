//! Cell positions on the 9x9 board.
//!
//! A [`CellIndex`] identifies one of the 81 cells in row-major order. It
//! carries conversions to row, column, and box coordinates, and exposes the
//! 20 peers of a cell (the other cells of its row, column, and box) through
//! a precomputed table.
//!
//! # Examples
//!
//! ```
//! use seedoku_core::CellIndex;
//!
//! let cell = CellIndex::from_row_col(4, 4);
//! assert_eq!(cell.index(), 40);
//! assert_eq!(cell.box_index(), 4);
//! assert_eq!(cell.to_string(), "E5");
//! assert_eq!(cell.peers().len(), 20);
//! ```

use core::fmt::{self, Display};

/// A cell position on the board, stored as a row-major index in `0..81`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellIndex {
    index: u8,
}

/// For each cell, the 20 cells sharing its row, column, or box.
///
/// Row peers come first in column order, then column peers in row order,
/// then the four box peers outside the cell's row and column in scan order.
static PEER_TABLE: [[CellIndex; 20]; 81] = {
    let mut table = [[CellIndex::new(0); 20]; 81];
    let mut cell = 0;
    #[expect(clippy::cast_possible_truncation)]
    while cell < 81 {
        let row = cell / 9;
        let col = cell % 9;
        let mut n = 0;
        let mut c = 0;
        while c < 9 {
            if c != col {
                table[cell][n] = CellIndex::new((row * 9 + c) as u8);
                n += 1;
            }
            c += 1;
        }
        let mut r = 0;
        while r < 9 {
            if r != row {
                table[cell][n] = CellIndex::new((r * 9 + col) as u8);
                n += 1;
            }
            r += 1;
        }
        let box_row = row / 3 * 3;
        let box_col = col / 3 * 3;
        let mut r = box_row;
        while r < box_row + 3 {
            let mut c = box_col;
            while c < box_col + 3 {
                if r != row && c != col {
                    table[cell][n] = CellIndex::new((r * 9 + c) as u8);
                    n += 1;
                }
                c += 1;
            }
            r += 1;
        }
        cell += 1;
    }
    table
};

impl CellIndex {
    /// All 81 cells in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self::new(0); 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self::new(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a new [`CellIndex`] from a row-major index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedoku_core::CellIndex;
    ///
    /// let cell = CellIndex::new(40);
    /// assert_eq!(cell.row(), 4);
    /// assert_eq!(cell.col(), 4);
    /// ```
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81);
        Self { index }
    }

    /// Creates a new [`CellIndex`] from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedoku_core::CellIndex;
    ///
    /// let cell = CellIndex::from_row_col(8, 0);
    /// assert_eq!(cell.index(), 72);
    /// ```
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9);
        assert!(col < 9);
        Self {
            index: row * 9 + col,
        }
    }

    /// Returns the row-major index of this cell, in `0..81`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Returns the row of this cell, in `0..9`.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.index / 9
    }

    /// Returns the column of this cell, in `0..9`.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.index % 9
    }

    /// Returns the 3x3 box of this cell, in `0..9` in scan order.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }

    /// Returns the 20 cells sharing a row, column, or box with this cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedoku_core::CellIndex;
    ///
    /// let corner = CellIndex::new(0);
    /// assert!(corner.peers().contains(&CellIndex::new(8)));
    /// assert!(corner.peers().contains(&CellIndex::new(72)));
    /// assert!(corner.peers().contains(&CellIndex::new(20)));
    /// assert!(!corner.peers().contains(&corner));
    /// ```
    #[must_use]
    pub fn peers(self) -> &'static [Self; 20] {
        &PEER_TABLE[self.index()]
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'A' + self.row()), self.col() + 1)
    }
}
