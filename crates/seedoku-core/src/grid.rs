//! The 9x9 digit grid.
//!
//! [`Grid`] stores 81 optional digits in row-major order. It offers cell
//! access by [`CellIndex`], candidate computation against the peers of a
//! cell, and a flat 81-character text format via [`Display`](fmt::Display)
//! and [`FromStr`].
//!
//! # Examples
//!
//! ```
//! use seedoku_core::{CellIndex, Digit, Grid};
//!
//! let mut grid = Grid::EMPTY;
//! grid.set(CellIndex::new(0), Digit::D5);
//! assert_eq!(grid.filled_count(), 1);
//! assert!(!grid.candidates(CellIndex::new(1)).contains(Digit::D5));
//! assert_eq!(grid.to_string(), format!("5{}", "0".repeat(80)));
//! ```

use core::fmt;
use core::ops::Index;
use core::str::FromStr;

use crate::{CellIndex, Digit, DigitSet};

/// A 9x9 grid of optional digits, stored in row-major order.
///
/// The text format is 81 characters in row-major order, `'1'..='9'` for
/// filled cells and `'0'` for blanks. The alternate form (`{:#}`) breaks the
/// same characters into nine lines. [`FromStr`] additionally accepts `'.'`,
/// `'-'`, and `'_'` as blanks and skips whitespace, so both forms parse back
/// to the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Grid {
    /// The grid with every cell blank.
    pub const EMPTY: Self = Self { cells: [None; 81] };

    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Returns the digit at `cell`, or [`None`] if the cell is blank.
    #[must_use]
    pub const fn get(&self, cell: CellIndex) -> Option<Digit> {
        self.cells[cell.index()]
    }

    /// Places `digit` at `cell`, overwriting any previous digit.
    pub fn set(&mut self, cell: CellIndex, digit: Digit) {
        self.cells[cell.index()] = Some(digit);
    }

    /// Blanks `cell` and returns the digit it held.
    pub fn take(&mut self, cell: CellIndex) -> Option<Digit> {
        self.cells[cell.index()].take()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Returns the first blank cell in row-major order, or [`None`] if the
    /// grid is completely filled.
    #[must_use]
    pub fn first_empty(&self) -> Option<CellIndex> {
        CellIndex::ALL.into_iter().find(|&cell| self[cell].is_none())
    }

    /// Returns the digits that can be placed at `cell` without clashing
    /// with a filled peer.
    ///
    /// The digit currently at `cell` itself, if any, is not considered.
    ///
    /// # Examples
    ///
    /// ```
    /// use seedoku_core::{CellIndex, Digit, DigitSet, Grid};
    ///
    /// let mut grid = Grid::EMPTY;
    /// assert_eq!(grid.candidates(CellIndex::new(0)), DigitSet::FULL);
    ///
    /// grid.set(CellIndex::new(1), Digit::D4);
    /// assert!(!grid.candidates(CellIndex::new(0)).contains(Digit::D4));
    /// ```
    #[must_use]
    pub fn candidates(&self, cell: CellIndex) -> DigitSet {
        let mut candidates = DigitSet::FULL;
        for &peer in cell.peers() {
            if let Some(digit) = self[peer] {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Returns `true` if every cell is filled and no two peers hold the
    /// same digit.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        CellIndex::ALL.into_iter().all(|cell| {
            let Some(digit) = self[cell] else {
                return false;
            };
            cell.peers().iter().all(|&peer| self[peer] != Some(digit))
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Index<CellIndex> for Grid {
    type Output = Option<Digit>;

    fn index(&self, cell: CellIndex) -> &Self::Output {
        &self.cells[cell.index()]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if f.alternate() && i > 0 && i % 9 == 0 {
                f.write_str("\n")?;
            }
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => f.write_str("0")?,
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`Grid`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// The string does not contain exactly 81 cell characters.
    #[display("expected 81 cells, found {len}")]
    InvalidLength {
        /// The number of cell characters found.
        len: usize,
    },
    /// A non-whitespace character that is neither a digit nor a blank
    /// marker.
    #[display("invalid character {ch:?} at cell {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// The 0-based position in the cell sequence.
        index: usize,
    },
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut len = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let digit = match ch {
                '0' | '.' | '-' | '_' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch as u8 - b'0';
                    Some(Digit::from_value(value))
                }
                _ => return Err(ParseGridError::InvalidCharacter { ch, index: len }),
            };
            if len < 81 {
                cells[len] = digit;
            }
            len += 1;
        }
        if len != 81 {
            return Err(ParseGridError::InvalidLength { len });
        }
        Ok(Self { cells })
    }
}
