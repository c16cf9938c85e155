//! Core data structures for sudoku generation and solving.
//!
//! This crate provides the fundamental types shared by the solver and
//! generator crates: digits, digit sets, cell positions, and the grid
//! itself.
//!
//! # Overview
//!
//! - [`digit`]: Type-safe representation of sudoku digits 1-9
//! - [`digit_set`]: A set of digits backed by a 9-bit mask
//! - [`cell`]: Cell positions with row, column, box, and peer lookups
//! - [`grid`]: The 9x9 grid of optional digits with a flat text format
//!
//! # Examples
//!
//! ```
//! use seedoku_core::{CellIndex, Digit, Grid};
//!
//! let mut grid = Grid::EMPTY;
//! grid.set(CellIndex::from_row_col(4, 4), Digit::D5);
//!
//! // 5 is no longer a candidate in the same column.
//! let above = CellIndex::from_row_col(3, 4);
//! assert!(!grid.candidates(above).contains(Digit::D5));
//! ```

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;

// Re-export commonly used types
pub use self::{
    cell::CellIndex,
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
};
