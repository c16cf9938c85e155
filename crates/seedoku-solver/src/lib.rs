//! Solution counting for sudoku grids.
//!
//! The generator only ever needs to know whether a puzzle keeps a unique
//! solution, so this crate exposes a single backtracking solver that counts
//! solutions up to two. See [`BacktrackSolver`].

pub use self::backtrack::{BacktrackSolver, SolutionCount};

pub mod backtrack;
