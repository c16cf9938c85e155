//! Backtracking solution counting.
//!
//! [`BacktrackSolver`] answers one question about a grid: does it have no
//! solution, exactly one, or more than one? The search never counts past
//! two, so the cost is bounded by the second completion rather than the
//! total number of solutions.
//!
//! # Examples
//!
//! ```
//! use seedoku_core::Grid;
//! use seedoku_solver::{BacktrackSolver, SolutionCount};
//!
//! let puzzle: Grid =
//!     "300008060400000900870006253908000000000090002612085000100050030069030041500009026"
//!         .parse()?;
//!
//! let mut solver = BacktrackSolver::new();
//! assert_eq!(solver.count_solutions(&puzzle), SolutionCount::Unique);
//! # Ok::<(), seedoku_core::ParseGridError>(())
//! ```

use seedoku_core::Grid;

/// The number of solutions of a grid, counted up to two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SolutionCount {
    /// No assignment of the blank cells completes the grid.
    None,
    /// Exactly one assignment completes the grid.
    Unique,
    /// Two or more assignments complete the grid.
    Multiple,
}

/// A backtracking solver that counts the solutions of a grid, stopping as
/// soon as a second one is found.
///
/// The solver owns a scratch grid, so a single instance can be reused
/// across many queries without allocating. This is the shape the generator
/// relies on: the carve phase asks the same solver about dozens of
/// candidate puzzles in a row.
///
/// # Examples
///
/// ```
/// use seedoku_core::Grid;
/// use seedoku_solver::BacktrackSolver;
///
/// let mut solver = BacktrackSolver::new();
/// assert!(solver.count_solutions(&Grid::EMPTY).is_multiple());
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackSolver {
    grid: Grid,
    solutions: u8,
}

impl BacktrackSolver {
    /// Creates a new solver.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            grid: Grid::EMPTY,
            solutions: 0,
        }
    }

    /// Counts the solutions of `grid`, stopping at two.
    ///
    /// The input is copied into the solver's scratch grid and is not
    /// modified. A completely filled grid is reported as
    /// [`SolutionCount::Unique`] if it is a valid solution and
    /// [`SolutionCount::None`] otherwise.
    #[must_use]
    pub fn count_solutions(&mut self, grid: &Grid) -> SolutionCount {
        let filled = grid.filled_count();
        if filled == 81 {
            return if grid.is_solved() {
                SolutionCount::Unique
            } else {
                SolutionCount::None
            };
        }
        self.grid = *grid;
        self.solutions = 0;
        self.search(filled + 1);
        match self.solutions {
            0 => SolutionCount::None,
            1 => SolutionCount::Unique,
            _ => SolutionCount::Multiple,
        }
    }

    /// Returns `true` if `grid` has exactly one solution.
    #[must_use]
    pub fn is_uniquely_solvable(&mut self, grid: &Grid) -> bool {
        self.count_solutions(grid).is_unique()
    }

    /// Tries every candidate digit at the first blank cell and recurses.
    ///
    /// `depth` is the number of filled cells a placement at this level
    /// produces; at `depth == 81` a placement completes the grid and is
    /// counted instead of recursing. Returns `true` once a second solution
    /// exists, which unwinds the whole search immediately. A counted first
    /// solution does not unwind: the search keeps looking for a second one.
    fn search(&mut self, depth: usize) -> bool {
        if self.solutions > 1 {
            return true;
        }
        let Some(cell) = self.grid.first_empty() else {
            return false;
        };
        for digit in self.grid.candidates(cell) {
            self.grid.set(cell, digit);
            if depth == 81 {
                self.solutions += 1;
            } else if self.search(depth + 1) {
                return true;
            }
            if self.solutions > 1 {
                return true;
            }
        }
        self.grid.take(cell);
        false
    }
}

impl Default for BacktrackSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use seedoku_core::{CellIndex, Digit};

    use super::*;

    const UNIQUE_PUZZLE: &str =
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
    const CARVED_PUZZLE: &str =
        "300008060400000900870006253908000000000090002612085000100050030069030041500009026";
    const SOLVED: &str =
        "798514623216893745534672918865927431123486597479135286652348179341769852987251364";

    fn grid(s: &str) -> Grid {
        s.parse().expect("valid grid")
    }

    #[test]
    fn test_unique_puzzle() {
        let mut solver = BacktrackSolver::new();
        assert_eq!(
            solver.count_solutions(&grid(UNIQUE_PUZZLE)),
            SolutionCount::Unique,
        );
        assert!(solver.is_uniquely_solvable(&grid(UNIQUE_PUZZLE)));
    }

    #[test]
    fn test_carved_puzzle_is_unique() {
        let mut solver = BacktrackSolver::new();
        assert_eq!(
            solver.count_solutions(&grid(CARVED_PUZZLE)),
            SolutionCount::Unique,
        );
    }

    #[test]
    fn test_multiple_solutions() {
        let mut solver = BacktrackSolver::new();

        assert_eq!(
            solver.count_solutions(&Grid::EMPTY),
            SolutionCount::Multiple,
        );

        let single_row = grid(&format!("123456789{}", "0".repeat(72)));
        assert_eq!(solver.count_solutions(&single_row), SolutionCount::Multiple);
    }

    #[test]
    fn test_blanked_rectangle_has_two_solutions() {
        // Cells A2, A5, B2, B5 of the solved fixture hold 9/1 and 1/9.
        // Blanking all four leaves exactly two completions (the digits can
        // be swapped), so the count must come back Multiple even though
        // 77 clues remain.
        let mut rectangle = grid(SOLVED);
        for index in [1, 4, 10, 13] {
            rectangle.take(CellIndex::new(index));
        }
        let mut solver = BacktrackSolver::new();
        assert_eq!(
            solver.count_solutions(&rectangle),
            SolutionCount::Multiple,
        );
        assert!(!solver.is_uniquely_solvable(&rectangle));
    }

    #[test]
    fn test_no_solution() {
        // The top-right cell needs a 9, but its column already has one.
        let blocked = grid(&format!("123456780000000009{}", "0".repeat(63)));
        let mut solver = BacktrackSolver::new();
        assert_eq!(solver.count_solutions(&blocked), SolutionCount::None);
        assert!(!solver.is_uniquely_solvable(&blocked));
    }

    #[test]
    fn test_complete_grid() {
        let mut solver = BacktrackSolver::new();

        let solved = grid(SOLVED);
        assert_eq!(solver.count_solutions(&solved), SolutionCount::Unique);

        let mut clashing = solved;
        clashing.set(CellIndex::new(1), Digit::D7);
        assert_eq!(solver.count_solutions(&clashing), SolutionCount::None);
    }

    #[test]
    fn test_one_blank_cell() {
        let mut almost = grid(SOLVED);
        almost.take(CellIndex::new(40));
        let mut solver = BacktrackSolver::new();
        assert_eq!(solver.count_solutions(&almost), SolutionCount::Unique);
    }

    #[test]
    fn test_input_grid_is_not_modified() {
        let puzzle = grid(UNIQUE_PUZZLE);
        let mut solver = BacktrackSolver::new();
        let _ = solver.count_solutions(&puzzle);
        assert_eq!(puzzle, grid(UNIQUE_PUZZLE));
    }

    #[test]
    fn test_solver_reuse() {
        let mut solver = BacktrackSolver::new();
        assert!(solver.count_solutions(&Grid::EMPTY).is_multiple());
        assert!(solver.count_solutions(&grid(UNIQUE_PUZZLE)).is_unique());
        let blocked = grid(&format!("123456780000000009{}", "0".repeat(63)));
        assert!(solver.count_solutions(&blocked).is_none());
        assert!(solver.count_solutions(&Grid::EMPTY).is_multiple());
    }
}
