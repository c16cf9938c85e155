//! Puzzle generation pipeline.
//!
//! [`PuzzleGenerator`] ties the pieces together: seed an RNG, fill a
//! complete solution, then carve clues away while the solution stays
//! unique. Everything downstream of the seed is deterministic, so a
//! [`GeneratedPuzzle`] can always be reproduced from its `seed` field.

use seedoku_core::Grid;
use seedoku_solver::BacktrackSolver;

use crate::carve::carve;
use crate::fill::fill;
use crate::{Difficulty, Mulberry32};

/// A deterministic sudoku puzzle generator.
///
/// The generator holds nothing but the clue target; all working state
/// lives on the stack of a single [`generate_with_seed`] call, so one
/// generator can serve any number of threads at once.
///
/// [`generate_with_seed`]: PuzzleGenerator::generate_with_seed
///
/// # Examples
///
/// ```
/// use seedoku_generator::{Difficulty, PuzzleGenerator};
///
/// let generator = PuzzleGenerator::with_difficulty(Difficulty::Medium);
/// let puzzle = generator.generate_with_seed(1);
/// assert_eq!(puzzle.clue_count(), 32);
/// assert!(puzzle.solution.is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    clue_target: usize,
}

impl PuzzleGenerator {
    /// Creates a generator with the default [`Difficulty::Medium`] target.
    #[must_use]
    pub fn new() -> Self {
        Self::with_difficulty(Difficulty::default())
    }

    /// Creates a generator aiming for the clue target of `difficulty`.
    #[must_use]
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::with_clue_target(difficulty.clue_target())
    }

    /// Creates a generator aiming to leave `clue_target` clues.
    ///
    /// Targets of 81 or more return the solved grid unchanged. Low targets
    /// are served best effort: carving stops once its retry budget runs
    /// out, so the generated puzzle can hold more clues than requested.
    /// Callers that need a floor should check
    /// [`GeneratedPuzzle::clue_count`].
    #[must_use]
    pub fn with_clue_target(clue_target: usize) -> Self {
        Self { clue_target }
    }

    /// Returns the clue target this generator aims for.
    #[must_use]
    pub fn clue_target(&self) -> usize {
        self.clue_target
    }

    /// Generates a puzzle from a freshly drawn random seed.
    ///
    /// The drawn seed is recorded on the returned puzzle, so the result
    /// can still be reproduced later with [`generate_with_seed`].
    ///
    /// [`generate_with_seed`]: PuzzleGenerator::generate_with_seed
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(rand::random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// The same seed and clue target produce the same puzzle on every
    /// platform.
    #[must_use]
    pub fn generate_with_seed(&self, seed: u32) -> GeneratedPuzzle {
        let mut rng = Mulberry32::new(seed);
        let mut grid = Grid::EMPTY;
        let filled = fill(&mut grid, &mut rng);
        debug_assert!(filled, "an empty grid can always be filled");
        let solution = grid;
        let clue_count = carve(
            &mut grid,
            &mut rng,
            &mut BacktrackSolver::new(),
            self.clue_target,
        );
        log::debug!(
            "seed {seed}: {clue_count} clues (target {})",
            self.clue_target,
        );
        GeneratedPuzzle {
            problem: grid,
            solution,
            seed,
        }
    }
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// A generated puzzle together with its solution and originating seed.
///
/// Every clue of `problem` agrees with `solution`, and `problem` has
/// exactly one completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The puzzle grid, blank where clues were carved away.
    pub problem: Grid,
    /// The complete solution the problem was carved from.
    pub solution: Grid,
    /// The seed that reproduces this puzzle.
    pub seed: u32,
}

impl GeneratedPuzzle {
    /// Returns the number of clues in the problem.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.problem.filled_count()
    }
}
