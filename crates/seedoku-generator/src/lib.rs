//! Deterministic sudoku puzzle generation.
//!
//! Puzzles are generated in two phases keyed by a single 32-bit seed: a
//! randomized backtracking fill constructs a complete solution, then a
//! carve phase removes clues in shuffled order, keeping only removals
//! that leave exactly one solution. Identical seeds yield identical
//! puzzles on every platform, which makes puzzles shareable and bugs
//! reproducible.
//!
//! # Overview
//!
//! - [`rng`]: the seedable [`Mulberry32`] generator and its bit-exact
//!   shuffle
//! - [`difficulty`]: named presets mapping to clue targets
//! - [`puzzle_generator`]: the [`PuzzleGenerator`] pipeline and its
//!   [`GeneratedPuzzle`] output
//!
//! # Examples
//!
//! ```
//! use seedoku_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::with_difficulty(Difficulty::Hard);
//! let puzzle = generator.generate_with_seed(2);
//!
//! // The problem is a carved subset of its unique solution.
//! assert!(puzzle.solution.is_solved());
//! assert!(puzzle.clue_count() >= Difficulty::Hard.clue_target());
//! ```

pub mod difficulty;
pub mod puzzle_generator;
pub mod rng;

mod carve;
mod fill;

// Re-export commonly used types
pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    puzzle_generator::{GeneratedPuzzle, PuzzleGenerator},
    rng::Mulberry32,
};
