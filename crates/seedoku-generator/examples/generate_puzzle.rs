//! Example demonstrating seeded sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` from a difficulty preset or clue target
//! - Generate a random puzzle, or reproduce one from its seed
//! - Display the problem, solution, and seed
//! - Generate batches in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Reproduce a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed 42
//! ```
//!
//! Pick a preset or an exact clue target:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty hard
//! cargo run --example generate_puzzle -- --clues 40
//! ```
//!
//! Generate a batch in parallel (consecutive seeds when `--seed` is
//! given):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 10 --difficulty evil
//! ```
//!
//! Watch the carve walk:
//!
//! ```sh
//! RUST_LOG=trace cargo run --example generate_puzzle -- --seed 1
//! ```

use clap::Parser;
use rayon::prelude::*;
use seedoku_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed for the first puzzle; later puzzles use consecutive seeds.
    #[arg(long, value_name = "SEED")]
    seed: Option<u32>,

    /// Difficulty preset selecting the clue target.
    #[arg(long, value_name = "NAME", default_value = "medium")]
    difficulty: Difficulty,

    /// Exact clue target, overriding --difficulty.
    #[arg(long, value_name = "CLUES")]
    clues: Option<usize>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let generator = match args.clues {
        Some(clues) => PuzzleGenerator::with_clue_target(clues),
        None => PuzzleGenerator::with_difficulty(args.difficulty),
    };

    if args.count <= 1 {
        let puzzle = match args.seed {
            Some(seed) => generator.generate_with_seed(seed),
            None => generator.generate(),
        };
        print_puzzle(&puzzle);
        return;
    }

    let puzzles: Vec<GeneratedPuzzle> = match args.seed {
        Some(first) => (0..args.count)
            .into_par_iter()
            .map(|i| generator.generate_with_seed(first.wrapping_add(i)))
            .collect(),
        None => (0..args.count)
            .into_par_iter()
            .map(|_| generator.generate())
            .collect(),
    };

    for (i, puzzle) in puzzles.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_puzzle(puzzle);
    }
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem ({} clues):", puzzle.clue_count());
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
