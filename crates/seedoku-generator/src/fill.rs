//! Backtracking construction of a complete solution grid.

use seedoku_core::{CellIndex, Digit, Grid};

use crate::Mulberry32;

/// Fills every empty cell of `grid` with a valid solution drawn from `rng`.
///
/// Returns `true` on success. Placements made by a successful recursion are
/// kept as-is; only an exhausted cell is cleared before reporting failure
/// upward. A grid without any empty cell reports failure.
pub(crate) fn fill(grid: &mut Grid, rng: &mut Mulberry32) -> bool {
    fill_from(grid, rng, 0)
}

/// Fills the first empty cell at or after `depth`, then recurses.
///
/// The full digit array is shuffled before legality filtering, so each
/// visited cell consumes exactly eight draws from `rng`.
fn fill_from(grid: &mut Grid, rng: &mut Mulberry32, depth: usize) -> bool {
    let probe = CellIndex::ALL[depth..]
        .iter()
        .copied()
        .find(|&cell| grid[cell].is_none());
    let Some(cell) = probe else {
        return false;
    };
    let open = grid.candidates(cell);
    let mut digits = Digit::ALL;
    rng.shuffle(&mut digits);
    for digit in digits {
        if open.contains(digit) {
            grid.set(cell, digit);
            if depth == 80 || fill_from(grid, rng, depth + 1) {
                return true;
            }
        }
    }
    grid.take(cell);
    false
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_fill_golden_seed_42() {
        let mut grid = Grid::EMPTY;
        assert!(fill(&mut grid, &mut Mulberry32::new(42)));
        assert_eq!(
            grid.to_string(),
            "798514623216893745534672918865927431123486597479135286652348179341769852987251364",
        );
    }

    #[test]
    fn test_fill_golden_seed_1() {
        let mut grid = Grid::EMPTY;
        assert!(fill(&mut grid, &mut Mulberry32::new(1)));
        assert_eq!(
            grid.to_string(),
            "395128467426573918871946253938264175754391682612785394147652839269837541583419726",
        );
    }

    #[test]
    fn test_fill_is_deterministic() {
        let mut first = Grid::EMPTY;
        let mut second = Grid::EMPTY;
        assert!(fill(&mut first, &mut Mulberry32::new(7)));
        assert!(fill(&mut second, &mut Mulberry32::new(7)));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fill_reports_failure_when_blocked() {
        // Cell A9 has no candidates: its row holds 1-8 and its column a 9.
        let mut blocked: Grid = format!("123456780000000009{}", "0".repeat(63))
            .parse()
            .expect("valid grid");
        let before = blocked;
        assert!(!fill(&mut blocked, &mut Mulberry32::new(1)));
        assert_eq!(blocked, before);
    }

    #[test]
    fn test_fill_reports_failure_on_complete_grid() {
        let mut solved: Grid =
            "798514623216893745534672918865927431123486597479135286652348179341769852987251364"
                .parse()
                .expect("valid grid");
        let before = solved;
        assert!(!fill(&mut solved, &mut Mulberry32::new(1)));
        assert_eq!(solved, before);
    }

    proptest! {
        #[test]
        fn test_fill_always_completes_an_empty_grid(seed: u32) {
            let mut grid = Grid::EMPTY;
            prop_assert!(fill(&mut grid, &mut Mulberry32::new(seed)));
            prop_assert!(grid.is_solved());
        }
    }
}
