//! Clue removal under a uniqueness constraint.

use seedoku_core::{CellIndex, Grid};
use seedoku_solver::BacktrackSolver;

use crate::Mulberry32;

/// How many uniqueness-breaking removals are tolerated before carving
/// stops.
const RETRY_BUDGET: u32 = 3;

/// Removes clues from the complete `grid` until `target` remain, keeping
/// the solution unique. Returns the final clue count.
///
/// Cells are visited in an order shuffled by `rng`, each at most once.
/// A removal that lets a second solution in is rolled back and charged
/// against the retry budget; carving stops when the budget runs out, so
/// the final count can exceed `target`.
pub(crate) fn carve(
    grid: &mut Grid,
    rng: &mut Mulberry32,
    solver: &mut BacktrackSolver,
    target: usize,
) -> usize {
    let mut order = CellIndex::ALL;
    rng.shuffle(&mut order);

    let mut clue_count = grid.filled_count();
    let mut rounds = RETRY_BUDGET;
    for &cell in order.iter().rev() {
        if clue_count <= target || rounds == 0 {
            break;
        }
        let Some(digit) = grid.take(cell) else {
            continue;
        };
        if solver.is_uniquely_solvable(grid) {
            clue_count -= 1;
            log::trace!("removed {digit} from {cell}, {clue_count} clues remain");
        } else {
            grid.set(cell, digit);
            rounds -= 1;
            log::trace!("kept {digit} at {cell}, removal breaks uniqueness ({rounds} retries left)");
        }
    }
    if clue_count > target {
        log::debug!("carve stopped at {clue_count} clues before reaching target {target}");
    }
    clue_count
}
