//! Minimum-remaining-candidates collapse selection
//!
//! Invoked only when no propagation work is pending and the grid is
//! unsolved. Collapsing the most constrained cell first keeps the risk of
//! running a candidate set down to empty as low as it gets without
//! backtracking.

use crate::algorithm::candidates::CellState;
use crate::algorithm::propagation::Step;
use crate::spatial::grid::{Grid, Position};

/// One externally drawn pair of non-negative integers
///
/// The selector consumes exactly one pair per invocation: `position` picks
/// among the cells tied at the minimum candidate count, `tile` among the
/// chosen cell's own candidates. Both are reduced modulo the respective
/// count, so any seeded source works.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPair {
    /// Drives the choice among cells tied at the minimum candidate count
    pub position: u64,
    /// Drives the tile choice within the selected cell
    pub tile: u64,
}

/// Pick the next placement, or `None` when there is nothing to place
///
/// Scans the grid row-major for superposed cells (fixed cells are never
/// selected), collects every cell tied at the minimum candidate count, and
/// commits one of them to one of its own candidates. Returns `None` when no
/// superposed cell remains (already solved) or when the chosen cell has been
/// narrowed to the empty set — a contradiction this engine does not repair.
pub fn select_collapse(grid: &Grid<CellState>, pair: RandomPair) -> Option<Step> {
    let mut minimum = usize::MAX;
    let mut tied: Vec<Position> = Vec::new();
    for (pos, cell) in grid.indexed_cells() {
        let Some(count) = cell.candidate_count() else {
            continue;
        };
        if count < minimum {
            minimum = count;
            tied.clear();
        }
        if count == minimum {
            tied.push(pos);
        }
    }

    let pos = tied.get((pair.position as usize).checked_rem(tied.len())?).copied()?;
    let CellState::Superposition(candidates) = grid.get(pos)? else {
        return None;
    };
    if candidates.is_empty() {
        return None;
    }
    let tile = candidates.nth((pair.tile as usize) % candidates.count())?;
    Some(Step::PlaceTile { pos, tile })
}
