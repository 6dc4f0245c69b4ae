//! Step-based constraint propagation across the cell grid
//!
//! Each applied step may fan out follow-up steps; processed strictly FIFO
//! they ripple breadth-first outward from each placement. Restriction only
//! ever removes candidates, so the converged per-cell state is independent
//! of processing order.

use crate::algorithm::candidates::CellState;
use crate::spatial::grid::{Grid, Position};
use crate::spatial::tiles::{Direction, SocketTile, TilesDefinition};

/// One queued unit of propagation work
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Commit a cell to a tile index, legal or not
    PlaceTile {
        /// Target cell
        pos: Position,
        /// Tile index to commit (may fall outside the catalog)
        tile: usize,
    },
    /// Narrow `to`'s candidates against the fixed tile at `from`
    RestrictNeighbor {
        /// Cell whose fixed tile drives the restriction
        from: Position,
        /// Neighbouring cell to narrow
        to: Position,
    },
}

/// Apply one step, returning the follow-up steps it produces
///
/// A placement overwrites the target unconditionally (manual placements are
/// allowed to be illegal) and fans out one restriction per axis-aligned
/// neighbour, including positions outside the grid; those become no-ops when
/// processed. A restriction takes effect only from a fixed origin onto a
/// superposed target and produces no further steps.
pub fn apply_step<T: SocketTile>(
    grid: &mut Grid<CellState>,
    definition: &TilesDefinition<T>,
    step: &Step,
) -> Vec<Step> {
    match *step {
        Step::PlaceTile { pos, tile } => {
            grid.set(pos, CellState::Fixed(tile));
            Direction::ALL
                .iter()
                .map(|direction| Step::RestrictNeighbor {
                    from: pos,
                    to: direction.offset(pos),
                })
                .collect()
        }
        Step::RestrictNeighbor { from, to } => {
            restrict_neighbor(grid, definition, from, to);
            Vec::new()
        }
    }
}

/// Narrow the candidates at `to` against the fixed tile at `from`
///
/// The direction is derived purely from the relative position of the two
/// cells. A candidate survives iff its socket facing the origin matches the
/// origin tile's socket facing the target; the filtered set may come out
/// empty and is written back regardless.
fn restrict_neighbor<T: SocketTile>(
    grid: &mut Grid<CellState>,
    definition: &TilesDefinition<T>,
    from: Position,
    to: Position,
) {
    let Some(&CellState::Fixed(origin_tile)) = grid.get(from) else {
        return;
    };
    let direction = Direction::between(from, to);
    let origin_socket = definition.tile(origin_tile).socket(direction);
    let facing = direction.invert();
    if let Some(CellState::Superposition(candidates)) = grid.get_mut(to) {
        candidates.retain(|index| definition.tile(index).socket(facing) == origin_socket);
    }
}
