//! Directions, edge sockets, and caller-supplied tile catalogs
//!
//! Tiles stay opaque to the engine; the only thing it ever asks of one is
//! the socket it presents on a given edge. Two tiles may sit adjacent
//! exactly when their facing sockets compare equal.

use crate::io::error::{EngineError, Result};
use crate::spatial::grid::Position;

/// The four axis-aligned neighbour directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards smaller `y`
    Top,
    /// Towards smaller `x`
    Left,
    /// Towards larger `y`
    Bottom,
    /// Towards larger `x`
    Right,
}

impl Direction {
    /// All four directions in the fixed fan-out order
    pub const ALL: [Self; 4] = [Self::Top, Self::Left, Self::Bottom, Self::Right];

    /// The mutually opposite direction (Top↔Bottom, Left↔Right)
    pub const fn invert(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Left => Self::Right,
            Self::Bottom => Self::Top,
            Self::Right => Self::Left,
        }
    }

    /// Direction of `to` as seen from `from`
    ///
    /// Only axis-aligned neighbour pairs are meaningful; other inputs
    /// resolve through the same x-before-y precedence without panicking.
    pub const fn between(from: Position, to: Position) -> Self {
        if to[0] > from[0] {
            Self::Right
        } else if to[1] > from[1] {
            Self::Bottom
        } else if to[1] < from[1] {
            Self::Top
        } else {
            Self::Left
        }
    }

    /// The position one step from `pos` in this direction
    pub const fn offset(self, pos: Position) -> Position {
        let [x, y] = pos;
        match self {
            Self::Top => [x, y - 1],
            Self::Left => [x - 1, y],
            Self::Bottom => [x, y + 1],
            Self::Right => [x + 1, y],
        }
    }
}

/// Edge compatibility seam between tiles
///
/// Tile `b` may sit on tile `a`'s `direction` side exactly when
/// `a.socket(direction) == b.socket(direction.invert())`.
pub trait SocketTile {
    /// Equality-comparable edge descriptor
    type Socket: PartialEq;

    /// The socket this tile presents on one edge
    fn socket(&self, direction: Direction) -> Self::Socket;
}

/// Caller-supplied generation parameters: catalog, dimensions, and seed
///
/// A tile's index in `tiles` is its stable id for the whole run.
#[derive(Debug, Clone)]
pub struct TilesDefinition<T> {
    /// Ordered tile catalog
    pub tiles: Vec<T>,
    /// Fallback for out-of-range catalog lookups and unresolved cells
    pub default_tile: T,
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Seed for the model's own generator in synchronous mode
    pub seed: u64,
}

impl<T> TilesDefinition<T> {
    /// Look up a tile by index, falling back to the default tile
    pub fn tile(&self, index: usize) -> &T {
        self.tiles.get(index).unwrap_or(&self.default_tile)
    }

    /// Reject parameters that cannot hold a generation run
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDefinition`] when a dimension is zero
    /// or the catalog is empty.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDefinition {
                reason: format!(
                    "grid dimensions must be positive, got {}x{}",
                    self.width, self.height
                ),
            });
        }
        if self.tiles.is_empty() {
            return Err(EngineError::InvalidDefinition {
                reason: "tile catalog is empty".to_string(),
            });
        }
        Ok(())
    }
}
