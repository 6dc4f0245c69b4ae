//! Spatial data structures for the propagation engine
//!
//! This module contains spatial-related functionality including:
//! - The dense generic 2D grid
//! - Directions, edge sockets, and tile catalog definitions

/// Dense 2D container with bounds-checked access
pub mod grid;
/// Directions, the socket adjacency seam, and tile definitions
pub mod tiles;

pub use grid::{Grid, Position};
