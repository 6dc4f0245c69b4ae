//! Socket-constrained wave function collapse over 2D tile grids
//!
//! Every cell starts as a superposition of the whole tile catalog and is
//! narrowed by edge-socket compatibility with fixed neighbours until each
//! cell holds exactly one tile. Propagation runs as a FIFO worklist of small
//! steps, so callers can drive generation one step at a time or let `solve`
//! run it to completion with a seeded generator.

#![forbid(unsafe_code)]

/// Core engine: cell states, step propagation, collapse selection, lifecycle
pub mod algorithm;
/// Input/output: command line, demo catalog, image export, error handling
pub mod io;
/// Spatial primitives: the dense grid, directions, sockets, tile catalogs
pub mod spatial;

pub use io::error::{EngineError, Result};
