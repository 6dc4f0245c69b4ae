//! Defaults and display constants for the command line

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default generated grid width in cells
pub const DEFAULT_WIDTH: usize = 32;

/// Default generated grid height in cells
pub const DEFAULT_HEIGHT: usize = 16;

/// Pixel edge length of one tile in exported images
pub const TILE_PIXEL_SIZE: u32 = 8;
