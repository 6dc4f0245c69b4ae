//! Input/output operations and error handling

/// Built-in sand and wall demo catalog
pub mod catalog;
/// Command line parsing and the interactive generation driver
pub mod cli;
/// Defaults and display constants
pub mod configuration;
/// Error types and the crate result alias
pub mod error;
/// PNG export of rendered grids
pub mod image;
/// Terminal progress reporting
pub mod progress;
