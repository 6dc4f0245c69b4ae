//! Error types for engine and command-line operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all engine and I/O operations
#[derive(Debug)]
pub enum EngineError {
    /// Tiles definition cannot produce a generation run
    InvalidDefinition {
        /// Description of the rejected parameter
        reason: String,
    },

    /// A randomness reply did not match the outstanding request
    ///
    /// Raised when a reply arrives with no request pending, or carries the
    /// token of a request already answered or cancelled by a manual
    /// placement.
    StaleRandomRequest {
        /// Token carried by the rejected reply
        token: u64,
    },

    /// Failed to save a rendered grid to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDefinition { reason } => {
                write!(f, "Invalid tiles definition: {reason}")
            }
            Self::StaleRandomRequest { token } => {
                write!(f, "Random reply with token {token} matches no outstanding request")
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export image to '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, EngineError>;
