//! Unified error types for the deck exporter.
use thiserror::Error;

/// Main error type for deck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The slide content table could not be parsed
    #[error("Content error: {0}")]
    Content(String),

    /// The deck writer failed to serialize the presentation
    #[error("Export failed: {0}")]
    Export(String),

    /// The artifact could not be persisted under its final name
    #[error("Failed to save {}: {reason}", .path.display())]
    Save {
        path: std::path::PathBuf,
        reason: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, Error>;
