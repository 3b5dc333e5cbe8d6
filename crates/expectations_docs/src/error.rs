//! Error types for result persistence and site generation.

use thiserror::Error;

/// Errors raised while storing results or building the docs site.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Filesystem operation failed
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Result serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for docs operations.
pub type Result<T> = std::result::Result<T, DocsError>;
