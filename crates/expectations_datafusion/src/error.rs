//! Error types for data source loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading data into a validation table.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Source file does not exist
    #[error("Source file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Query planning or execution failed
    #[error("DataFusion error: {0}")]
    DataFusion(#[from] datafusion::error::DataFusionError),

    /// Arrow data could not be converted to table values
    #[error("Type conversion error: {0}")]
    TypeConversion(String),

    /// Converted columns do not form a well-shaped table
    #[error(transparent)]
    Table(#[from] expectations_validator::TableError),
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
