//! Error types for expectation suites.
//!
//! Errors in this crate are configuration-class: a suite or expectation that
//! is structurally invalid and can never be evaluated. They are fatal at
//! registration/parse time, in contrast to the recoverable per-expectation
//! evaluation errors surfaced inside validation reports.

use thiserror::Error;

/// Result type for suite operations.
pub type Result<T> = std::result::Result<T, SuiteError>;

/// Main error type for suite definition operations.
#[derive(Error, Debug)]
pub enum SuiteError {
    /// Expectation parameters are structurally invalid
    #[error("Invalid '{kind}' expectation: {message}")]
    InvalidConfig {
        /// Kind tag of the offending expectation
        kind: String,
        /// Description of the problem
        message: String,
    },

    /// Regex pattern cannot be compiled
    #[error("Invalid regex pattern '{pattern}': {error}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler diagnostic
        error: String,
    },

    /// Suite has no usable name
    #[error("Suite must have a non-empty name")]
    MissingName,

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SuiteError {
    /// Creates a new invalid-config error.
    pub fn invalid_config(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            kind: kind.into(),
            message: message.into(),
        }
    }
}
