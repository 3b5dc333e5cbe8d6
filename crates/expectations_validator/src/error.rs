//! Evaluation error types.
//!
//! Errors raised while evaluating a single expectation. The engine recovers
//! from these locally: the offending expectation is marked failed with the
//! error message in its result, and the run continues with the remaining
//! expectations.

use thiserror::Error;

/// Errors raised while evaluating one expectation against a table.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Referenced column does not exist in the table
    #[error("Column '{0}' not found in table")]
    ColumnNotFound(String),

    /// A value has a type the predicate cannot operate on
    #[error("Column '{column}': expected {expected} value, found {found}")]
    TypeMismatch {
        /// Offending column name
        column: String,
        /// Type class the predicate requires
        expected: &'static str,
        /// Description of the value actually found
        found: String,
    },

    /// Regex pattern failed to compile
    #[error("Invalid regex pattern '{pattern}': {error}")]
    InvalidRegex {
        /// The offending pattern
        pattern: String,
        /// Compiler diagnostic
        error: String,
    },

    /// Aggregate requested over a column with no non-null values
    #[error("Column '{0}' has no non-null values to aggregate")]
    EmptyAggregate(String),
}

/// Result type for individual check evaluation.
pub type CheckResult<T> = std::result::Result<T, CheckError>;
