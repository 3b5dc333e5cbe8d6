//! Expectation suite types and structures.
//!
//! This module contains the core types for defining expectation suites: the
//! tagged `ExpectationKind` enum of supported predicates, the `Expectation`
//! wrapper carrying free-form metadata, and the named, ordered `Suite`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::{Result, SuiteError};

/// Free-form key/value annotations attached to suites and expectations.
///
/// Metadata is opaque to evaluation and propagated verbatim into results for
/// downstream filtering (e.g., by tag or ticket reference).
pub type Meta = Map<String, JsonValue>;

/// A named, ordered collection of expectations scoped to one table.
///
/// Registration order does not affect evaluation semantics but is preserved
/// for report ordering. A suite serializes as its name plus the ordered
/// sequence of expectation records.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Expectation, Suite};
///
/// let mut suite = Suite::new("user_data");
/// suite.register(Expectation::not_null("email"));
/// suite.register(Expectation::between("age", 18.0, 60.0));
/// assert_eq!(suite.expectations.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    /// Unique name identifying this suite
    pub name: String,

    /// Ordered expectations; evaluated in registration order
    pub expectations: Vec<Expectation>,

    /// Optional free-form suite-level metadata
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl Suite {
    /// Creates a new empty suite.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expectations: Vec::new(),
            meta: Meta::new(),
        }
    }

    /// Appends an expectation to the suite.
    ///
    /// Registration is pure data construction: no column resolution or data
    /// access happens here. An expectation referencing an unknown column is
    /// accepted and only fails at evaluation time.
    pub fn register(&mut self, expectation: Expectation) {
        self.expectations.push(expectation);
    }

    /// Returns the number of registered expectations.
    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    /// Returns true if no expectations are registered.
    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }

    /// Validates the suite definition itself, without data.
    ///
    /// Catches structurally invalid definitions that could never be
    /// evaluated: empty names, inverted ranges, uncompilable regex patterns,
    /// empty value sets. Useful for checking a suite file before attempting
    /// to validate data against it.
    pub fn validate_definition(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(SuiteError::MissingName);
        }

        for expectation in &self.expectations {
            expectation.kind.validate()?;
        }

        Ok(())
    }
}

/// A single declarative assertion about a table or column.
///
/// Wraps the predicate kind with optional metadata. Expectations are
/// immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    /// The predicate kind and its parameters
    #[serde(flatten)]
    pub kind: ExpectationKind,

    /// Free-form metadata, opaque to evaluation
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

impl Expectation {
    /// Wraps a kind with empty metadata.
    pub fn new(kind: ExpectationKind) -> Self {
        Self {
            kind,
            meta: Meta::new(),
        }
    }

    /// Column must contain no null values.
    pub fn not_null(column: impl Into<String>) -> Self {
        Self::new(ExpectationKind::NotNull {
            column: column.into(),
        })
    }

    /// Column must contain no duplicate non-null values.
    pub fn unique(column: impl Into<String>) -> Self {
        Self::new(ExpectationKind::Unique {
            column: column.into(),
        })
    }

    /// Every non-null value must lie in `[min_value, max_value]`.
    pub fn between(column: impl Into<String>, min_value: f64, max_value: f64) -> Self {
        Self::new(ExpectationKind::Between {
            column: column.into(),
            min_value,
            max_value,
        })
    }

    /// Every non-null string value must match the pattern.
    pub fn matches_regex(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(ExpectationKind::MatchesRegex {
            column: column.into(),
            pattern: pattern.into(),
        })
    }

    /// Every non-null value must be a member of the allowed set.
    pub fn in_set<I, S>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ExpectationKind::InSet {
            column: column.into(),
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    /// Table row count must lie in `[min_value, max_value]`.
    pub fn row_count_between(min_value: usize, max_value: usize) -> Self {
        Self::new(ExpectationKind::RowCountBetween {
            min_value,
            max_value,
        })
    }

    /// Table must have a column with this name.
    pub fn column_exists(column: impl Into<String>) -> Self {
        Self::new(ExpectationKind::ColumnExists {
            column: column.into(),
        })
    }

    /// Column mean must lie in `[min_value, max_value]`.
    pub fn mean_between(column: impl Into<String>, min_value: f64, max_value: f64) -> Self {
        Self::new(ExpectationKind::MeanBetween {
            column: column.into(),
            min_value,
            max_value,
        })
    }

    /// Column median must lie in `[min_value, max_value]`.
    pub fn median_between(column: impl Into<String>, min_value: f64, max_value: f64) -> Self {
        Self::new(ExpectationKind::MedianBetween {
            column: column.into(),
            min_value,
            max_value,
        })
    }

    /// Attaches a metadata entry, returning the expectation.
    pub fn with_meta(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }
}

/// Supported predicate kinds.
///
/// Serialized as a tagged record, e.g.
/// `{ "kind": "between", "column": "age", "min_value": 18, "max_value": 60 }`.
/// A record with a missing required parameter or an unknown kind fails
/// deserialization outright.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ExpectationKind {
    /// Column has no null values
    NotNull {
        /// Target column name
        column: String,
    },

    /// Column has no duplicate non-null values
    Unique {
        /// Target column name
        column: String,
    },

    /// Every non-null value lies in the inclusive range
    Between {
        /// Target column name
        column: String,
        /// Minimum value (inclusive)
        min_value: f64,
        /// Maximum value (inclusive)
        max_value: f64,
    },

    /// Every non-null string value matches the regex pattern
    MatchesRegex {
        /// Target column name
        column: String,
        /// Regular expression pattern
        pattern: String,
    },

    /// Every non-null value is a member of the allowed set
    InSet {
        /// Target column name
        column: String,
        /// Allowed values; non-string values are compared by their canonical
        /// string form
        values: Vec<String>,
    },

    /// Table row count lies in the inclusive range
    RowCountBetween {
        /// Minimum row count (inclusive)
        min_value: usize,
        /// Maximum row count (inclusive)
        max_value: usize,
    },

    /// Table has a column with this name
    ColumnExists {
        /// Expected column name
        column: String,
    },

    /// Column mean lies in the inclusive range
    MeanBetween {
        /// Target column name
        column: String,
        /// Minimum value (inclusive)
        min_value: f64,
        /// Maximum value (inclusive)
        max_value: f64,
    },

    /// Column median lies in the inclusive range
    MedianBetween {
        /// Target column name
        column: String,
        /// Minimum value (inclusive)
        min_value: f64,
        /// Maximum value (inclusive)
        max_value: f64,
    },
}

impl ExpectationKind {
    /// Returns the serialized kind tag, e.g. `"matches-regex"`.
    pub fn name(&self) -> &'static str {
        match self {
            ExpectationKind::NotNull { .. } => "not-null",
            ExpectationKind::Unique { .. } => "unique",
            ExpectationKind::Between { .. } => "between",
            ExpectationKind::MatchesRegex { .. } => "matches-regex",
            ExpectationKind::InSet { .. } => "in-set",
            ExpectationKind::RowCountBetween { .. } => "row-count-between",
            ExpectationKind::ColumnExists { .. } => "column-exists",
            ExpectationKind::MeanBetween { .. } => "mean-between",
            ExpectationKind::MedianBetween { .. } => "median-between",
        }
    }

    /// Returns the target column name, if the kind is column-scoped.
    pub fn column(&self) -> Option<&str> {
        match self {
            ExpectationKind::NotNull { column }
            | ExpectationKind::Unique { column }
            | ExpectationKind::Between { column, .. }
            | ExpectationKind::MatchesRegex { column, .. }
            | ExpectationKind::InSet { column, .. }
            | ExpectationKind::ColumnExists { column }
            | ExpectationKind::MeanBetween { column, .. }
            | ExpectationKind::MedianBetween { column, .. } => Some(column),
            ExpectationKind::RowCountBetween { .. } => None,
        }
    }

    /// Checks that the definition is structurally evaluable.
    pub fn validate(&self) -> Result<()> {
        if let Some(column) = self.column() {
            if column.trim().is_empty() {
                return Err(SuiteError::invalid_config(
                    self.name(),
                    "column name must not be empty",
                ));
            }
        }

        match self {
            ExpectationKind::Between {
                min_value,
                max_value,
                ..
            }
            | ExpectationKind::MeanBetween {
                min_value,
                max_value,
                ..
            }
            | ExpectationKind::MedianBetween {
                min_value,
                max_value,
                ..
            } => {
                if min_value > max_value {
                    return Err(SuiteError::invalid_config(
                        self.name(),
                        format!("min_value {} exceeds max_value {}", min_value, max_value),
                    ));
                }
            }
            ExpectationKind::RowCountBetween {
                min_value,
                max_value,
            } => {
                if min_value > max_value {
                    return Err(SuiteError::invalid_config(
                        self.name(),
                        format!("min_value {} exceeds max_value {}", min_value, max_value),
                    ));
                }
            }
            ExpectationKind::MatchesRegex { pattern, .. } => {
                Regex::new(pattern).map_err(|e| SuiteError::InvalidPattern {
                    pattern: pattern.clone(),
                    error: e.to_string(),
                })?;
            }
            ExpectationKind::InSet { values, .. } => {
                if values.is_empty() {
                    return Err(SuiteError::invalid_config(
                        self.name(),
                        "allowed value set must not be empty",
                    ));
                }
            }
            _ => {}
        }

        Ok(())
    }
}
