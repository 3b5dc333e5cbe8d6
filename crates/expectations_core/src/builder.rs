//! Builder pattern for creating expectation suites.
//!
//! This module provides an ergonomic fluent API for constructing suites
//! without spelling out every enum variant.

use serde_json::Value as JsonValue;

use crate::{Expectation, Meta, Suite};

/// Builder for creating a `Suite`.
///
/// # Example
///
/// ```rust
/// use expectations_core::SuiteBuilder;
///
/// let suite = SuiteBuilder::new("user_data")
///     .not_null("email")
///     .unique("id")
///     .between("age", 18.0, 60.0)
///     .in_set("status", ["active", "inactive", "pending"])
///     .row_count_between(1, 1000)
///     .build();
///
/// assert_eq!(suite.expectations.len(), 5);
/// ```
#[derive(Debug, Default)]
pub struct SuiteBuilder {
    name: String,
    expectations: Vec<Expectation>,
    meta: Meta,
}

impl SuiteBuilder {
    /// Creates a new suite builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Appends a fully-formed expectation (use this to attach metadata).
    pub fn expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Appends multiple expectations.
    pub fn expectations(mut self, expectations: Vec<Expectation>) -> Self {
        self.expectations.extend(expectations);
        self
    }

    /// Adds a suite-level metadata entry.
    pub fn meta(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    /// Column must contain no null values.
    pub fn not_null(self, column: impl Into<String>) -> Self {
        self.expectation(Expectation::not_null(column))
    }

    /// Column must contain no duplicate non-null values.
    pub fn unique(self, column: impl Into<String>) -> Self {
        self.expectation(Expectation::unique(column))
    }

    /// Every non-null value must lie in `[min_value, max_value]`.
    pub fn between(self, column: impl Into<String>, min_value: f64, max_value: f64) -> Self {
        self.expectation(Expectation::between(column, min_value, max_value))
    }

    /// Every non-null string value must match the pattern.
    pub fn matches_regex(self, column: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.expectation(Expectation::matches_regex(column, pattern))
    }

    /// Every non-null value must be a member of the allowed set.
    pub fn in_set<I, S>(self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expectation(Expectation::in_set(column, values))
    }

    /// Table row count must lie in `[min_value, max_value]`.
    pub fn row_count_between(self, min_value: usize, max_value: usize) -> Self {
        self.expectation(Expectation::row_count_between(min_value, max_value))
    }

    /// Table must have a column with this name.
    pub fn column_exists(self, column: impl Into<String>) -> Self {
        self.expectation(Expectation::column_exists(column))
    }

    /// Column mean must lie in `[min_value, max_value]`.
    pub fn mean_between(self, column: impl Into<String>, min_value: f64, max_value: f64) -> Self {
        self.expectation(Expectation::mean_between(column, min_value, max_value))
    }

    /// Column median must lie in `[min_value, max_value]`.
    pub fn median_between(self, column: impl Into<String>, min_value: f64, max_value: f64) -> Self {
        self.expectation(Expectation::median_between(column, min_value, max_value))
    }

    /// Builds the suite.
    pub fn build(self) -> Suite {
        Suite {
            name: self.name,
            expectations: self.expectations,
            meta: self.meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExpectationKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_order() {
        let suite = SuiteBuilder::new("ordered")
            .not_null("email")
            .between("age", 18.0, 60.0)
            .in_set("status", ["active", "inactive"])
            .build();

        assert_eq!(suite.name, "ordered");
        let kinds: Vec<_> = suite.expectations.iter().map(|e| e.kind.name()).collect();
        assert_eq!(kinds, vec!["not-null", "between", "in-set"]);
    }

    #[test]
    fn test_builder_with_meta() {
        let suite = SuiteBuilder::new("annotated")
            .meta("owner", "data-quality-team")
            .expectation(Expectation::not_null("age").with_meta("jira_ticket", "DATA-123"))
            .build();

        assert_eq!(suite.meta["owner"], "data-quality-team");
        assert_eq!(suite.expectations[0].meta["jira_ticket"], "DATA-123");
    }

    #[test]
    fn test_in_set_values() {
        let suite = SuiteBuilder::new("sets")
            .in_set("status", ["a", "b"])
            .build();

        match &suite.expectations[0].kind {
            ExpectationKind::InSet { column, values } => {
                assert_eq!(column, "status");
                assert_eq!(values, &vec!["a".to_string(), "b".to_string()]);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }
}
