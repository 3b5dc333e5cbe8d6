//! Suite generation from observed data.
//!
//! The profiler scans a table and emits a suite describing what it saw:
//! the row count, null-freedom, uniqueness, observed numeric ranges, and
//! small categorical domains. The generated suite always passes against the
//! table it was profiled from; its value is catching drift in future data.

use std::collections::BTreeSet;

use tracing::debug;

use expectations_core::{Expectation, Suite};

use crate::table::{Column, Table, Value};

/// Rule-based suite generator.
#[derive(Debug, Clone)]
pub struct Profiler {
    /// Maximum distinct values for a column to be treated as categorical
    pub max_set_cardinality: usize,
}

impl Default for Profiler {
    fn default() -> Self {
        Self {
            max_set_cardinality: 10,
        }
    }
}

impl Profiler {
    /// Creates a profiler with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a suite describing the table.
    ///
    /// Emits, in order: an exact `row-count-between`, then per column a
    /// `column-exists`, plus `not-null`, `unique`, `between`, or `in-set`
    /// where the observed data supports them.
    pub fn profile(&self, suite_name: impl Into<String>, table: &Table) -> Suite {
        let mut suite = Suite::new(suite_name);

        let rows = table.row_count();
        suite.register(Expectation::row_count_between(rows, rows));

        for column in table.columns() {
            suite.register(Expectation::column_exists(&column.name));
            for expectation in self.profile_column(column) {
                suite.register(expectation);
            }
        }

        debug!(
            suite = %suite.name,
            expectations = suite.len(),
            "profiled table into suite"
        );
        suite
    }

    fn profile_column(&self, column: &Column) -> Vec<Expectation> {
        let mut expectations = Vec::new();

        let non_null: Vec<&Value> = column.values.iter().filter(|v| !v.is_null()).collect();
        if non_null.is_empty() {
            return expectations;
        }

        if non_null.len() == column.values.len() {
            expectations.push(Expectation::not_null(&column.name));
        }

        // BTreeSet keeps the emitted in-set domain deterministic
        let distinct: BTreeSet<String> = non_null
            .iter()
            .filter_map(|v| v.canonical_string())
            .collect();
        if distinct.len() == non_null.len() && distinct.len() >= 2 {
            expectations.push(Expectation::unique(&column.name));
        }

        let numeric: Vec<f64> = non_null.iter().filter_map(|v| v.as_f64()).collect();
        if numeric.len() == non_null.len() {
            let min = numeric.iter().copied().fold(f64::INFINITY, f64::min);
            let max = numeric.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            expectations.push(Expectation::between(&column.name, min, max));
        } else if non_null.iter().all(|v| v.as_str().is_some())
            && distinct.len() <= self.max_set_cardinality
        {
            expectations.push(Expectation::in_set(&column.name, distinct));
        }

        expectations
    }
}
