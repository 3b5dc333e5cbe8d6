//! Main validation engine.
//!
//! This module provides the [`Validator`] that evaluates every expectation
//! of a suite against a table and assembles the validation report.

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, warn};

use expectations_core::{
    CheckDetail, Expectation, ExpectationKind, ExpectationResult, Suite, ValidationContext,
    ValidationReport,
};

use crate::checks::{ValueOutcome, aggregates, table as table_checks, values};
use crate::error::{CheckError, CheckResult};
use crate::table::{Column, Table};

/// Validation engine for expectation suites.
///
/// Evaluates expectations in registration order. Failures are partial: a
/// failing or erroring expectation never stops the run, it just contributes
/// a failed result. Compiled regex patterns are cached across expectations
/// and across runs.
///
/// # Example
///
/// ```rust
/// use expectations_core::{Suite, Expectation, ValidationContext};
/// use expectations_validator::{Column, Table, Validator};
///
/// let mut suite = Suite::new("user_data");
/// suite.register(Expectation::not_null("email"));
///
/// let table = Table::from_columns(vec![
///     Column::new("email", vec!["a@example.com", "b@example.com"]),
/// ]).unwrap();
///
/// let mut validator = Validator::new();
/// let report = validator.validate(&suite, &table, &ValidationContext::new());
/// assert!(report.success);
/// ```
pub struct Validator {
    regex_cache: HashMap<String, Regex>,
}

impl Validator {
    /// Creates a new validator with an empty pattern cache.
    pub fn new() -> Self {
        Self {
            regex_cache: HashMap::new(),
        }
    }

    /// Evaluates every expectation of the suite against the table.
    ///
    /// This is the main validation entry point. Results come back in
    /// registration order, one per expectation, each carrying the
    /// expectation as registered (metadata included) plus its observed
    /// statistics.
    pub fn validate(
        &mut self,
        suite: &Suite,
        table: &Table,
        context: &ValidationContext,
    ) -> ValidationReport {
        debug!(
            suite = %suite.name,
            expectations = suite.len(),
            rows = table.row_count(),
            "starting validation run"
        );

        let results = suite
            .expectations
            .iter()
            .map(|expectation| self.evaluate(expectation, table, context))
            .collect();

        let report = ValidationReport::from_results(results);
        debug!(
            suite = %suite.name,
            success = report.success,
            success_percent = report.statistics.success_percent,
            "validation run finished"
        );
        report
    }

    /// Evaluates a single expectation, recovering evaluation errors into a
    /// failed result.
    fn evaluate(
        &mut self,
        expectation: &Expectation,
        table: &Table,
        context: &ValidationContext,
    ) -> ExpectationResult {
        let evaluated = self.evaluate_kind(&expectation.kind, table, context);

        let (success, result) = match evaluated {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    kind = expectation.kind.name(),
                    column = expectation.kind.column().unwrap_or("-"),
                    %error,
                    "expectation could not be evaluated"
                );
                (false, CheckDetail::error(error.to_string()))
            }
        };

        ExpectationResult {
            expectation_config: expectation.clone(),
            success,
            result,
        }
    }

    fn evaluate_kind(
        &mut self,
        kind: &ExpectationKind,
        table: &Table,
        context: &ValidationContext,
    ) -> CheckResult<(bool, CheckDetail)> {
        match kind {
            ExpectationKind::NotNull { column } => {
                let outcome = values::not_null(self.lookup(table, column)?);
                Ok(Self::counts_result(outcome, table, context))
            }
            ExpectationKind::Unique { column } => {
                let outcome = values::unique(self.lookup(table, column)?);
                Ok(Self::counts_result(outcome, table, context))
            }
            ExpectationKind::Between {
                column,
                min_value,
                max_value,
            } => {
                let outcome = values::between(self.lookup(table, column)?, *min_value, *max_value)?;
                Ok(Self::counts_result(outcome, table, context))
            }
            ExpectationKind::MatchesRegex { column, pattern } => {
                let regex = self.compile(pattern)?;
                let outcome = values::matches_regex(
                    table
                        .column(column)
                        .ok_or_else(|| CheckError::ColumnNotFound(column.clone()))?,
                    &regex,
                )?;
                Ok(Self::counts_result(outcome, table, context))
            }
            ExpectationKind::InSet {
                column,
                values: allowed,
            } => {
                let outcome = values::in_set(self.lookup(table, column)?, allowed);
                Ok(Self::counts_result(outcome, table, context))
            }
            ExpectationKind::RowCountBetween {
                min_value,
                max_value,
            } => {
                let (success, count) = table_checks::row_count_between(table, *min_value, *max_value);
                Ok((success, CheckDetail::observed(count as f64)))
            }
            ExpectationKind::ColumnExists { column } => {
                let success = table_checks::column_exists(table, column);
                Ok((success, CheckDetail::default()))
            }
            ExpectationKind::MeanBetween {
                column,
                min_value,
                max_value,
            } => {
                let observed = aggregates::mean(self.lookup(table, column)?)?;
                Ok((
                    observed >= *min_value && observed <= *max_value,
                    CheckDetail::observed(observed),
                ))
            }
            ExpectationKind::MedianBetween {
                column,
                min_value,
                max_value,
            } => {
                let observed = aggregates::median(self.lookup(table, column)?)?;
                Ok((
                    observed >= *min_value && observed <= *max_value,
                    CheckDetail::observed(observed),
                ))
            }
        }
    }

    fn lookup<'t>(&self, table: &'t Table, column: &str) -> CheckResult<&'t Column> {
        table
            .column(column)
            .ok_or_else(|| CheckError::ColumnNotFound(column.to_string()))
    }

    /// Compiles a pattern through the cache.
    fn compile(&mut self, pattern: &str) -> CheckResult<Regex> {
        if let Some(regex) = self.regex_cache.get(pattern) {
            return Ok(regex.clone());
        }
        let regex = Regex::new(pattern).map_err(|e| CheckError::InvalidRegex {
            pattern: pattern.to_string(),
            error: e.to_string(),
        })?;
        self.regex_cache.insert(pattern.to_string(), regex.clone());
        Ok(regex)
    }

    /// Turns a per-value outcome into report statistics.
    ///
    /// The violating-value sample excludes nulls and is capped by the
    /// context limit.
    fn counts_result(
        outcome: ValueOutcome,
        table: &Table,
        context: &ValidationContext,
    ) -> (bool, CheckDetail) {
        let partial = outcome
            .unexpected
            .iter()
            .filter(|v| !v.is_null())
            .take(context.partial_unexpected_limit)
            .map(|v| v.to_json())
            .collect();

        let detail = CheckDetail::counts(
            outcome.element_count,
            outcome.unexpected.len(),
            table.row_count(),
            partial,
        );
        (outcome.success(), detail)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
