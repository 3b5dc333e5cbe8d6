//! Validation report types and evaluation context.
//!
//! A validation run produces one [`ExpectationResult`] per registered
//! expectation, in registration order, bundled into a [`ValidationReport`]
//! with aggregate statistics. Results are never mutated after creation.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::Expectation;

/// Context for validation runs.
///
/// Carries evaluation options that are not part of any individual
/// expectation, such as the cap on sampled violating values.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Maximum number of violating values sampled into
    /// `partial_unexpected_list`
    pub partial_unexpected_limit: usize,

    /// Additional metadata for the run
    pub metadata: std::collections::HashMap<String, String>,
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self {
            partial_unexpected_limit: 20,
            metadata: Default::default(),
        }
    }
}

impl ValidationContext {
    /// Creates a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sample cap for violating values.
    pub fn with_partial_unexpected_limit(mut self, limit: usize) -> Self {
        self.partial_unexpected_limit = limit;
        self
    }

    /// Adds metadata to the context.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Observed statistics for one evaluated expectation.
///
/// Per-value predicates fill the count fields; aggregate and table-level
/// predicates fill `observed_value`; locally-recovered evaluation failures
/// (missing column, type mismatch, invalid regex) fill `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckDetail {
    /// Number of rows considered (excludes nulls for per-value predicates,
    /// except the not-null check which considers every row)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_count: Option<usize>,

    /// Number of considered rows violating the predicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unexpected_count: Option<usize>,

    /// `unexpected_count / element_count × 100`; 0.0 when no rows were
    /// considered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unexpected_percent: Option<f64>,

    /// `unexpected_count / total_row_count × 100`; 0.0 on an empty table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unexpected_percent_total: Option<f64>,

    /// Sample of violating non-null values, capped by the context limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partial_unexpected_list: Option<Vec<JsonValue>>,

    /// Observed aggregate statistic (row count, mean, median)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<f64>,

    /// Evaluation error recovered into a failed result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckDetail {
    /// Builds the per-value count statistics.
    ///
    /// Both percentages default to 0.0 when their denominator is zero.
    pub fn counts(
        element_count: usize,
        unexpected_count: usize,
        total_rows: usize,
        partial_unexpected_list: Vec<JsonValue>,
    ) -> Self {
        let unexpected_percent = if element_count == 0 {
            0.0
        } else {
            unexpected_count as f64 / element_count as f64 * 100.0
        };
        let unexpected_percent_total = if total_rows == 0 {
            0.0
        } else {
            unexpected_count as f64 / total_rows as f64 * 100.0
        };

        Self {
            element_count: Some(element_count),
            unexpected_count: Some(unexpected_count),
            unexpected_percent: Some(unexpected_percent),
            unexpected_percent_total: Some(unexpected_percent_total),
            partial_unexpected_list: Some(partial_unexpected_list),
            observed_value: None,
            error: None,
        }
    }

    /// Builds an aggregate-statistic detail.
    pub fn observed(value: f64) -> Self {
        Self {
            observed_value: Some(value),
            ..Default::default()
        }
    }

    /// Builds an error detail for a locally-recovered failure.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }
}

/// Result of evaluating one expectation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectationResult {
    /// The expectation as registered, metadata included
    pub expectation_config: Expectation,

    /// Whether the expectation held
    pub success: bool,

    /// Observed statistics
    pub result: CheckDetail,
}

/// Aggregate statistics over a validation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStatistics {
    /// Number of expectations evaluated
    pub evaluated_expectations: usize,

    /// Number of successful expectations
    pub successful_expectations: usize,

    /// Number of failed expectations
    pub unsuccessful_expectations: usize,

    /// Percentage of successful expectations; 100.0 for an empty suite
    pub success_percent: f64,
}

/// Report of a validation run.
///
/// `success` is the logical AND over all results; an empty suite is
/// successful by convention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether every expectation held
    pub success: bool,

    /// Per-expectation results, in registration order
    pub results: Vec<ExpectationResult>,

    /// Aggregate statistics
    pub statistics: ReportStatistics,
}

impl ValidationReport {
    /// Assembles a report from per-expectation results.
    pub fn from_results(results: Vec<ExpectationResult>) -> Self {
        let evaluated = results.len();
        let successful = results.iter().filter(|r| r.success).count();
        let success_percent = if evaluated == 0 {
            100.0
        } else {
            successful as f64 / evaluated as f64 * 100.0
        };

        Self {
            success: results.iter().all(|r| r.success),
            results,
            statistics: ReportStatistics {
                evaluated_expectations: evaluated,
                successful_expectations: successful,
                unsuccessful_expectations: evaluated - successful,
                success_percent,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Expectation;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counts_percentages() {
        let detail = CheckDetail::counts(3, 1, 3, vec![]);
        assert_eq!(detail.unexpected_percent, Some(1.0 / 3.0 * 100.0));
        assert_eq!(detail.unexpected_percent_total, Some(1.0 / 3.0 * 100.0));
    }

    #[test]
    fn test_counts_zero_denominators() {
        let detail = CheckDetail::counts(0, 0, 0, vec![]);
        assert_eq!(detail.unexpected_percent, Some(0.0));
        assert_eq!(detail.unexpected_percent_total, Some(0.0));
    }

    #[test]
    fn test_empty_report_is_success() {
        let report = ValidationReport::from_results(vec![]);
        assert!(report.success);
        assert_eq!(report.statistics.success_percent, 100.0);
        assert_eq!(report.statistics.evaluated_expectations, 0);
    }

    #[test]
    fn test_report_aggregation() {
        let pass = ExpectationResult {
            expectation_config: Expectation::not_null("a"),
            success: true,
            result: CheckDetail::counts(2, 0, 2, vec![]),
        };
        let fail = ExpectationResult {
            expectation_config: Expectation::not_null("b"),
            success: false,
            result: CheckDetail::counts(2, 1, 2, vec![]),
        };

        let report = ValidationReport::from_results(vec![pass.clone(), fail.clone()]);
        assert!(!report.success);
        assert_eq!(report.statistics.successful_expectations, 1);
        assert_eq!(report.statistics.unsuccessful_expectations, 1);
        assert_eq!(report.statistics.success_percent, 50.0);
        assert_eq!(report.results, vec![pass, fail]);
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = ValidationReport::from_results(vec![ExpectationResult {
            expectation_config: Expectation::between("age", 18.0, 60.0)
                .with_meta("owner", "data-quality-team"),
            success: true,
            result: CheckDetail::counts(3, 0, 3, vec![]),
        }]);

        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_error_detail_serialization_omits_counts() {
        let detail = CheckDetail::error("column not found");
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["error"], "column not found");
        assert!(json.get("element_count").is_none());
        assert!(json.get("observed_value").is_none());
    }

    #[test]
    fn test_default_context_limit() {
        let ctx = ValidationContext::new();
        assert_eq!(ctx.partial_unexpected_limit, 20);

        let ctx = ctx.with_partial_unexpected_limit(5);
        assert_eq!(ctx.partial_unexpected_limit, 5);
    }
}
