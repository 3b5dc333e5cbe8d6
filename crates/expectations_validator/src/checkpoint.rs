//! Named, repeatable validation runs.
//!
//! A checkpoint binds a suite to a name so the same validation can be run
//! repeatedly, with each run producing a timestamped [`CheckpointResult`]
//! suitable for persistence and rendering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use expectations_core::{Suite, ValidationContext, ValidationReport};

use crate::{Table, Validator};

/// A named validation to run against incoming tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint name, used in run identifiers
    pub name: String,

    /// The suite this checkpoint evaluates
    pub suite: Suite,
}

impl Checkpoint {
    /// Creates a checkpoint for a suite.
    pub fn new(name: impl Into<String>, suite: Suite) -> Self {
        Self {
            name: name.into(),
            suite,
        }
    }

    /// Runs the checkpoint against a table, stamping the result with the
    /// current time.
    pub fn run(
        &self,
        validator: &mut Validator,
        table: &Table,
        context: &ValidationContext,
    ) -> CheckpointResult {
        let run_time = Utc::now();
        let report = validator.validate(&self.suite, table, context);

        info!(
            checkpoint = %self.name,
            suite = %self.suite.name,
            success = report.success,
            "checkpoint run complete"
        );

        CheckpointResult {
            checkpoint_name: self.name.clone(),
            suite_name: self.suite.name.clone(),
            run_time,
            success: report.success,
            report,
        }
    }
}

/// Outcome of one checkpoint run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckpointResult {
    /// Name of the checkpoint that ran
    pub checkpoint_name: String,

    /// Name of the evaluated suite
    pub suite_name: String,

    /// When the run started, UTC
    pub run_time: DateTime<Utc>,

    /// Whether every expectation held
    pub success: bool,

    /// The full validation report
    pub report: ValidationReport,
}

impl CheckpointResult {
    /// Filesystem-safe identifier for this run.
    pub fn run_id(&self) -> String {
        format!(
            "{}-{}",
            self.checkpoint_name,
            self.run_time.format("%Y%m%dT%H%M%S%.3fZ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, Value};
    use expectations_core::SuiteBuilder;
    use pretty_assertions::assert_eq;

    fn table() -> Table {
        Table::from_columns(vec![Column::new(
            "age",
            vec![Value::Int(25), Value::Int(30)],
        )])
        .unwrap()
    }

    #[test]
    fn test_checkpoint_run() {
        let suite = SuiteBuilder::new("ages").between("age", 18.0, 60.0).build();
        let checkpoint = Checkpoint::new("nightly", suite);

        let mut validator = Validator::new();
        let result = checkpoint.run(&mut validator, &table(), &ValidationContext::new());

        assert!(result.success);
        assert_eq!(result.checkpoint_name, "nightly");
        assert_eq!(result.suite_name, "ages");
        assert_eq!(result.report.statistics.evaluated_expectations, 1);
    }

    #[test]
    fn test_run_id_shape() {
        let suite = SuiteBuilder::new("ages").build();
        let checkpoint = Checkpoint::new("nightly", suite);

        let mut validator = Validator::new();
        let result = checkpoint.run(&mut validator, &table(), &ValidationContext::new());

        let run_id = result.run_id();
        assert!(run_id.starts_with("nightly-"));
        assert!(run_id.ends_with('Z'));
        assert!(!run_id.contains(':'));
    }

    #[test]
    fn test_result_json_round_trip() {
        let suite = SuiteBuilder::new("ages").not_null("age").build();
        let checkpoint = Checkpoint::new("nightly", suite);

        let mut validator = Validator::new();
        let result = checkpoint.run(&mut validator, &table(), &ValidationContext::new());

        let json = serde_json::to_string_pretty(&result).unwrap();
        let parsed: CheckpointResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}
