//! Parser for expectation suite files (JSON/YAML formats).
//!
//! This module provides functionality to parse expectation suites from JSON
//! and YAML files into the strongly-typed `Suite` structure, and to write
//! them back out. A suite file is an ordered sequence of expectation records
//! plus a name:
//!
//! ```json
//! {
//!   "name": "user_suite",
//!   "expectations": [
//!     { "kind": "not-null", "column": "email" },
//!     { "kind": "between", "column": "age", "min_value": 18, "max_value": 60 }
//!   ]
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use expectations_parser::parse_json;
//!
//! let json = r#"{
//!   "name": "user_suite",
//!   "expectations": [
//!     { "kind": "not-null", "column": "email" }
//!   ]
//! }"#;
//!
//! let suite = parse_json(json).expect("Failed to parse suite");
//! assert_eq!(suite.name, "user_suite");
//! ```

use expectations_core::Suite;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during suite parsing.
///
/// A record with a missing required parameter or an unknown kind is rejected
/// here, before any data is touched: a malformed expectation cannot be
/// evaluated at all.
#[derive(Debug, Error)]
pub enum ParserError {
    /// JSON parsing or deserialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported suite file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// JSON format (.json)
    Json,
    /// YAML format (.yml, .yaml)
    Yaml,
}

/// Parse a suite from a JSON string.
pub fn parse_json(content: &str) -> Result<Suite> {
    let suite: Suite = serde_json::from_str(content)?;
    Ok(suite)
}

/// Parse a suite from a YAML string.
///
/// # Example
///
/// ```rust
/// use expectations_parser::parse_yaml;
///
/// let yaml = r#"
/// name: user_suite
/// expectations:
///   - kind: not-null
///     column: email
///   - kind: row-count-between
///     min_value: 1
///     max_value: 1000
/// "#;
///
/// let suite = parse_yaml(yaml).unwrap();
/// assert_eq!(suite.expectations.len(), 2);
/// ```
pub fn parse_yaml(content: &str) -> Result<Suite> {
    let suite: Suite = serde_yaml_ng::from_str(content)?;
    Ok(suite)
}

/// Detect the suite format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.json` → `SuiteFormat::Json`
/// * `.yaml`, `.yml` → `SuiteFormat::Yaml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not
/// recognized.
pub fn detect_format(path: &Path) -> Result<SuiteFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "json" => Ok(SuiteFormat::Json),
        "yaml" | "yml" => Ok(SuiteFormat::Yaml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a suite from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use expectations_parser::parse_file;
/// use std::path::Path;
///
/// let suite = parse_file(Path::new("suites/user_suite.json")).unwrap();
/// println!("Loaded suite: {}", suite.name);
/// ```
pub fn parse_file(path: &Path) -> Result<Suite> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        SuiteFormat::Json => parse_json(&content),
        SuiteFormat::Yaml => parse_yaml(&content),
    }
}

/// Serialize a suite to a file, choosing the format from the extension.
pub fn write_file(suite: &Suite, path: &Path) -> Result<()> {
    let content = match detect_format(path)? {
        SuiteFormat::Json => serde_json::to_string_pretty(suite)?,
        SuiteFormat::Yaml => serde_yaml_ng::to_string(suite)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use expectations_core::{Expectation, ExpectationKind, SuiteBuilder};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_valid_json_minimal() {
        let json = r#"{ "name": "empty_suite", "expectations": [] }"#;

        let suite = parse_json(json).expect("Failed to parse valid JSON");
        assert_eq!(suite.name, "empty_suite");
        assert!(suite.expectations.is_empty());
        assert!(suite.meta.is_empty());
    }

    #[test]
    fn test_parse_json_with_expectations() {
        let json = r#"{
            "name": "user_suite",
            "expectations": [
                { "kind": "not-null", "column": "email" },
                { "kind": "unique", "column": "id" },
                { "kind": "between", "column": "age", "min_value": 18, "max_value": 60 },
                { "kind": "matches-regex", "column": "email", "pattern": "[^@]+@[^@]+\\.[^@]+" },
                { "kind": "in-set", "column": "status", "values": ["active", "inactive", "pending"] },
                { "kind": "row-count-between", "min_value": 3, "max_value": 1000 },
                { "kind": "column-exists", "column": "email" },
                { "kind": "mean-between", "column": "age", "min_value": 20, "max_value": 50 },
                { "kind": "median-between", "column": "salary", "min_value": 30000, "max_value": 80000 }
            ]
        }"#;

        let suite = parse_json(json).expect("Failed to parse JSON with expectations");
        assert_eq!(suite.expectations.len(), 9);
        assert_eq!(suite.expectations[0].kind.name(), "not-null");
        assert_eq!(suite.expectations[8].kind.name(), "median-between");

        match &suite.expectations[2].kind {
            ExpectationKind::Between {
                column,
                min_value,
                max_value,
            } => {
                assert_eq!(column, "age");
                assert_eq!(*min_value, 18.0);
                assert_eq!(*max_value, 60.0);
            }
            other => panic!("unexpected kind: {:?}", other),
        }
    }

    #[test]
    fn test_parse_json_with_meta() {
        let json = r#"{
            "name": "annotated",
            "expectations": [
                {
                    "kind": "not-null",
                    "column": "age",
                    "meta": {
                        "jira_ticket": "DATA-123",
                        "owner": "data-quality-team",
                        "tags": ["critical", "pii"]
                    }
                }
            ],
            "meta": { "team": "analytics" }
        }"#;

        let suite = parse_json(json).expect("Failed to parse JSON with meta");
        let meta = &suite.expectations[0].meta;
        assert_eq!(meta["jira_ticket"], "DATA-123");
        assert_eq!(meta["tags"][0], "critical");
        assert_eq!(suite.meta["team"], "analytics");
    }

    #[test]
    fn test_parse_yaml_with_expectations() {
        let yaml = r#"
name: user_suite
expectations:
  - kind: not-null
    column: email
  - kind: in-set
    column: status
    values:
      - active
      - inactive
  - kind: row-count-between
    min_value: 1
    max_value: 1000
"#;

        let suite = parse_yaml(yaml).expect("Failed to parse YAML");
        assert_eq!(suite.name, "user_suite");
        assert_eq!(suite.expectations.len(), 3);
        assert_eq!(suite.expectations[1].kind.name(), "in-set");
    }

    #[test]
    fn test_parse_json_missing_parameter() {
        // between without max_value cannot be evaluated, so parsing fails
        let json = r#"{
            "name": "bad",
            "expectations": [
                { "kind": "between", "column": "age", "min_value": 18 }
            ]
        }"#;

        let result = parse_json(json);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::JsonError(_)));
    }

    #[test]
    fn test_parse_json_unknown_kind() {
        let json = r#"{
            "name": "bad",
            "expectations": [ { "kind": "is-sorted", "column": "age" } ]
        }"#;

        assert!(parse_json(json).is_err());
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let invalid_yaml = r#"
name: test
expectations:
  missing required structure
  - broken
"#;

        let result = parse_yaml(invalid_yaml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_detect_format_json() {
        assert_eq!(
            detect_format(Path::new("suite.json")).unwrap(),
            SuiteFormat::Json
        );
    }

    #[test]
    fn test_detect_format_yaml() {
        assert_eq!(
            detect_format(Path::new("suite.yaml")).unwrap(),
            SuiteFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("suite.yml")).unwrap(),
            SuiteFormat::Yaml
        );
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("suite.toml"));
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("suite"));
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_round_trip_json() {
        let original = SuiteBuilder::new("round_trip")
            .not_null("email")
            .between("age", 18.0, 60.0)
            .in_set("status", ["active", "inactive", "pending"])
            .expectation(Expectation::not_null("age").with_meta("tags", serde_json::json!(["pii"])))
            .row_count_between(3, 1000)
            .build();

        let json = serde_json::to_string_pretty(&original).expect("Failed to serialize");
        let parsed = parse_json(&json).expect("Failed to parse");

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_round_trip_yaml() {
        let original = SuiteBuilder::new("round_trip")
            .matches_regex("email", r"[^@]+@[^@]+\.[^@]+")
            .median_between("salary", 30000.0, 80000.0)
            .build();

        let yaml = serde_yaml_ng::to_string(&original).expect("Failed to serialize");
        let parsed = parse_yaml(&yaml).expect("Failed to parse");

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_write_and_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("suite.json");

        let original = SuiteBuilder::new("persisted").not_null("id").build();
        write_file(&original, &path).expect("Failed to write suite");

        let parsed = parse_file(&path).expect("Failed to parse written suite");
        assert_eq!(parsed, original);
    }
}
