use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the dqe binary
#[allow(deprecated)]
fn dqe() -> Command {
    Command::cargo_bin("dqe").expect("Failed to find dqe binary")
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_suite() {
    dqe()
        .arg("check")
        .arg(fixture_path("user_suite.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("user_data_quality"))
        .stdout(predicate::str::contains("not-null [email]"))
        .stdout(predicate::str::contains("Suite definition is valid"));
}

#[test]
fn test_check_yaml_suite() {
    dqe()
        .arg("check")
        .arg(fixture_path("clean_suite.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("clean_users"))
        .stdout(predicate::str::contains("matches-regex [email]"));
}

#[test]
fn test_check_invalid_definition() {
    dqe()
        .arg("check")
        .arg(fixture_path("bad_suite.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_check_missing_file() {
    dqe()
        .arg("check")
        .arg("tests/fixtures/nonexistent.json")
        .assert()
        .failure();
}

#[test]
fn test_check_json_output() {
    dqe()
        .arg("check")
        .arg(fixture_path("user_suite.json"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"valid\": true"))
        .stdout(predicate::str::contains("\"expectations\": 5"));
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_failing_data_exits_nonzero() {
    dqe()
        .arg("validate")
        .arg(fixture_path("user_suite.json"))
        .arg("--data")
        .arg(fixture_path("users.csv"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("not-null [email]"))
        .stdout(predicate::str::contains("in-set [status]"));
}

#[test]
fn test_validate_clean_data_passes() {
    dqe()
        .arg("validate")
        .arg(fixture_path("clean_suite.yml"))
        .arg("--data")
        .arg(fixture_path("clean_users.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_validate_json_report() {
    dqe()
        .arg("validate")
        .arg(fixture_path("user_suite.json"))
        .arg("--data")
        .arg(fixture_path("users.csv"))
        .arg("--format")
        .arg("json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("\"unexpected_count\": 1"))
        .stdout(predicate::str::contains("\"owner\": \"data-quality-team\""));
}

#[test]
fn test_validate_missing_data_file() {
    dqe()
        .arg("validate")
        .arg(fixture_path("user_suite.json"))
        .arg("--data")
        .arg("tests/fixtures/nonexistent.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load data file"));
}

#[test]
fn test_validate_rejects_invalid_definition_before_data() {
    dqe()
        .arg("validate")
        .arg(fixture_path("bad_suite.json"))
        .arg("--data")
        .arg(fixture_path("users.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suite definition is invalid"));
}

#[test]
fn test_validate_stores_result() {
    let dir = TempDir::new().unwrap();

    dqe()
        .arg("validate")
        .arg(fixture_path("clean_suite.yml"))
        .arg("--data")
        .arg(fixture_path("clean_users.csv"))
        .arg("--results-dir")
        .arg(dir.path())
        .arg("--checkpoint")
        .arg("nightly")
        .assert()
        .success()
        .stdout(predicate::str::contains("Result stored"));

    let stored: Vec<_> = fs::read_dir(dir.path().join("validations"))
        .unwrap()
        .collect();
    assert_eq!(stored.len(), 1);
}

// ============================================================================
// profile command tests
// ============================================================================

#[test]
fn test_profile_to_stdout() {
    dqe()
        .arg("profile")
        .arg(fixture_path("clean_users.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"clean_users\""))
        .stdout(predicate::str::contains("\"kind\": \"row-count-between\""))
        .stdout(predicate::str::contains("\"kind\": \"column-exists\""));
}

#[test]
fn test_profiled_suite_validates_source_data() {
    let dir = TempDir::new().unwrap();
    let suite_path = dir.path().join("profiled.json");

    dqe()
        .arg("profile")
        .arg(fixture_path("clean_users.csv"))
        .arg("--output")
        .arg(&suite_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Suite written"));

    dqe()
        .arg("validate")
        .arg(&suite_path)
        .arg("--data")
        .arg(fixture_path("clean_users.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn test_profile_custom_name() {
    dqe()
        .arg("profile")
        .arg(fixture_path("clean_users.csv"))
        .arg("--name")
        .arg("baseline")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"baseline\""));
}

// ============================================================================
// docs command tests
// ============================================================================

#[test]
fn test_docs_renders_stored_runs() {
    let dir = TempDir::new().unwrap();

    dqe()
        .arg("validate")
        .arg(fixture_path("clean_suite.yml"))
        .arg("--data")
        .arg(fixture_path("clean_users.csv"))
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success();

    dqe()
        .arg("docs")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Site built"));

    let index = fs::read_to_string(dir.path().join("site").join("index.html")).unwrap();
    assert!(index.contains("clean_users"));
    assert!(index.contains("PASS"));
}

#[test]
fn test_docs_empty_results_dir() {
    let dir = TempDir::new().unwrap();

    dqe()
        .arg("docs")
        .arg("--results-dir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored results"));

    assert!(dir.path().join("site").join("index.html").exists());
}
