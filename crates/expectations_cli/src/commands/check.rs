use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use tracing::info;

use expectations_parser::parse_file;

use crate::output;

pub fn execute(suite_path: &str, format: &str) -> Result<()> {
    info!("Checking suite definition: {}", suite_path);

    let suite = parse_file(Path::new(suite_path))
        .with_context(|| format!("Failed to parse suite file: {}", suite_path))?;

    let check = suite.validate_definition();

    if format == "json" {
        let output = json!({
            "suite": suite.name,
            "expectations": suite.len(),
            "valid": check.is_ok(),
            "error": check.as_ref().err().map(|e| e.to_string()),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output::print_info(&format!(
            "Suite: {} ({} expectations)",
            suite.name,
            suite.len()
        ));
        for expectation in &suite.expectations {
            let target = match expectation.kind.column() {
                Some(column) => format!("{} [{}]", expectation.kind.name(), column),
                None => expectation.kind.name().to_string(),
            };
            println!("  - {}", target);
        }
        match &check {
            Ok(()) => output::print_success("Suite definition is valid"),
            Err(error) => output::print_error(&format!("Suite definition is invalid: {}", error)),
        }
    }

    if check.is_err() {
        std::process::exit(1);
    }

    Ok(())
}
