use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use expectations_core::ValidationContext;
use expectations_datafusion::load_csv;
use expectations_docs::ValidationStore;
use expectations_parser::parse_file;
use expectations_validator::{Checkpoint, Validator};

use crate::output;

pub async fn execute(
    suite_path: &str,
    data_path: &str,
    format: &str,
    results_dir: Option<&str>,
    checkpoint_name: Option<&str>,
    limit: usize,
) -> Result<()> {
    info!("Validating {} against {}", data_path, suite_path);

    let suite = parse_file(Path::new(suite_path))
        .with_context(|| format!("Failed to parse suite file: {}", suite_path))?;
    suite
        .validate_definition()
        .with_context(|| format!("Suite definition is invalid: {}", suite_path))?;

    output::print_info(&format!(
        "Suite loaded: {} ({} expectations)",
        suite.name,
        suite.len()
    ));

    let table = load_csv(Path::new(data_path))
        .await
        .with_context(|| format!("Failed to load data file: {}", data_path))?;
    output::print_info(&format!(
        "Data loaded: {} rows, {} columns",
        table.row_count(),
        table.columns().len()
    ));

    let context = ValidationContext::new().with_partial_unexpected_limit(limit);
    let mut validator = Validator::new();

    let name = checkpoint_name.unwrap_or(&suite.name).to_string();
    let checkpoint = Checkpoint::new(name, suite);
    let result = checkpoint.run(&mut validator, &table, &context);

    output::print_validation_report(&result.report, format);

    if let Some(dir) = results_dir {
        let store = ValidationStore::new(dir);
        let path = store
            .save(&result)
            .with_context(|| format!("Failed to store result under {}", dir))?;
        output::print_success(&format!("Result stored: {}", path.display()));
    }

    if !result.success {
        std::process::exit(1);
    }

    Ok(())
}
