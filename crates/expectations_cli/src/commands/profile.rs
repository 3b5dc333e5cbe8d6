use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use expectations_datafusion::load_csv;
use expectations_validator::Profiler;

use crate::output;

pub async fn execute(data_path: &str, name: Option<&str>, output_path: Option<&str>) -> Result<()> {
    info!("Profiling data file: {}", data_path);

    let path = Path::new(data_path);
    let table = load_csv(path)
        .await
        .with_context(|| format!("Failed to load data file: {}", data_path))?;

    let suite_name = name
        .map(str::to_string)
        .or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "profiled".to_string());

    let suite = Profiler::new().profile(suite_name, &table);
    output::print_info(&format!(
        "Profiled {} rows into {} expectations",
        table.row_count(),
        suite.len()
    ));

    let json = serde_json::to_string_pretty(&suite)?;
    match output_path {
        Some(out) => {
            std::fs::write(out, json)
                .with_context(|| format!("Failed to write suite file: {}", out))?;
            output::print_success(&format!("Suite written: {}", out));
        }
        None => println!("{}", json),
    }

    Ok(())
}
