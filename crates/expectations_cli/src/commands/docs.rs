use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use expectations_docs::{SiteBuilder, ValidationStore};

use crate::output;

pub fn execute(results_dir: &str, site_dir: Option<&str>) -> Result<()> {
    info!("Building docs site from {}", results_dir);

    let store = ValidationStore::new(results_dir);
    let results = store
        .list()
        .with_context(|| format!("Failed to read stored results from {}", results_dir))?;

    if results.is_empty() {
        output::print_info("No stored results found; building an empty site");
    } else {
        output::print_info(&format!("Rendering {} stored runs", results.len()));
    }

    let site_path = site_dir
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| Path::new(results_dir).join("site"));

    let index = SiteBuilder::new(site_path)
        .build(&results)
        .context("Failed to build docs site")?;

    output::print_success(&format!("Site built: {}", index.display()));
    Ok(())
}
