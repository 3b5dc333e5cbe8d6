//! CSV file loading.

use std::path::Path;

use datafusion::prelude::{CsvReadOptions, SessionContext};
use tracing::debug;

use expectations_validator::Table;

use crate::convert::batches_to_table;
use crate::error::{Result, SourceError};

/// Loads a CSV file with a header row into a validation table.
///
/// Column types are inferred by DataFusion's schema inference; empty cells
/// load as nulls.
pub async fn load_csv(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(SourceError::FileNotFound(path.to_path_buf()));
    }
    let path_str = path
        .to_str()
        .ok_or_else(|| SourceError::TypeConversion("Non-UTF-8 path".to_string()))?;

    let ctx = SessionContext::new();
    let df = ctx.read_csv(path_str, CsvReadOptions::new()).await?;
    let batches = df.collect().await?;

    let table = batches_to_table(&batches)?;
    debug!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.columns().len(),
        "loaded CSV source"
    );
    Ok(table)
}
