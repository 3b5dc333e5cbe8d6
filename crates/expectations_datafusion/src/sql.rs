//! Loading tables from a DataFusion session.
//!
//! These entry points validate data already registered with a
//! [`SessionContext`], either a whole named table or the result of an
//! arbitrary query. Queries make it possible to validate a projection or a
//! filtered slice without materializing it elsewhere first.

use datafusion::prelude::SessionContext;
use tracing::debug;

use expectations_validator::Table;

use crate::convert::batches_to_table;
use crate::error::Result;

/// Loads a registered table by name.
pub async fn load_table(ctx: &SessionContext, table_name: &str) -> Result<Table> {
    let df = ctx.table(table_name).await?;
    let batches = df.collect().await?;

    let table = batches_to_table(&batches)?;
    debug!(table = table_name, rows = table.row_count(), "loaded SQL table");
    Ok(table)
}

/// Loads the result set of a SQL query.
pub async fn load_query(ctx: &SessionContext, sql: &str) -> Result<Table> {
    let df = ctx.sql(sql).await?;
    let batches = df.collect().await?;

    let table = batches_to_table(&batches)?;
    debug!(rows = table.row_count(), "loaded SQL query result");
    Ok(table)
}
