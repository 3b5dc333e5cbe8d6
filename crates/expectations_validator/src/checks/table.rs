//! Table-level structural predicates.

use crate::table::Table;

/// Row count within `[min, max]`, inclusive. Returns the observed count
/// alongside the verdict.
pub fn row_count_between(table: &Table, min: usize, max: usize) -> (bool, usize) {
    let count = table.row_count();
    (count >= min && count <= max, count)
}

/// Table has a column with the given name.
pub fn column_exists(table: &Table, column: &str) -> bool {
    table.has_column(column)
}
