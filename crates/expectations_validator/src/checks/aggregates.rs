//! Aggregate column statistics.
//!
//! Aggregates ignore nulls entirely. A column with no non-null values has
//! no defined statistic, which surfaces as an `EmptyAggregate` error.

use crate::error::{CheckError, CheckResult};
use crate::table::Column;

fn numeric_values(column: &Column) -> CheckResult<Vec<f64>> {
    let mut values = Vec::new();
    for value in &column.values {
        if value.is_null() {
            continue;
        }
        let number = value.as_f64().ok_or_else(|| CheckError::TypeMismatch {
            column: column.name.clone(),
            expected: "numeric",
            found: format!("{:?}", value),
        })?;
        values.push(number);
    }

    if values.is_empty() {
        return Err(CheckError::EmptyAggregate(column.name.clone()));
    }
    Ok(values)
}

/// Arithmetic mean over the non-null values.
pub fn mean(column: &Column) -> CheckResult<f64> {
    let values = numeric_values(column)?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median over the non-null values.
///
/// For an even count, the average of the two middle values.
pub fn median(column: &Column) -> CheckResult<f64> {
    let mut values = numeric_values(column)?;
    values.sort_by(|a, b| a.total_cmp(b));

    let mid = values.len() / 2;
    if values.len() % 2 == 1 {
        Ok(values[mid])
    } else {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    }
}
