//! Conversion from Arrow record batches to validation tables.

use arrow_array::RecordBatch;
use arrow_array::array::ArrayRef;
use tracing::warn;

use expectations_validator::{Column, Table, Value};

use crate::error::{Result, SourceError};

/// Converts a set of record batches sharing a schema into a [`Table`].
///
/// Batches are concatenated in order. An empty batch set produces an empty
/// table.
pub fn batches_to_table(batches: &[RecordBatch]) -> Result<Table> {
    let Some(first) = batches.first() else {
        return Ok(Table::empty());
    };

    let mut columns: Vec<Column> = first
        .schema()
        .fields()
        .iter()
        .map(|field| Column {
            name: field.name().clone(),
            values: Vec::new(),
        })
        .collect();

    for batch in batches {
        for (idx, column) in columns.iter_mut().enumerate() {
            let array = batch.column(idx);
            for row in 0..batch.num_rows() {
                column.values.push(arrow_value(array, row)?);
            }
        }
    }

    Ok(Table::from_columns(columns)?)
}

/// Extracts one cell from an Arrow array as a table value.
///
/// Unsupported Arrow types degrade to null with a warning rather than
/// failing the whole load.
pub fn arrow_value(array: &ArrayRef, row_idx: usize) -> Result<Value> {
    use arrow_array::array::*;

    if array.is_null(row_idx) {
        return Ok(Value::Null);
    }

    match array.data_type() {
        arrow_schema::DataType::Boolean => {
            let array = array
                .as_any()
                .downcast_ref::<BooleanArray>()
                .ok_or_else(|| {
                    SourceError::TypeConversion("Failed to downcast to BooleanArray".to_string())
                })?;
            Ok(Value::Bool(array.value(row_idx)))
        }
        arrow_schema::DataType::Int32 => {
            let array = array.as_any().downcast_ref::<Int32Array>().ok_or_else(|| {
                SourceError::TypeConversion("Failed to downcast to Int32Array".to_string())
            })?;
            Ok(Value::Int(array.value(row_idx) as i64))
        }
        arrow_schema::DataType::Int64 => {
            let array = array.as_any().downcast_ref::<Int64Array>().ok_or_else(|| {
                SourceError::TypeConversion("Failed to downcast to Int64Array".to_string())
            })?;
            Ok(Value::Int(array.value(row_idx)))
        }
        arrow_schema::DataType::Float32 => {
            let array = array
                .as_any()
                .downcast_ref::<Float32Array>()
                .ok_or_else(|| {
                    SourceError::TypeConversion("Failed to downcast to Float32Array".to_string())
                })?;
            Ok(Value::Float(array.value(row_idx) as f64))
        }
        arrow_schema::DataType::Float64 => {
            let array = array
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(|| {
                    SourceError::TypeConversion("Failed to downcast to Float64Array".to_string())
                })?;
            Ok(Value::Float(array.value(row_idx)))
        }
        arrow_schema::DataType::Utf8 => {
            let array = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(|| {
                    SourceError::TypeConversion("Failed to downcast to StringArray".to_string())
                })?;
            Ok(Value::String(array.value(row_idx).to_string()))
        }
        arrow_schema::DataType::LargeUtf8 => {
            let array = array
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .ok_or_else(|| {
                    SourceError::TypeConversion("Failed to downcast to LargeStringArray".to_string())
                })?;
            Ok(Value::String(array.value(row_idx).to_string()))
        }
        arrow_schema::DataType::Utf8View => {
            let array = array
                .as_any()
                .downcast_ref::<StringViewArray>()
                .ok_or_else(|| {
                    SourceError::TypeConversion("Failed to downcast to StringViewArray".to_string())
                })?;
            Ok(Value::String(array.value(row_idx).to_string()))
        }
        other => {
            warn!("Unsupported Arrow type for conversion: {:?}", other);
            Ok(Value::Null)
        }
    }
}
