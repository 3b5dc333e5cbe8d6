//! In-memory tabular data representation.
//!
//! This module provides the columnar [`Table`] structure that expectation
//! suites are evaluated against, along with the dynamically-typed [`Value`]
//! cell type. Adapters (CSV, SQL) all funnel into this representation so the
//! evaluation engine never needs to know where the data came from.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Errors raised while constructing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Columns have differing lengths
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    RaggedColumns {
        /// Offending column name
        column: String,
        /// Length of the first column
        expected: usize,
        /// Length of the offending column
        actual: usize,
    },

    /// Two columns share a name
    #[error("Duplicate column name '{0}'")]
    DuplicateColumn(String),
}

/// A dynamically typed cell value.
///
/// Tables are heterogeneous per column in principle, but well-formed sources
/// produce homogeneous columns; type mismatches surface as evaluation errors
/// rather than construction errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl Value {
    /// Returns true if the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the value as a float, coercing integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Canonical string form used for set membership comparisons.
    ///
    /// Strings compare as themselves; other scalars by their display form.
    /// Floats that are whole numbers render without a fractional part so
    /// `1.0` and `1` compare equal.
    pub fn canonical_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() {
                    Some(format!("{}", *f as i64))
                } else {
                    Some(f.to_string())
                }
            }
            Value::String(s) => Some(s.clone()),
        }
    }

    /// Converts the value into JSON for report samples.
    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Int(i) => JsonValue::from(*i),
            Value::Float(f) => JsonValue::from(*f),
            Value::String(s) => JsonValue::String(s.clone()),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

/// A named column of values.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name
    pub name: String,
    /// Cell values, one per row
    pub values: Vec<Value>,
}

impl Column {
    /// Creates a column from any iterable of convertible values.
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// An immutable, columnar table.
///
/// All columns have the same length; construction enforces the invariant.
///
/// # Example
///
/// ```rust
/// use expectations_validator::{Column, Table, Value};
///
/// let table = Table::from_columns(vec![
///     Column::new("age", vec![Value::Int(25), Value::Int(30), Value::Null]),
///     Column::new("status", vec!["active", "inactive", "active"]),
/// ]).unwrap();
///
/// assert_eq!(table.row_count(), 3);
/// assert!(table.column("age").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Creates an empty table with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a table from columns, enforcing equal lengths and unique names.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let row_count = columns.first().map(|c| c.values.len()).unwrap_or(0);

        let mut seen = std::collections::HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(TableError::DuplicateColumn(column.name.clone()));
            }
            if column.values.len() != row_count {
                return Err(TableError::RaggedColumns {
                    column: column.name.clone(),
                    expected: row_count,
                    actual: column.values.len(),
                });
            }
        }

        Ok(Self { columns, row_count })
    }

    /// Creates a table from a header and row-major values.
    ///
    /// Short rows are padded with nulls; long rows are truncated to the
    /// header width.
    pub fn from_rows<S: Into<String>>(
        header: Vec<S>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, TableError> {
        let names: Vec<String> = header.into_iter().map(Into::into).collect();
        let mut columns: Vec<Column> = names
            .into_iter()
            .map(|name| Column {
                name,
                values: Vec::with_capacity(rows.len()),
            })
            .collect();

        for row in rows {
            let mut cells = row.into_iter();
            for column in columns.iter_mut() {
                column.values.push(cells.next().unwrap_or(Value::Null));
            }
        }

        Self::from_columns(columns)
    }

    /// Creates a table from row maps, with an explicit column order.
    ///
    /// Keys missing from a row become nulls; keys outside the given column
    /// list are ignored.
    pub fn from_records<S: Into<String>>(
        column_names: Vec<S>,
        mut records: Vec<std::collections::HashMap<String, Value>>,
    ) -> Result<Self, TableError> {
        let names: Vec<String> = column_names.into_iter().map(Into::into).collect();
        let columns = names
            .into_iter()
            .map(|name| {
                let values = records
                    .iter_mut()
                    .map(|record| record.remove(&name).unwrap_or(Value::Null))
                    .collect();
                Column { name, values }
            })
            .collect();

        Self::from_columns(columns)
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns true if a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Returns all columns in declaration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns column names in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
