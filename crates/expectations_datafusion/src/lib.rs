//! DataFusion-backed data sources for expectation validation.
//!
//! Adapters that load CSV files and SQL query results into the
//! [`expectations_validator::Table`] representation the engine evaluates
//! against.

pub mod convert;
pub mod csv;
pub mod error;
pub mod sql;

pub use convert::batches_to_table;
pub use csv::load_csv;
pub use error::SourceError;
pub use sql::{load_query, load_table};
