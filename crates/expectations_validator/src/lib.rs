//! Validation engine for expectation suites.
//!
//! This crate evaluates [`expectations_core`] suites against in-memory
//! tabular data:
//!
//! - [`Table`]: the columnar data representation all sources funnel into
//! - [`Validator`]: evaluates a suite and assembles the report
//! - [`Profiler`]: generates a suite from observed data
//! - [`Checkpoint`]: named, repeatable runs with timestamped results

pub mod checkpoint;
pub mod checks;
pub mod engine;
pub mod error;
pub mod profiler;
pub mod table;

pub use checkpoint::{Checkpoint, CheckpointResult};
pub use engine::Validator;
pub use error::{CheckError, CheckResult};
pub use profiler::Profiler;
pub use table::{Column, Table, TableError, Value};
