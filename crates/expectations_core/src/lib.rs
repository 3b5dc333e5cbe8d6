//! # Expectations Core
//!
//! Core data structures and types for the dqe data-quality engine.
//!
//! This crate provides the building blocks for defining, serializing and
//! reporting on expectation suites. An expectation is a single declarative
//! assertion about a table or one of its columns; a suite is a named, ordered
//! collection of expectations evaluated together against one table.
//!
//! ## Key Concepts
//!
//! - **Expectation**: a declarative rule (null check, range check, regex
//!   check, uniqueness, statistical check, ...) with optional free-form
//!   metadata
//! - **Suite**: a named, ordered collection of expectations
//! - **ValidationReport**: per-expectation results plus aggregate statistics
//!
//! ## Example
//!
//! ```rust
//! use expectations_core::{Expectation, SuiteBuilder};
//!
//! let suite = SuiteBuilder::new("user_data")
//!     .not_null("email")
//!     .between("age", 18.0, 60.0)
//!     .expectation(
//!         Expectation::unique("id").with_meta("owner", "data-quality-team"),
//!     )
//!     .build();
//!
//! assert_eq!(suite.expectations.len(), 3);
//! ```

pub mod builder;
pub mod error;
pub mod report;
pub mod suite;

pub use builder::*;
pub use error::*;
pub use report::*;
pub use suite::*;
