//! Individual predicate implementations.
//!
//! Split by evaluation shape: [`values`] holds per-value predicates that
//! count violating cells, [`aggregates`] holds column statistics compared
//! against a range, and [`table`] holds table-level structural predicates.

pub mod aggregates;
pub mod table;
pub mod values;

use crate::Value;

/// Outcome of a per-value predicate over one column.
///
/// `element_count` is the number of cells the predicate considered;
/// `unexpected` holds the violating cells in row order. The engine turns
/// this into report statistics, applying the sample cap.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueOutcome {
    /// Number of cells considered
    pub element_count: usize,
    /// Violating cells, in row order
    pub unexpected: Vec<Value>,
}

impl ValueOutcome {
    /// True when no considered cell violated the predicate.
    pub fn success(&self) -> bool {
        self.unexpected.is_empty()
    }
}
