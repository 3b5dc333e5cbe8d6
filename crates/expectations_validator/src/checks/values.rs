//! Per-value predicates.
//!
//! Each function scans one column and reports the cells violating its
//! predicate. Apart from `not_null`, every predicate skips null cells: a
//! null is neither a pass nor a failure, it is simply not considered. A
//! non-null cell of the wrong type aborts the whole predicate with a
//! `TypeMismatch` instead of being silently counted as a violation.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::checks::ValueOutcome;
use crate::error::{CheckError, CheckResult};
use crate::table::{Column, Value};

fn type_mismatch(column: &Column, value: &Value, expected: &'static str) -> CheckError {
    CheckError::TypeMismatch {
        column: column.name.clone(),
        expected,
        found: format!("{:?}", value),
    }
}

/// Every cell must be non-null.
///
/// Considers every row of the column; the violating cells are the nulls
/// themselves, which never appear in report samples.
pub fn not_null(column: &Column) -> ValueOutcome {
    let unexpected = column
        .values
        .iter()
        .filter(|v| v.is_null())
        .cloned()
        .collect();

    ValueOutcome {
        element_count: column.values.len(),
        unexpected,
    }
}

/// Every non-null cell must appear exactly once.
///
/// Every occurrence of a duplicated value counts as violating, so two rows
/// sharing a value contribute two to the unexpected count.
pub fn unique(column: &Column) -> ValueOutcome {
    let mut occurrences: HashMap<String, usize> = HashMap::new();
    let mut element_count = 0;

    for value in &column.values {
        if let Some(key) = value.canonical_string() {
            element_count += 1;
            *occurrences.entry(key).or_insert(0) += 1;
        }
    }

    let unexpected = column
        .values
        .iter()
        .filter(|v| {
            v.canonical_string()
                .is_some_and(|key| occurrences[&key] > 1)
        })
        .cloned()
        .collect();

    ValueOutcome {
        element_count,
        unexpected,
    }
}

/// Every non-null cell must be numeric and lie in `[min, max]`.
pub fn between(column: &Column, min: f64, max: f64) -> CheckResult<ValueOutcome> {
    let mut element_count = 0;
    let mut unexpected = Vec::new();

    for value in &column.values {
        if value.is_null() {
            continue;
        }
        let number = value
            .as_f64()
            .ok_or_else(|| type_mismatch(column, value, "numeric"))?;
        element_count += 1;
        if number < min || number > max {
            unexpected.push(value.clone());
        }
    }

    Ok(ValueOutcome {
        element_count,
        unexpected,
    })
}

/// Every non-null cell must be a string matching the pattern.
///
/// Matching is a substring search, so anchor the pattern to require a full
/// match.
pub fn matches_regex(column: &Column, pattern: &Regex) -> CheckResult<ValueOutcome> {
    let mut element_count = 0;
    let mut unexpected = Vec::new();

    for value in &column.values {
        if value.is_null() {
            continue;
        }
        let text = value
            .as_str()
            .ok_or_else(|| type_mismatch(column, value, "string"))?;
        element_count += 1;
        if !pattern.is_match(text) {
            unexpected.push(value.clone());
        }
    }

    Ok(ValueOutcome {
        element_count,
        unexpected,
    })
}

/// Every non-null cell must be a member of the allowed set.
///
/// Non-string cells compare by their canonical string form.
pub fn in_set(column: &Column, allowed: &[String]) -> ValueOutcome {
    let allowed: HashSet<&str> = allowed.iter().map(String::as_str).collect();
    let mut element_count = 0;
    let mut unexpected = Vec::new();

    for value in &column.values {
        let Some(key) = value.canonical_string() else {
            continue;
        };
        element_count += 1;
        if !allowed.contains(key.as_str()) {
            unexpected.push(value.clone());
        }
    }

    ValueOutcome {
        element_count,
        unexpected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn column(values: Vec<Value>) -> Column {
        Column::new("c", values)
    }

    #[test]
    fn test_not_null_counts_every_row() {
        let col = column(vec![Value::from("a"), Value::Null, Value::from("b")]);
        let outcome = not_null(&col);

        assert_eq!(outcome.element_count, 3);
        assert_eq!(outcome.unexpected, vec![Value::Null]);
        assert!(!outcome.success());
    }

    #[test]
    fn test_unique_counts_every_occurrence() {
        let col = column(vec![
            Value::from("x"),
            Value::from("y"),
            Value::from("x"),
            Value::Null,
        ]);
        let outcome = unique(&col);

        assert_eq!(outcome.element_count, 3);
        assert_eq!(outcome.unexpected, vec![Value::from("x"), Value::from("x")]);
    }

    #[test]
    fn test_unique_all_distinct() {
        let col = column(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
        assert!(unique(&col).success());
    }

    #[test]
    fn test_between_skips_nulls() {
        let col = column(vec![Value::Int(25), Value::Null, Value::Int(70)]);
        let outcome = between(&col, 18.0, 60.0).unwrap();

        assert_eq!(outcome.element_count, 2);
        assert_eq!(outcome.unexpected, vec![Value::Int(70)]);
    }

    #[test]
    fn test_between_bounds_inclusive() {
        let col = column(vec![Value::Int(18), Value::Int(60)]);
        assert!(between(&col, 18.0, 60.0).unwrap().success());
    }

    #[test]
    fn test_between_type_mismatch() {
        let col = column(vec![Value::Int(25), Value::from("thirty")]);
        let err = between(&col, 0.0, 100.0).unwrap_err();
        assert!(matches!(err, CheckError::TypeMismatch { .. }));
    }

    #[test]
    fn test_matches_regex() {
        let pattern = Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap();
        let col = column(vec![
            Value::from("alice@example.com"),
            Value::from("not-an-email"),
            Value::Null,
        ]);
        let outcome = matches_regex(&col, &pattern).unwrap();

        assert_eq!(outcome.element_count, 2);
        assert_eq!(outcome.unexpected, vec![Value::from("not-an-email")]);
    }

    #[test]
    fn test_matches_regex_type_mismatch() {
        let pattern = Regex::new(".*").unwrap();
        let col = column(vec![Value::Int(42)]);
        assert!(matches_regex(&col, &pattern).is_err());
    }

    #[test]
    fn test_in_set() {
        let allowed = vec!["active".to_string(), "inactive".to_string()];
        let col = column(vec![
            Value::from("active"),
            Value::from("unknown"),
            Value::Null,
        ]);
        let outcome = in_set(&col, &allowed);

        assert_eq!(outcome.element_count, 2);
        assert_eq!(outcome.unexpected, vec![Value::from("unknown")]);
    }

    #[test]
    fn test_in_set_numeric_canonical_form() {
        let allowed = vec!["1".to_string(), "2".to_string()];
        let col = column(vec![Value::Int(1), Value::Float(2.0), Value::Int(3)]);
        let outcome = in_set(&col, &allowed);

        assert_eq!(outcome.unexpected, vec![Value::Int(3)]);
    }
}
