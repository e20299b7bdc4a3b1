//! Evaluates [`Criteria`] and [`SortSpec`] against camp documents stored as JSON.

use std::cmp::Ordering;

use serde_json::Value;

use crate::domain::models::query::{Criteria, FieldOp, SortDirection, SortSpec};

/// Look up a dotted path such as `ageRange.min`. JSON null counts as missing.
pub fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

pub fn matches(document: &Value, criteria: &Criteria) -> bool {
    match criteria {
        Criteria::All(parts) => parts.iter().all(|part| matches(document, part)),
        Criteria::Any(parts) => parts.iter().any(|part| matches(document, part)),
        Criteria::Field { path, op } => field_matches(lookup(document, path), op),
    }
}

fn field_matches(value: Option<&Value>, op: &FieldOp) -> bool {
    match op {
        FieldOp::Eq(expected) => value.map_or(false, |v| values_equal(v, expected)),
        FieldOp::Ne(expected) => value.map_or(true, |v| !values_equal(v, expected)),
        FieldOp::Gte(bound) => value
            .and_then(|v| compare(v, bound))
            .map_or(false, |ordering| ordering != Ordering::Less),
        FieldOp::Lte(bound) => value
            .and_then(|v| compare(v, bound))
            .map_or(false, |ordering| ordering != Ordering::Greater),
        FieldOp::ContainsIgnoreCase(needle) => value
            .and_then(Value::as_str)
            .map_or(false, |haystack| {
                haystack.to_lowercase().contains(&needle.to_lowercase())
            }),
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left.as_f64(), right.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => left == right,
    }
}

/// Numbers compare numerically, strings lexically; anything else is incomparable
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Stable sort; documents missing the field come first when ascending.
pub fn sort_documents<T>(items: &mut [(T, Value)], spec: &SortSpec) {
    items.sort_by(|(_, a), (_, b)| {
        let ordering = match (lookup(a, spec.field), lookup(b, spec.field)) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(x), Some(y)) => compare(x, y).unwrap_or(Ordering::Equal),
        };
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
