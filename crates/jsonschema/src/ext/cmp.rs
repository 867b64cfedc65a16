//! JSON Schema equality.
//!
//! Booleans are never equal to numbers (`true != 1`, `false != 0`), while
//! numbers compare by mathematical value regardless of their representation
//! (`1 == 1.0`). Objects compare without regard to key order.
use std::cmp::Ordering;

use num_cmp::NumCmp;
use serde_json::{Map, Number, Value};

/// A JSON value with booleans lifted out of the numeric domain.
#[derive(Debug, Clone, Copy)]
pub enum Unbool<'a> {
    True,
    False,
    Value(&'a Value),
}

/// Separate booleans from every other value.
#[must_use]
pub fn unbool(value: &Value) -> Unbool<'_> {
    match value {
        Value::Bool(true) => Unbool::True,
        Value::Bool(false) => Unbool::False,
        other => Unbool::Value(other),
    }
}

impl PartialEq for Unbool<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Unbool::True, Unbool::True) | (Unbool::False, Unbool::False) => true,
            (Unbool::Value(left), Unbool::Value(right)) => match (left, right) {
                (Value::Null, Value::Null) => true,
                (Value::Number(left), Value::Number(right)) => equal_numbers(left, right),
                (Value::String(left), Value::String(right)) => left == right,
                (Value::Array(left), Value::Array(right)) => equal_arrays(left, right),
                (Value::Object(left), Value::Object(right)) => equal_objects(left, right),
                _ => false,
            },
            _ => false,
        }
    }
}

/// Compare two JSON values under JSON Schema equality.
#[must_use]
pub fn equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Array(left), Value::Array(right)) => equal_arrays(left, right),
        (Value::Object(left), Value::Object(right)) => equal_objects(left, right),
        _ => unbool(left) == unbool(right),
    }
}

/// Arrays are equal when they have the same length and pairwise equal elements.
#[inline]
#[must_use]
pub fn equal_arrays(left: &[Value], right: &[Value]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(l, r)| equal(l, r))
}

/// Objects are equal when they have the same keys with equal values.
#[inline]
#[must_use]
pub fn equal_objects(left: &Map<String, Value>, right: &Map<String, Value>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .all(|(key, value)| right.get(key).is_some_and(|other| equal(value, other)))
}

/// Compare two numbers by value.
#[inline]
#[must_use]
pub fn equal_numbers(left: &Number, right: &Number) -> bool {
    compare_numbers(left, right) == Ordering::Equal
}

#[derive(Clone, Copy)]
enum Repr {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<&Number> for Repr {
    fn from(number: &Number) -> Self {
        if let Some(value) = number.as_u64() {
            Repr::Unsigned(value)
        } else if let Some(value) = number.as_i64() {
            Repr::Signed(value)
        } else {
            Repr::Float(number.as_f64().unwrap_or(f64::NAN))
        }
    }
}

pub(crate) fn compare_numbers(left: &Number, right: &Number) -> Ordering {
    let ordering = match (Repr::from(left), Repr::from(right)) {
        (Repr::Unsigned(left), Repr::Unsigned(right)) => Some(left.cmp(&right)),
        (Repr::Unsigned(left), Repr::Signed(right)) => NumCmp::num_cmp(left, right),
        (Repr::Unsigned(left), Repr::Float(right)) => NumCmp::num_cmp(left, right),
        (Repr::Signed(left), Repr::Unsigned(right)) => NumCmp::num_cmp(left, right),
        (Repr::Signed(left), Repr::Signed(right)) => Some(left.cmp(&right)),
        (Repr::Signed(left), Repr::Float(right)) => NumCmp::num_cmp(left, right),
        (Repr::Float(left), Repr::Unsigned(right)) => NumCmp::num_cmp(left, right),
        (Repr::Float(left), Repr::Signed(right)) => NumCmp::num_cmp(left, right),
        (Repr::Float(left), Repr::Float(right)) => left.partial_cmp(&right),
    };
    // JSON has no NaN
    ordering.unwrap_or(Ordering::Equal)
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

/// A total order over object-free values that agrees with [`equal`]:
/// `compare(a, b) == Equal` exactly when `equal(a, b)`.
///
/// Values of different kinds are ordered `null < boolean < number < string < array`.
/// Objects only compare by size and must not be sorted with this order.
pub(crate) fn compare(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Bool(left), Value::Bool(right)) => left.cmp(right),
        (Value::Number(left), Value::Number(right)) => compare_numbers(left, right),
        (Value::String(left), Value::String(right)) => left.cmp(right),
        (Value::Array(left), Value::Array(right)) => left
            .iter()
            .zip(right)
            .map(|(l, r)| compare(l, r))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| left.len().cmp(&right.len())),
        (Value::Object(left), Value::Object(right)) => left.len().cmp(&right.len()),
        _ => rank(left).cmp(&rank(right)),
    }
}
