//! Pairwise distinctness under JSON Schema equality.
//!
//! The checker picks one of three strategies up front, based on what the
//! sequence contains:
//!
//! - only scalars: hash them, `O(n)`;
//! - only arrays without objects at any depth: sort and compare neighbours, `O(n log n)`;
//! - anything else: compare every pair, `O(n²)`.
use ahash::AHashSet;
use serde_json::{Number, Value};

use crate::{
    error::ValidationErrorKind,
    ext::cmp::{compare, equal},
    ValidationError,
};

use super::Context;

/// How [`is_unique`] checks a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Every element is a scalar.
    Hash,
    /// Every element is an array with no objects at any depth.
    Sort,
    /// Everything else.
    BruteForce,
}

/// Choose the strategy for `items`.
#[must_use]
pub fn classify(items: &[Value]) -> Strategy {
    if items.iter().all(is_scalar) {
        Strategy::Hash
    } else if items
        .iter()
        .all(|item| item.is_array() && is_orderable(item))
    {
        Strategy::Sort
    } else {
        Strategy::BruteForce
    }
}

/// Whether no two elements of `items` are equal.
///
/// ```rust
/// use jsonschema_annotations::is_unique;
/// use serde_json::json;
///
/// assert!(is_unique(&[json!(1), json!(true)]));
/// assert!(!is_unique(&[json!(1), json!(1.0)]));
/// assert!(!is_unique(&[json!({"a": 1, "b": 2}), json!({"b": 2, "a": 1})]));
/// ```
#[must_use]
pub fn is_unique(items: &[Value]) -> bool {
    if items.len() <= 1 {
        return true;
    }
    match classify(items) {
        Strategy::Hash => is_unique_hashed(items),
        Strategy::Sort => is_unique_sorted(items),
        Strategy::BruteForce => is_unique_brute_force(items),
    }
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn is_orderable(value: &Value) -> bool {
    match value {
        Value::Object(_) => false,
        Value::Array(items) => items.iter().all(is_orderable),
        _ => true,
    }
}

/// `2^127`, floats below it in magnitude fit into `i128`.
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Hash key for a scalar. Booleans get their own variants, so they never
/// collide with `0` or `1`; integral floats share the key of the integer.
#[derive(Debug, PartialEq, Eq, Hash)]
enum HashKey<'a> {
    Null,
    True,
    False,
    Integer(i128),
    Float(u64),
    String(&'a str),
}

impl<'a> HashKey<'a> {
    fn from_scalar(value: &'a Value) -> Option<HashKey<'a>> {
        match value {
            Value::Null => Some(HashKey::Null),
            Value::Bool(true) => Some(HashKey::True),
            Value::Bool(false) => Some(HashKey::False),
            Value::Number(number) => Some(HashKey::from_number(number)),
            Value::String(string) => Some(HashKey::String(string)),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
    fn from_number(number: &Number) -> HashKey<'static> {
        if let Some(value) = number.as_u64() {
            HashKey::Integer(i128::from(value))
        } else if let Some(value) = number.as_i64() {
            HashKey::Integer(i128::from(value))
        } else {
            let value = number.as_f64().unwrap_or(f64::NAN);
            if value.trunc() == value && value.abs() < I128_BOUND {
                HashKey::Integer(value as i128)
            } else {
                HashKey::Float(value.to_bits())
            }
        }
    }
}

fn is_unique_hashed(items: &[Value]) -> bool {
    let mut seen = AHashSet::with_capacity(items.len());
    for item in items {
        let Some(key) = HashKey::from_scalar(item) else {
            return is_unique_brute_force(items);
        };
        if !seen.insert(key) {
            return false;
        }
    }
    true
}

fn is_unique_sorted(items: &[Value]) -> bool {
    let mut sorted: Vec<&Value> = items.iter().collect();
    sorted.sort_unstable_by(|left, right| compare(left, right));
    // Every neighbouring pair, not only the first one
    sorted
        .windows(2)
        .all(|pair| !equal(pair[0], pair[1]))
}

fn is_unique_brute_force(items: &[Value]) -> bool {
    let mut seen: Vec<&Value> = Vec::with_capacity(items.len());
    for item in items {
        if seen.iter().any(|previous| equal(previous, item)) {
            return false;
        }
        seen.push(item);
    }
    true
}

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    if let (Value::Array(items), Value::Bool(true)) = (instance, value) {
        if !is_unique(items) {
            errors.push(ctx.error(ValidationErrorKind::UniqueItems, instance));
        }
    }
}
