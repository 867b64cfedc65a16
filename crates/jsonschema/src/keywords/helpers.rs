#![allow(clippy::float_cmp, clippy::cast_sign_loss)]

use serde_json::Value;

/// Whether `value` is of the JSON Schema type `type_name`.
///
/// Integers include floats without a fractional part. Unknown type names match nothing.
pub(crate) fn is_type(value: &Value, type_name: &str) -> bool {
    match type_name {
        "array" => value.is_array(),
        "boolean" => value.is_boolean(),
        "integer" => match value {
            Value::Number(number) => {
                number.is_u64()
                    || number.is_i64()
                    || number.as_f64().is_some_and(|float| float.trunc() == float)
            }
            _ => false,
        },
        "null" => value.is_null(),
        "number" => value.is_number(),
        "object" => value.is_object(),
        "string" => value.is_string(),
        _ => false,
    }
}

/// A non-negative integer keyword value such as `minItems`.
#[inline]
pub(crate) fn as_limit(value: &Value) -> Option<u64> {
    if let Some(limit) = value.as_u64() {
        return Some(limit);
    }
    let float = value.as_f64()?;
    if float >= 0.0 && float.trunc() == float {
        // NOTE: Imprecise cast as big integers are not supported
        #[allow(clippy::cast_possible_truncation)]
        return Some(float as u64);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{as_limit, is_type};
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!(1), "integer", true)]
    #[test_case(&json!(1.0), "integer", true)]
    #[test_case(&json!(1.5), "integer", false)]
    #[test_case(&json!(-3), "number", true)]
    #[test_case(&json!(true), "integer", false)]
    #[test_case(&json!(false), "boolean", true)]
    #[test_case(&json!(null), "null", true)]
    #[test_case(&json!({}), "object", true)]
    #[test_case(&json!([]), "object", false)]
    #[test_case(&json!("a"), "unknown", false)]
    fn types(value: &Value, type_name: &str, expected: bool) {
        assert_eq!(is_type(value, type_name), expected);
    }

    #[test_case(&json!(3), Some(3))]
    #[test_case(&json!(3.0), Some(3))]
    #[test_case(&json!(3.5), None)]
    #[test_case(&json!(-1), None)]
    #[test_case(&json!("3"), None)]
    fn limits(value: &Value, expected: Option<u64>) {
        assert_eq!(as_limit(value), expected);
    }
}
