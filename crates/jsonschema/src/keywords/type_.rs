use serde_json::Value;

use crate::{error::ValidationErrorKind, keywords::helpers::is_type, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    let matches = match value {
        Value::String(type_name) => is_type(instance, type_name),
        Value::Array(type_names) => type_names
            .iter()
            .filter_map(Value::as_str)
            .any(|type_name| is_type(instance, type_name)),
        _ => return,
    };
    if !matches {
        errors.push(ctx.error(
            ValidationErrorKind::Type {
                expected: value.clone(),
            },
            instance,
        ));
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"type": "integer"}), &json!(1.0))]
    #[test_case(&json!({"type": ["string", "null"]}), &json!(null))]
    #[test_case(&json!({"type": "number"}), &json!(-0.5))]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test_case(&json!({"type": "integer"}), &json!(true), "true is not of type \"integer\"")]
    #[test_case(&json!({"type": ["string", "null"]}), &json!(1), "1 is not of types [\"string\",\"null\"]")]
    fn invalid(schema: &Value, instance: &Value, expected: &str) {
        tests_util::is_not_valid(schema, instance);
        tests_util::expect_errors(schema, instance, &[expected]);
    }
}
