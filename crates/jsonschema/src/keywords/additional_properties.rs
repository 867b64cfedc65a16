use serde_json::Value;

use crate::{error::ValidationErrorKind, evaluated::additional_properties, Error, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    let extras = additional_properties(ctx.validator, object, ctx.keywords)?;
    if extras.is_empty() {
        return Ok(());
    }
    if let Value::Bool(false) = value {
        errors.push(ctx.error(
            ValidationErrorKind::AdditionalProperties {
                unexpected: extras.into_iter().map(String::from).collect(),
            },
            instance,
        ));
    } else {
        for name in extras {
            if let Some(property) = object.get(name) {
                ctx.descend_property(property, value, name, errors)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    fn schema() -> Value {
        json!({
            "additionalProperties": false,
            "properties": {
                "foo": {"type": "string"},
                "barbaz": {"type": "integer", "maximum": 30},
            },
            "patternProperties": {
                "^bar": {"type": "integer", "minimum": 5},
                "spam$": {"type": "integer", "maximum": 10},
            }
        })
    }

    // Another type
    #[test_case(&json!([1]))]
    // The right type
    #[test_case(&json!({}))]
    // Match `properties.foo`
    #[test_case(&json!({"foo": "a"}))]
    // Match `properties.barbaz` & `patternProperties.^bar`
    #[test_case(&json!({"barbaz": 6}))]
    // Match `patternProperties.spam$`
    #[test_case(&json!({"spam": 7}))]
    // All combined
    #[test_case(&json!({"barspam": 7, "bar": 6, "spam": 7, "foo": "a", "barbaz": 6}))]
    fn valid(instance: &Value) {
        tests_util::is_valid(&schema(), instance);
    }

    #[test_case(&json!({"faz": 1}), &["Additional properties are not allowed ('faz' was unexpected)"])]
    #[test_case(&json!({"faz": 1, "haz": 1}), &["Additional properties are not allowed ('faz', 'haz' were unexpected)"])]
    #[test_case(
        &json!({"foo": 3, "faz": 1}),
        &["3 is not of type \"string\"", "Additional properties are not allowed ('faz' was unexpected)"]
    )]
    fn invalid(instance: &Value, expected: &[&str]) {
        tests_util::is_not_valid(&schema(), instance);
        tests_util::expect_errors(&schema(), instance, expected);
    }

    #[test]
    fn subschema() {
        let schema = json!({"properties": {"a": true}, "additionalProperties": {"type": "integer"}});
        tests_util::is_valid(&schema, &json!({"a": "x", "b": 1}));
        tests_util::assert_instance_paths(&schema, &json!({"a": "x", "b": "y"}), &["/b"]);
    }
}
