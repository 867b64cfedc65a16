use serde_json::Value;

use crate::{error::ValidationErrorKind, Error, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let Value::Array(subschemas) = value else {
        return Ok(());
    };
    for subschema in subschemas {
        if ctx.is_valid(instance, subschema)? {
            return Ok(());
        }
    }
    errors.push(ctx.error(ValidationErrorKind::AnyOf, instance));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!(1))]
    #[test_case(&json!("a"))]
    fn valid(instance: &Value) {
        tests_util::is_valid(&json!({"anyOf": [{"type": "string"}, {"type": "integer"}]}), instance);
    }

    #[test]
    fn invalid() {
        tests_util::expect_errors(
            &json!({"anyOf": [{"type": "string"}, {"type": "integer"}]}),
            &json!(null),
            &["null is not valid under any of the schemas listed in the 'anyOf' keyword"],
        );
    }
}
