use serde_json::Value;

use crate::{error::ValidationErrorKind, Error, Validate, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let (Value::String(text), Value::String(pattern)) = (instance, value) else {
        return Ok(());
    };
    if !ctx.validator.is_match(pattern, text)? {
        errors.push(ctx.error(
            ValidationErrorKind::Pattern {
                pattern: pattern.clone(),
            },
            instance,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::{tests_util, validator_for, Error};
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"pattern": "^a"}), &json!("abc"))]
    #[test_case(&json!({"pattern": "b"}), &json!("abc"); "search, not full match")]
    #[test_case(&json!({"pattern": "^(?!x)"}), &json!("abc"); "lookahead")]
    #[test_case(&json!({"pattern": "^a"}), &json!(1); "ignores non-strings")]
    fn valid(schema: &Value, instance: &Value) {
        tests_util::is_valid(schema, instance);
    }

    #[test]
    fn invalid() {
        tests_util::expect_errors(
            &json!({"pattern": "^a"}),
            &json!("b"),
            &["\"b\" does not match \"^a\""],
        );
    }

    #[test]
    fn invalid_pattern() {
        let validator = validator_for(&json!({"pattern": "(unclosed"}));
        assert!(matches!(
            validator.is_valid(&json!("a")),
            Err(Error::Pattern { .. })
        ));
    }
}
