use serde_json::Value;

use crate::{Error, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let (Value::Array(items), Value::Array(subschemas)) = (instance, value) else {
        return Ok(());
    };
    for (idx, (item, subschema)) in items.iter().zip(subschemas).enumerate() {
        ctx.descend_item(item, subschema, idx, errors)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!([1, "a"]))]
    #[test_case(&json!([1]); "shorter instance")]
    #[test_case(&json!([1, "a", null]); "longer instance")]
    fn valid(instance: &Value) {
        tests_util::is_valid(&json!({"prefixItems": [{"type": "integer"}, {"type": "string"}]}), instance);
    }

    #[test]
    fn location() {
        tests_util::assert_instance_paths(
            &json!({"prefixItems": [{"type": "integer"}, {"type": "string"}]}),
            &json!([1, 2]),
            &["/1"],
        );
    }
}
