use serde_json::Value;

use crate::{Error, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let (Value::Object(object), Value::Object(properties)) = (instance, value) else {
        return Ok(());
    };
    for (name, subschema) in properties {
        if let Some(property) = object.get(name) {
            ctx.descend_property(property, subschema, name, errors)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn properties() {
        let schema = json!({"properties": {"a": {"type": "integer"}, "b": false}});
        tests_util::is_valid(&schema, &json!({"a": 1, "c": "x"}));
        tests_util::is_valid(&schema, &json!([1]));
        tests_util::assert_instance_paths(&schema, &json!({"a": "x", "b": 1}), &["/a", "/b"]);
    }
}
