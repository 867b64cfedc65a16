use serde_json::Value;

use crate::{Error, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let (Value::Object(object), Value::Object(dependencies)) = (instance, value) else {
        return Ok(());
    };
    for (property, subschema) in dependencies {
        if object.contains_key(property) {
            ctx.descend(instance, subschema, errors)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn dependent_schemas() {
        let schema = json!({"dependentSchemas": {"bar": {"required": ["foo"]}}});
        tests_util::is_valid(&schema, &json!({"foo": 1}));
        tests_util::is_valid(&schema, &json!({"foo": 1, "bar": 2}));
        tests_util::is_not_valid(&schema, &json!({"bar": 2}));
    }
}
