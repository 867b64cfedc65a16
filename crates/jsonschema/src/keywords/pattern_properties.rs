use serde_json::Value;

use crate::{Error, Validate, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let (Value::Object(object), Value::Object(patterns)) = (instance, value) else {
        return Ok(());
    };
    for (pattern, subschema) in patterns {
        for (name, property) in object {
            if ctx.validator.is_match(pattern, name)? {
                ctx.descend_property(property, subschema, name, errors)?;
            }
        }
    }
    Ok(())
}
