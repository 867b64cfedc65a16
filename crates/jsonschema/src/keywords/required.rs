use serde_json::Value;

use crate::{error::ValidationErrorKind, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    let (Value::Object(object), Value::Array(required)) = (instance, value) else {
        return;
    };
    for property in required.iter().filter_map(Value::as_str) {
        if !object.contains_key(property) {
            errors.push(ctx.error(
                ValidationErrorKind::Required {
                    property: property.to_string(),
                },
                instance,
            ));
        }
    }
}
