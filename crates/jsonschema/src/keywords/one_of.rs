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
    let mut valid = 0;
    for subschema in subschemas {
        if ctx.is_valid(instance, subschema)? {
            valid += 1;
            if valid > 1 {
                errors.push(ctx.error(ValidationErrorKind::OneOfMultipleValid, instance));
                return Ok(());
            }
        }
    }
    if valid == 0 {
        errors.push(ctx.error(ValidationErrorKind::OneOfNotValid, instance));
    }
    Ok(())
}
