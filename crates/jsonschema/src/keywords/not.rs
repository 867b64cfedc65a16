use serde_json::Value;

use crate::{error::ValidationErrorKind, Error, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    if ctx.is_valid(instance, value)? {
        errors.push(ctx.error(
            ValidationErrorKind::Not {
                schema: value.clone(),
            },
            instance,
        ));
    }
    Ok(())
}
