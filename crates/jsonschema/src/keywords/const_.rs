use serde_json::Value;

use crate::{error::ValidationErrorKind, ext::cmp, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    if !cmp::equal(value, instance) {
        errors.push(ctx.error(
            ValidationErrorKind::Constant {
                expected_value: value.clone(),
            },
            instance,
        ));
    }
}
