use serde_json::Value;

use crate::{error::ValidationErrorKind, ext::cmp, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    let Value::Array(options) = value else {
        return;
    };
    if !options.iter().any(|option| cmp::equal(instance, option)) {
        errors.push(ctx.error(
            ValidationErrorKind::Enum {
                options: value.clone(),
            },
            instance,
        ));
    }
}
