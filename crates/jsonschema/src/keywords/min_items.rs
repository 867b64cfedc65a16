use serde_json::Value;

use crate::{error::ValidationErrorKind, keywords::helpers::as_limit, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    if let (Value::Array(items), Some(limit)) = (instance, as_limit(value)) {
        if (items.len() as u64) < limit {
            errors.push(ctx.error(ValidationErrorKind::MinItems { limit }, instance));
        }
    }
}
