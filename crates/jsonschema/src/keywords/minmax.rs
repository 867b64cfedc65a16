use serde_json::Value;

use crate::{error::ValidationErrorKind, ext::cmp::compare_numbers, ValidationError};

use super::Context;

/// `minimum`, `maximum`, `exclusiveMinimum` and `exclusiveMaximum`.
pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    keyword: &str,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    let (Value::Number(number), Value::Number(limit)) = (instance, value) else {
        return;
    };
    let ordering = compare_numbers(number, limit);
    let kind = match keyword {
        "minimum" if ordering.is_lt() => ValidationErrorKind::Minimum {
            limit: value.clone(),
        },
        "maximum" if ordering.is_gt() => ValidationErrorKind::Maximum {
            limit: value.clone(),
        },
        "exclusiveMinimum" if ordering.is_le() => ValidationErrorKind::ExclusiveMinimum {
            limit: value.clone(),
        },
        "exclusiveMaximum" if ordering.is_ge() => ValidationErrorKind::ExclusiveMaximum {
            limit: value.clone(),
        },
        _ => return,
    };
    errors.push(ctx.error(kind, instance));
}
