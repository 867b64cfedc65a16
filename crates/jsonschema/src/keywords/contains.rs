use serde_json::Value;

use crate::{error::ValidationErrorKind, keywords::helpers::as_limit, Error, ValidationError};

use super::Context;

/// `contains` together with its `minContains` and `maxContains` modifiers.
pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let Value::Array(items) = instance else {
        return Ok(());
    };
    let min_contains = ctx
        .keywords
        .get("minContains")
        .and_then(as_limit)
        .unwrap_or(1);
    let max_contains = ctx.keywords.get("maxContains").and_then(as_limit);
    let mut matches = 0_u64;
    for item in items {
        if ctx.is_valid_child(item, value)? {
            matches += 1;
        }
    }
    if matches < min_contains {
        errors.push(ctx.error(ValidationErrorKind::Contains { min_contains }, instance));
    }
    if let Some(limit) = max_contains {
        if matches > limit {
            errors.push(ctx.error(ValidationErrorKind::MaxContains { limit }, instance));
        }
    }
    Ok(())
}
