use ahash::AHashSet;
use serde_json::Value;

use crate::{error::ValidationErrorKind, evaluated::evaluated_items, Error, ValidationError};

use super::Context;

/// Elements not evaluated by any sibling keyword must be valid against `unevaluatedItems`.
///
/// The tracker already counts elements valid against the `unevaluatedItems`
/// subschema, so every remaining element is an error.
pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    _value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let Value::Array(items) = instance else {
        return Ok(());
    };
    let evaluated: AHashSet<usize> =
        evaluated_items(ctx.validator, instance, ctx.schema, ctx.resolver)?
            .into_iter()
            .collect();
    let unexpected: Vec<String> = items
        .iter()
        .enumerate()
        .filter(|(idx, _)| !evaluated.contains(idx))
        .map(|(_, item)| item.to_string())
        .collect();
    if !unexpected.is_empty() {
        errors.push(ctx.error(ValidationErrorKind::UnevaluatedItems { unexpected }, instance));
    }
    Ok(())
}
