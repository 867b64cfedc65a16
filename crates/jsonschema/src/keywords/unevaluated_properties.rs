use ahash::AHashSet;
use serde_json::Value;

use crate::{error::ValidationErrorKind, evaluated::evaluated_properties, Error, ValidationError};

use super::Context;

/// Properties not evaluated by any sibling keyword must be valid against `unevaluatedProperties`.
pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    let evaluated: AHashSet<&str> =
        evaluated_properties(ctx.validator, instance, ctx.schema, ctx.resolver)?
            .into_iter()
            .collect();
    let mut unexpected = Vec::new();
    for (name, property) in object {
        if evaluated.contains(name.as_str()) {
            continue;
        }
        let mut property_errors = Vec::new();
        ctx.descend_property(property, value, name, &mut property_errors)?;
        if !property_errors.is_empty() {
            unexpected.push(name.clone());
        }
    }
    if !unexpected.is_empty() {
        errors.push(ctx.error(
            ValidationErrorKind::UnevaluatedProperties { unexpected },
            instance,
        ));
    }
    Ok(())
}
