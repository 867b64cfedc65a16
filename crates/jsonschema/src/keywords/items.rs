use serde_json::Value;

use crate::{Error, ValidationError};

use super::Context;

/// Applies to the elements after those covered by `prefixItems`.
///
/// An array of schemas applies positionally, as in older drafts.
pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let Value::Array(items) = instance else {
        return Ok(());
    };
    if let Value::Array(subschemas) = value {
        for (idx, (item, subschema)) in items.iter().zip(subschemas).enumerate() {
            ctx.descend_item(item, subschema, idx, errors)?;
        }
        return Ok(());
    }
    let skip = ctx
        .keywords
        .get("prefixItems")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    for (idx, item) in items.iter().enumerate().skip(skip) {
        ctx.descend_item(item, value, idx, errors)?;
    }
    Ok(())
}
