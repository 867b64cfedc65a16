use serde_json::Value;

use crate::{Error, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    if let Value::Array(subschemas) = value {
        for subschema in subschemas {
            ctx.descend(instance, subschema, errors)?;
        }
    }
    Ok(())
}
