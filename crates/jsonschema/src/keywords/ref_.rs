use serde_json::Value;

use crate::{Error, ValidationError};

use super::{descend, Context};

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let Value::String(reference) = value else {
        return Ok(());
    };
    let (resolver, contents) = ctx.resolver.lookup(reference)?.into_inner();
    descend(
        ctx.validator,
        instance,
        contents,
        &resolver,
        ctx.location,
        errors,
    )
}
