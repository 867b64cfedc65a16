use serde_json::Value;

use crate::{Error, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let Value::Object(object) = instance else {
        return Ok(());
    };
    for name in object.keys() {
        ctx.descend_property(&Value::String(name.clone()), value, name, errors)?;
    }
    Ok(())
}
