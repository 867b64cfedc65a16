use serde_json::Value;

use crate::{Error, ValidationError};

use super::Context;

/// `if` with its `then` and `else` branches. The condition itself never produces errors.
pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let branch = if ctx.is_valid(instance, value)? {
        ctx.keywords.get("then")
    } else {
        ctx.keywords.get("else")
    };
    if let Some(branch) = branch {
        ctx.descend(instance, branch, errors)?;
    }
    Ok(())
}
