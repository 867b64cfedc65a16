use serde_json::Value;

use crate::{error::ValidationErrorKind, keywords::helpers::as_limit, ValidationError};

use super::Context;

/// `minLength` and `maxLength`. Length is measured in Unicode code points.
pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    keyword: &str,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    let (Value::String(string), Some(limit)) = (instance, as_limit(value)) else {
        return;
    };
    let length = bytecount::num_chars(string.as_bytes()) as u64;
    let kind = match keyword {
        "minLength" if length < limit => ValidationErrorKind::MinLength { limit },
        "maxLength" if length > limit => ValidationErrorKind::MaxLength { limit },
        _ => return,
    };
    errors.push(ctx.error(kind, instance));
}
