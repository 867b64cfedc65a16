use serde_json::Value;

use crate::{error::ValidationErrorKind, ValidationError};

use super::Context;

pub(crate) fn validate(
    ctx: &Context<'_, '_>,
    instance: &Value,
    value: &Value,
    errors: &mut Vec<ValidationError>,
) {
    let (Value::Object(object), Value::Object(dependencies)) = (instance, value) else {
        return;
    };
    for (property, dependency) in dependencies {
        if !object.contains_key(property) {
            continue;
        }
        let Value::Array(required) = dependency else {
            continue;
        };
        for name in required.iter().filter_map(Value::as_str) {
            if !object.contains_key(name) {
                errors.push(ctx.error(
                    ValidationErrorKind::DependentRequired {
                        property: property.clone(),
                        dependency: name.to_string(),
                    },
                    instance,
                ));
            }
        }
    }
}
