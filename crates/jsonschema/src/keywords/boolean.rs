use serde_json::Value;

use crate::{error::ValidationErrorKind, paths::LazyLocation, ValidationError};

/// `true` accepts everything, `false` rejects everything.
pub(crate) fn validate(
    valid: bool,
    instance: &Value,
    location: &LazyLocation<'_>,
    errors: &mut Vec<ValidationError>,
) {
    if !valid {
        errors.push(ValidationError::new(
            ValidationErrorKind::FalseSchema,
            location,
            instance,
        ));
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn false_schema() {
        tests_util::is_not_valid(&json!(false), &json!(1));
        tests_util::expect_errors(&json!(false), &json!(1), &["False schema does not allow 1"]);
    }

    #[test]
    fn true_schema() {
        tests_util::is_valid(&json!(true), &json!({"anything": [1, 2]}));
    }

    #[test]
    fn nested_location() {
        tests_util::assert_instance_paths(
            &json!({"properties": {"a": {"items": false}}}),
            &json!({"a": [1]}),
            &["/a/0"],
        );
    }
}
