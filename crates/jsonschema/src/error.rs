//! Error types.
use std::fmt;

use serde_json::Value;

use crate::paths::{LazyLocation, Location};

/// A failure that aborts evaluation.
///
/// Unlike [`ValidationError`], these are not statements about the instance:
/// the schema references something that does not exist, loops back on
/// itself, or contains a pattern that cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Reference(#[from] referencing::Error),
    #[error("Invalid regular expression '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

impl Error {
    pub(crate) fn pattern(pattern: impl Into<String>, message: impl fmt::Display) -> Error {
        Error::Pattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }
}

/// An instance failing a schema assertion.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    instance: Value,
    kind: ValidationErrorKind,
    instance_path: Location,
}

/// The assertion that failed, with the data needed to explain it.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationErrorKind {
    /// Properties not allowed by `additionalProperties`.
    AdditionalProperties { unexpected: Vec<String> },
    AnyOf,
    Constant { expected_value: Value },
    /// No element matched `contains` often enough.
    Contains { min_contains: u64 },
    /// Too many elements matched `contains`.
    MaxContains { limit: u64 },
    /// A property required by `dependentRequired` is missing.
    DependentRequired { property: String, dependency: String },
    Enum { options: Value },
    ExclusiveMaximum { limit: Value },
    ExclusiveMinimum { limit: Value },
    /// Everything is invalid for `false` schema.
    FalseSchema,
    MaxItems { limit: u64 },
    Maximum { limit: Value },
    MaxLength { limit: u64 },
    MinItems { limit: u64 },
    Minimum { limit: Value },
    MinLength { limit: u64 },
    Not { schema: Value },
    OneOfMultipleValid,
    OneOfNotValid,
    Pattern { pattern: String },
    Required { property: String },
    Type { expected: Value },
    UnevaluatedItems { unexpected: Vec<String> },
    UnevaluatedProperties { unexpected: Vec<String> },
    UniqueItems,
}

impl ValidationErrorKind {
    /// The keyword that produced this error.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            ValidationErrorKind::AdditionalProperties { .. } => "additionalProperties",
            ValidationErrorKind::AnyOf => "anyOf",
            ValidationErrorKind::Constant { .. } => "const",
            ValidationErrorKind::Contains { .. } => "contains",
            ValidationErrorKind::MaxContains { .. } => "maxContains",
            ValidationErrorKind::DependentRequired { .. } => "dependentRequired",
            ValidationErrorKind::Enum { .. } => "enum",
            ValidationErrorKind::ExclusiveMaximum { .. } => "exclusiveMaximum",
            ValidationErrorKind::ExclusiveMinimum { .. } => "exclusiveMinimum",
            ValidationErrorKind::FalseSchema => "false",
            ValidationErrorKind::MaxItems { .. } => "maxItems",
            ValidationErrorKind::Maximum { .. } => "maximum",
            ValidationErrorKind::MaxLength { .. } => "maxLength",
            ValidationErrorKind::MinItems { .. } => "minItems",
            ValidationErrorKind::Minimum { .. } => "minimum",
            ValidationErrorKind::MinLength { .. } => "minLength",
            ValidationErrorKind::Not { .. } => "not",
            ValidationErrorKind::OneOfMultipleValid | ValidationErrorKind::OneOfNotValid => "oneOf",
            ValidationErrorKind::Pattern { .. } => "pattern",
            ValidationErrorKind::Required { .. } => "required",
            ValidationErrorKind::Type { .. } => "type",
            ValidationErrorKind::UnevaluatedItems { .. } => "unevaluatedItems",
            ValidationErrorKind::UnevaluatedProperties { .. } => "unevaluatedProperties",
            ValidationErrorKind::UniqueItems => "uniqueItems",
        }
    }
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorKind,
        location: &LazyLocation<'_>,
        instance: &Value,
    ) -> ValidationError {
        ValidationError {
            instance: instance.clone(),
            kind,
            instance_path: location.into(),
        }
    }

    /// The part of the instance that failed.
    #[must_use]
    pub fn instance(&self) -> &Value {
        &self.instance
    }

    #[must_use]
    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// JSON pointer to the failing part of the instance.
    #[must_use]
    pub fn instance_path(&self) -> &Location {
        &self.instance_path
    }

    #[must_use]
    pub fn keyword(&self) -> &'static str {
        self.kind.keyword()
    }

    #[must_use]
    pub fn into_parts(self) -> (Value, ValidationErrorKind, Location) {
        (self.instance, self.kind, self.instance_path)
    }
}

impl std::error::Error for ValidationError {}

/// `'a', 'b' were` / `'a' was`.
fn extras_message(f: &mut fmt::Formatter<'_>, extras: &[String]) -> fmt::Result {
    let mut iter = extras.iter();
    if let Some(first) = iter.next() {
        write!(f, "'{first}'")?;
        for extra in iter {
            write!(f, ", '{extra}'")?;
        }
    }
    if extras.len() == 1 {
        f.write_str(" was")
    } else {
        f.write_str(" were")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let instance = &self.instance;
        match &self.kind {
            ValidationErrorKind::AdditionalProperties { unexpected } => {
                f.write_str("Additional properties are not allowed (")?;
                extras_message(f, unexpected)?;
                f.write_str(" unexpected)")
            }
            ValidationErrorKind::AnyOf => write!(
                f,
                "{instance} is not valid under any of the schemas listed in the 'anyOf' keyword"
            ),
            ValidationErrorKind::Constant { expected_value } => {
                write!(f, "{expected_value} was expected")
            }
            ValidationErrorKind::Contains { min_contains } => {
                if *min_contains == 1 {
                    write!(f, "None of {instance} are valid under the given schema")
                } else {
                    write!(
                        f,
                        "{instance} does not contain at least {min_contains} matching items"
                    )
                }
            }
            ValidationErrorKind::MaxContains { limit } => {
                write!(f, "{instance} contains more than {limit} matching items")
            }
            ValidationErrorKind::DependentRequired {
                property,
                dependency,
            } => write!(f, "\"{dependency}\" is a dependency of \"{property}\""),
            ValidationErrorKind::Enum { options } => write!(f, "{instance} is not one of {options}"),
            ValidationErrorKind::ExclusiveMaximum { limit } => write!(
                f,
                "{instance} is greater than or equal to the maximum of {limit}"
            ),
            ValidationErrorKind::ExclusiveMinimum { limit } => write!(
                f,
                "{instance} is less than or equal to the minimum of {limit}"
            ),
            ValidationErrorKind::FalseSchema => write!(f, "False schema does not allow {instance}"),
            ValidationErrorKind::MaxItems { limit } => write!(
                f,
                "{instance} has more than {limit} item{}",
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::Maximum { limit } => {
                write!(f, "{instance} is greater than the maximum of {limit}")
            }
            ValidationErrorKind::MaxLength { limit } => write!(
                f,
                "{instance} is longer than {limit} character{}",
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::MinItems { limit } => write!(
                f,
                "{instance} has less than {limit} item{}",
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::Minimum { limit } => {
                write!(f, "{instance} is less than the minimum of {limit}")
            }
            ValidationErrorKind::MinLength { limit } => write!(
                f,
                "{instance} is shorter than {limit} character{}",
                if *limit == 1 { "" } else { "s" }
            ),
            ValidationErrorKind::Not { schema } => {
                write!(f, "{instance} should not be valid under {schema}")
            }
            ValidationErrorKind::OneOfMultipleValid => write!(
                f,
                "{instance} is valid under more than one of the schemas listed in the 'oneOf' keyword"
            ),
            ValidationErrorKind::OneOfNotValid => write!(
                f,
                "{instance} is not valid under any of the schemas listed in the 'oneOf' keyword"
            ),
            ValidationErrorKind::Pattern { pattern } => {
                write!(f, "{instance} does not match \"{pattern}\"")
            }
            ValidationErrorKind::Required { property } => {
                write!(f, "\"{property}\" is a required property")
            }
            ValidationErrorKind::Type { expected } => match expected {
                Value::String(name) => write!(f, "{instance} is not of type \"{name}\""),
                other => write!(f, "{instance} is not of types {other}"),
            },
            ValidationErrorKind::UnevaluatedItems { unexpected } => {
                f.write_str("Unevaluated items are not allowed (")?;
                extras_message(f, unexpected)?;
                f.write_str(" unexpected)")
            }
            ValidationErrorKind::UnevaluatedProperties { unexpected } => {
                f.write_str("Unevaluated properties are not allowed (")?;
                extras_message(f, unexpected)?;
                f.write_str(" unexpected)")
            }
            ValidationErrorKind::UniqueItems => write!(f, "{instance} has non-unique elements"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ValidationError, ValidationErrorKind};
    use crate::paths::LazyLocation;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(
        ValidationErrorKind::AdditionalProperties { unexpected: vec!["a".into()] },
        "Additional properties are not allowed ('a' was unexpected)";
        "single additional property"
    )]
    #[test_case(
        ValidationErrorKind::UnevaluatedProperties { unexpected: vec!["a".into(), "b".into()] },
        "Unevaluated properties are not allowed ('a', 'b' were unexpected)";
        "several unevaluated properties"
    )]
    #[test_case(
        ValidationErrorKind::Type { expected: json!("string") },
        "{\"x\":1} is not of type \"string\"";
        "single type"
    )]
    #[test_case(
        ValidationErrorKind::MinItems { limit: 1 },
        "{\"x\":1} has less than 1 item";
        "singular limit"
    )]
    #[test_case(
        ValidationErrorKind::Required { property: "y".into() },
        "\"y\" is a required property";
        "required"
    )]
    fn display(kind: ValidationErrorKind, expected: &str) {
        let instance = json!({"x": 1});
        let error = ValidationError::new(kind, &LazyLocation::new(), &instance);
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn keyword_and_path() {
        let root = LazyLocation::new();
        let items = root.push("items");
        let location = items.push(0);
        let error = ValidationError::new(ValidationErrorKind::UniqueItems, &location, &json!([]));
        assert_eq!(error.keyword(), "uniqueItems");
        assert_eq!(error.instance_path().as_str(), "/items/0");
    }

    #[test]
    fn reference_errors_convert() {
        let registry = referencing::Registry::new();
        let error: Error = registry
            .resolver("http://example.com/")
            .lookup("missing.json")
            .expect_err("Should fail")
            .into();
        assert!(matches!(error, Error::Reference(_)));
    }
}
