//! # jsonschema-annotations
//!
//! Building blocks a JSON Schema validator needs for the keywords that depend
//! on what *other* keywords did, or on JSON-aware identity:
//!
//! - [`evaluated_items`] and [`evaluated_properties`] compute the parts of an
//!   instance evaluated by a schema, the basis of `unevaluatedItems` and
//!   `unevaluatedProperties`;
//! - [`equal`] and [`is_unique`] implement JSON Schema equality, where `1 == 1.0`
//!   but `true != 1`, for `const`, `enum` and `uniqueItems`;
//! - the [`referencing`] crate provides the registry and resolver used to follow `$ref`.
//!
//! The trackers are generic over the [`Validate`] trait, so any validator can
//! plug them in. This crate also ships a basic Draft 2020-12 [`Validator`]
//! implementing it:
//!
//! ```rust
//! use serde_json::json;
//!
//! # fn main() -> Result<(), jsonschema_annotations::Error> {
//! let schema = json!({
//!     "allOf": [
//!         {"properties": {"name": {"type": "string"}}},
//!         {"properties": {"age": {"type": "integer"}}}
//!     ],
//!     "unevaluatedProperties": false
//! });
//! let validator = jsonschema_annotations::validator_for(&schema);
//!
//! assert!(validator.is_valid(&json!({"name": "Alice", "age": 42}))?);
//! assert!(!validator.is_valid(&json!({"name": "Alice", "extra": true}))?);
//!
//! let errors = validator.iter_errors(&json!({"name": "Alice", "extra": true}))?;
//! assert_eq!(
//!     errors[0].to_string(),
//!     "Unevaluated properties are not allowed ('extra' was unexpected)"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use jsonschema_annotations::PatternOptions;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), jsonschema_annotations::Error> {
//! let validator = jsonschema_annotations::options()
//!     .with_base_uri("https://example.com/root.json")
//!     .with_resource("https://example.com/name.json", json!({"pattern": "^[A-Z]"}))
//!     .with_pattern_options(PatternOptions::regex().size_limit(1 << 20))
//!     .build(&json!({"properties": {"name": {"$ref": "name.json"}}}));
//!
//! assert!(validator.is_valid(&json!({"name": "Alice"}))?);
//! assert!(!validator.is_valid(&json!({"name": "alice"}))?);
//! # Ok(())
//! # }
//! ```
pub(crate) mod error;
pub(crate) mod evaluated;
pub(crate) mod ext;
pub(crate) mod keywords;
pub(crate) mod options;
pub(crate) mod paths;
pub(crate) mod regex;
#[cfg(test)]
pub(crate) mod tests_util;
pub(crate) mod validator;

pub use error::{Error, ValidationError, ValidationErrorKind};
pub use evaluated::{additional_properties, evaluated_items, evaluated_properties};
pub use ext::cmp::{equal, equal_arrays, equal_numbers, equal_objects, unbool, Unbool};
pub use keywords::unique_items::{classify, is_unique, Strategy};
pub use options::{PatternOptions, ValidationOptions};
pub use paths::Location;
pub use referencing;
pub use validator::{Validate, Validator};

use serde_json::Value;

/// Create a validator for `schema` with default options.
///
/// ```rust
/// use serde_json::json;
///
/// let validator = jsonschema_annotations::validator_for(&json!({"uniqueItems": true}));
/// assert!(!validator.is_valid(&json!([1, 1.0])).expect("No references"));
/// ```
#[must_use]
pub fn validator_for(schema: &Value) -> Validator {
    options().build(schema)
}

/// Create default [`ValidationOptions`].
#[must_use]
pub fn options() -> ValidationOptions {
    Validator::options()
}
