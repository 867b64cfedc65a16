use std::sync::Arc;

use referencing::{Registry, Resolver};
use serde_json::Value;

use crate::{
    evaluated, keywords,
    options::{PatternOptions, ValidationOptions},
    paths::LazyLocation,
    regex::{Pattern, PatternCache},
    Error, ValidationError,
};

/// What evaluated-set tracking needs from a validator.
///
/// The trackers in this crate never interpret assertion keywords on their
/// own: whenever they have to know whether an instance satisfies a
/// subschema, they ask the validator through this trait. The resolver is
/// passed explicitly, so scopes entered by one call never leak into another.
pub trait Validate {
    /// Whether `value` is of the JSON Schema type `type_name`.
    fn is_type(&self, value: &Value, type_name: &str) -> bool;

    /// All validation errors of `instance` against `schema`.
    ///
    /// # Errors
    ///
    /// Fails if a reference can not be resolved or a pattern can not be compiled.
    fn descend(
        &self,
        instance: &Value,
        schema: &Value,
        resolver: &Resolver<'_>,
    ) -> Result<Vec<ValidationError>, Error>;

    /// Whether `instance` is valid against `schema`.
    ///
    /// # Errors
    ///
    /// Same as [`Validate::descend`].
    fn is_valid(&self, instance: &Value, schema: &Value, resolver: &Resolver<'_>) -> Result<bool, Error> {
        Ok(self.descend(instance, schema, resolver)?.is_empty())
    }

    /// Whether `pattern` matches anywhere in `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] if `pattern` is not a valid regular expression.
    fn is_match(&self, pattern: &str, text: &str) -> Result<bool, Error> {
        Pattern::new(pattern, PatternOptions::default())?.is_match(text)
    }
}

/// A Draft 2020-12 validator for one root schema.
///
/// ```rust
/// use serde_json::json;
///
/// # fn main() -> Result<(), jsonschema_annotations::Error> {
/// let schema = json!({
///     "prefixItems": [{"type": "integer"}],
///     "unevaluatedItems": false
/// });
/// let validator = jsonschema_annotations::validator_for(&schema);
/// assert!(validator.is_valid(&json!([1]))?);
/// assert!(!validator.is_valid(&json!([1, 2]))?);
/// assert_eq!(validator.evaluated_items(&json!([1, 2]))?, vec![0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Validator {
    registry: Registry,
    base_uri: String,
    root: Arc<Value>,
    patterns: PatternCache,
}

impl Validator {
    /// Create default [`ValidationOptions`] for configuring a validator.
    #[must_use]
    pub fn options() -> ValidationOptions {
        ValidationOptions::default()
    }

    pub(crate) fn new(
        registry: Registry,
        base_uri: String,
        root: Arc<Value>,
        patterns: PatternCache,
    ) -> Validator {
        Validator {
            registry,
            base_uri,
            root,
            patterns,
        }
    }

    /// The root schema.
    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Documents available to `$ref`.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// A resolver scoped to the root schema.
    #[must_use]
    pub fn resolver(&self) -> Resolver<'_> {
        self.registry.resolver(&self.base_uri)
    }

    /// Whether `instance` is valid against the root schema.
    ///
    /// # Errors
    ///
    /// Fails if a reference can not be resolved or a pattern can not be compiled.
    pub fn is_valid(&self, instance: &Value) -> Result<bool, Error> {
        Ok(self.iter_errors(instance)?.is_empty())
    }

    /// All validation errors of `instance` against the root schema.
    ///
    /// # Errors
    ///
    /// Same as [`Validator::is_valid`].
    pub fn iter_errors(&self, instance: &Value) -> Result<Vec<ValidationError>, Error> {
        let mut errors = Vec::new();
        keywords::descend(
            self,
            instance,
            &self.root,
            &self.resolver(),
            &LazyLocation::new(),
            &mut errors,
        )?;
        Ok(errors)
    }

    /// Indices of `instance` evaluated by the root schema.
    ///
    /// # Errors
    ///
    /// Same as [`Validator::is_valid`].
    pub fn evaluated_items(&self, instance: &Value) -> Result<Vec<usize>, Error> {
        evaluated::evaluated_items(self, instance, &self.root, &self.resolver())
    }

    /// Properties of `instance` evaluated by the root schema.
    ///
    /// # Errors
    ///
    /// Same as [`Validator::is_valid`].
    pub fn evaluated_properties<'i>(&self, instance: &'i Value) -> Result<Vec<&'i str>, Error> {
        evaluated::evaluated_properties(self, instance, &self.root, &self.resolver())
    }
}

impl Validate for Validator {
    fn is_type(&self, value: &Value, type_name: &str) -> bool {
        keywords::helpers::is_type(value, type_name)
    }

    fn descend(
        &self,
        instance: &Value,
        schema: &Value,
        resolver: &Resolver<'_>,
    ) -> Result<Vec<ValidationError>, Error> {
        let mut errors = Vec::new();
        keywords::descend(
            self,
            instance,
            schema,
            resolver,
            &LazyLocation::new(),
            &mut errors,
        )?;
        Ok(errors)
    }

    fn is_match(&self, pattern: &str, text: &str) -> Result<bool, Error> {
        self.patterns.is_match(pattern, text)
    }
}
