pub(crate) mod additional_properties;
pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod boolean;
pub(crate) mod const_;
pub(crate) mod contains;
pub(crate) mod dependent_required;
pub(crate) mod dependent_schemas;
pub(crate) mod enum_;
pub(crate) mod helpers;
pub(crate) mod if_;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod min_items;
pub(crate) mod minmax;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod pattern_properties;
pub(crate) mod prefix_items;
pub(crate) mod properties;
pub(crate) mod property_names;
pub(crate) mod ref_;
pub(crate) mod required;
pub(crate) mod string_length;
pub(crate) mod type_;
pub(crate) mod unevaluated_items;
pub(crate) mod unevaluated_properties;
pub(crate) mod unique_items;

use referencing::Resolver;
use serde_json::{Map, Value};

use crate::{
    error::ValidationErrorKind,
    paths::LazyLocation,
    Error, ValidationError, Validator,
};

/// Everything a keyword needs to validate one instance against one schema object.
pub(crate) struct Context<'a, 'r> {
    pub(crate) validator: &'a Validator,
    /// Resolver scoped to `schema`.
    pub(crate) resolver: &'a Resolver<'r>,
    pub(crate) location: &'a LazyLocation<'a>,
    pub(crate) schema: &'a Value,
    pub(crate) keywords: &'a Map<String, Value>,
}

impl Context<'_, '_> {
    /// Validate the same instance against a subschema.
    pub(crate) fn descend(
        &self,
        instance: &Value,
        schema: &Value,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), Error> {
        descend(
            self.validator,
            instance,
            schema,
            self.resolver,
            self.location,
            errors,
        )
    }

    /// Validate the value of the `name` property against a subschema.
    pub(crate) fn descend_property(
        &self,
        instance: &Value,
        schema: &Value,
        name: &str,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), Error> {
        let location = self.location.push(name);
        descend(
            self.validator,
            instance,
            schema,
            &self.resolver.for_child_instance(),
            &location,
            errors,
        )
    }

    /// Validate the array element at `idx` against a subschema.
    pub(crate) fn descend_item(
        &self,
        instance: &Value,
        schema: &Value,
        idx: usize,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), Error> {
        let location = self.location.push(idx);
        descend(
            self.validator,
            instance,
            schema,
            &self.resolver.for_child_instance(),
            &location,
            errors,
        )
    }

    pub(crate) fn is_valid(&self, instance: &Value, schema: &Value) -> Result<bool, Error> {
        let mut errors = Vec::new();
        self.descend(instance, schema, &mut errors)?;
        Ok(errors.is_empty())
    }

    /// Like [`Context::is_valid`], for a child of the current instance.
    pub(crate) fn is_valid_child(&self, instance: &Value, schema: &Value) -> Result<bool, Error> {
        let mut errors = Vec::new();
        descend(
            self.validator,
            instance,
            schema,
            &self.resolver.for_child_instance(),
            self.location,
            &mut errors,
        )?;
        Ok(errors.is_empty())
    }

    pub(crate) fn error(&self, kind: ValidationErrorKind, instance: &Value) -> ValidationError {
        ValidationError::new(kind, self.location, instance)
    }
}

/// Validate `instance` against `schema`, collecting every failed assertion into `errors`.
///
/// Keywords are applied in the order they appear in the schema; unknown keywords are ignored.
pub(crate) fn descend(
    validator: &Validator,
    instance: &Value,
    schema: &Value,
    resolver: &Resolver<'_>,
    location: &LazyLocation<'_>,
    errors: &mut Vec<ValidationError>,
) -> Result<(), Error> {
    let keywords = match schema {
        Value::Object(keywords) => keywords,
        Value::Bool(valid) => {
            boolean::validate(*valid, instance, location, errors);
            return Ok(());
        }
        _ => return Ok(()),
    };
    let resolver = resolver.in_subresource(schema);
    let ctx = Context {
        validator,
        resolver: &resolver,
        location,
        schema,
        keywords,
    };
    for (keyword, value) in keywords {
        match keyword.as_str() {
            "$ref" => ref_::validate(&ctx, instance, value, errors)?,
            "additionalProperties" => additional_properties::validate(&ctx, instance, value, errors)?,
            "allOf" => all_of::validate(&ctx, instance, value, errors)?,
            "anyOf" => any_of::validate(&ctx, instance, value, errors)?,
            "const" => const_::validate(&ctx, instance, value, errors),
            "contains" => contains::validate(&ctx, instance, value, errors)?,
            "dependentRequired" => dependent_required::validate(&ctx, instance, value, errors),
            "dependentSchemas" => dependent_schemas::validate(&ctx, instance, value, errors)?,
            "enum" => enum_::validate(&ctx, instance, value, errors),
            "exclusiveMaximum" | "exclusiveMinimum" | "maximum" | "minimum" => {
                minmax::validate(&ctx, keyword, instance, value, errors);
            }
            "if" => if_::validate(&ctx, instance, value, errors)?,
            "items" => items::validate(&ctx, instance, value, errors)?,
            "maxItems" => max_items::validate(&ctx, instance, value, errors),
            "maxLength" | "minLength" => string_length::validate(&ctx, keyword, instance, value, errors),
            "minItems" => min_items::validate(&ctx, instance, value, errors),
            "not" => not::validate(&ctx, instance, value, errors)?,
            "oneOf" => one_of::validate(&ctx, instance, value, errors)?,
            "pattern" => pattern::validate(&ctx, instance, value, errors)?,
            "patternProperties" => pattern_properties::validate(&ctx, instance, value, errors)?,
            "prefixItems" => prefix_items::validate(&ctx, instance, value, errors)?,
            "properties" => properties::validate(&ctx, instance, value, errors)?,
            "propertyNames" => property_names::validate(&ctx, instance, value, errors)?,
            "required" => required::validate(&ctx, instance, value, errors),
            "type" => type_::validate(&ctx, instance, value, errors),
            "unevaluatedItems" => unevaluated_items::validate(&ctx, instance, value, errors)?,
            "unevaluatedProperties" => {
                unevaluated_properties::validate(&ctx, instance, value, errors)?;
            }
            "uniqueItems" => unique_items::validate(&ctx, instance, value, errors),
            _ => {}
        }
    }
    Ok(())
}
