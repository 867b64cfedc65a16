use referencing::Resolver;
use serde_json::{Map, Value};

use crate::{Error, Validate};

/// Collect the properties of `instance` evaluated by `schema`.
///
/// Returns an empty set for a non-object instance or a boolean schema. The
/// caller's `resolver` is never modified.
///
/// # Errors
///
/// Fails if a `$ref` can not be resolved, if a `patternProperties` pattern
/// is not a valid regular expression, or if the validator fails.
pub fn evaluated_properties<'i, V>(
    validator: &V,
    instance: &'i Value,
    schema: &Value,
    resolver: &Resolver<'_>,
) -> Result<Vec<&'i str>, Error>
where
    V: Validate + ?Sized,
{
    let mut evaluated = Vec::new();
    collect(validator, instance, schema, resolver, &mut evaluated)?;
    tracing::trace!(evaluated = evaluated.len(), "Collected evaluated properties");
    Ok(evaluated)
}

/// Properties of `instance` not covered by `properties` or `patternProperties` of `schema`.
///
/// # Errors
///
/// Returns [`Error::Pattern`] if a `patternProperties` pattern is not a valid regular expression.
pub fn additional_properties<'i, V>(
    validator: &V,
    instance: &'i Map<String, Value>,
    schema: &Map<String, Value>,
) -> Result<Vec<&'i str>, Error>
where
    V: Validate + ?Sized,
{
    let properties = schema.get("properties").and_then(Value::as_object);
    let patterns = schema.get("patternProperties").and_then(Value::as_object);
    let mut extras = Vec::new();
    'outer: for name in instance.keys() {
        if properties.is_some_and(|properties| properties.contains_key(name)) {
            continue;
        }
        if let Some(patterns) = patterns {
            for pattern in patterns.keys() {
                if validator.is_match(pattern, name)? {
                    continue 'outer;
                }
            }
        }
        extras.push(name.as_str());
    }
    Ok(extras)
}

fn singleton(name: &str, value: &Value) -> Value {
    let mut object = Map::with_capacity(1);
    object.insert(name.to_string(), value.clone());
    Value::Object(object)
}

fn collect<'i, V>(
    validator: &V,
    instance: &'i Value,
    schema: &Value,
    resolver: &Resolver<'_>,
    evaluated: &mut Vec<&'i str>,
) -> Result<(), Error>
where
    V: Validate + ?Sized,
{
    let Value::Object(object) = instance else {
        return Ok(());
    };
    if !validator.is_type(schema, "object") {
        return Ok(());
    }
    let Value::Object(keywords) = schema else {
        return Ok(());
    };
    let resolver = resolver.in_subresource(schema);
    let child = resolver.for_child_instance();

    if let Some(reference) = keywords.get("$ref").and_then(Value::as_str) {
        let resolved = resolver.lookup(reference)?;
        collect(
            validator,
            instance,
            resolved.contents(),
            resolved.resolver(),
            evaluated,
        )?;
    }

    for keyword in ["properties", "additionalProperties", "unevaluatedProperties"] {
        let Some(value) = keywords.get(keyword) else {
            continue;
        };
        if validator.is_type(value, "boolean") {
            for (name, property) in object {
                if validator.is_valid(&singleton(name, property), value, &child)? {
                    evaluated.push(name);
                }
            }
        } else if let Value::Object(subschemas) = value {
            // A mapping is read as per-name subschemas for all three keywords
            for (name, subschema) in subschemas {
                if let Some((name, property)) = object.get_key_value(name) {
                    if validator.is_valid(property, subschema, &child)? {
                        evaluated.push(name.as_str());
                    }
                }
            }
        }
    }

    if let Some(patterns) = keywords.get("patternProperties").and_then(Value::as_object) {
        let mut pattern_schema = Map::with_capacity(1);
        pattern_schema.insert(
            "patternProperties".to_string(),
            Value::Object(patterns.clone()),
        );
        let pattern_schema = Value::Object(pattern_schema);
        for (name, property) in object {
            for pattern in patterns.keys() {
                if validator.is_match(pattern, name)? {
                    // The check covers every matching pattern at once
                    if validator.is_valid(&singleton(name, property), &pattern_schema, &resolver)? {
                        evaluated.push(name);
                    }
                    break;
                }
            }
        }
    }

    if let Some(dependencies) = keywords.get("dependentSchemas").and_then(Value::as_object) {
        for (property, subschema) in dependencies {
            if !object.contains_key(property) {
                continue;
            }
            if validator.descend(instance, subschema, &resolver)?.is_empty() {
                collect(validator, instance, subschema, &resolver, evaluated)?;
            }
        }
    }

    for keyword in ["allOf", "oneOf", "anyOf"] {
        if let Some(subschemas) = keywords.get(keyword).and_then(Value::as_array) {
            for subschema in subschemas {
                if validator.descend(instance, subschema, &resolver)?.is_empty() {
                    collect(validator, instance, subschema, &resolver, evaluated)?;
                }
            }
        }
    }

    if let Some(condition) = keywords.get("if") {
        if validator.is_valid(instance, condition, &resolver)? {
            collect(validator, instance, condition, &resolver, evaluated)?;
            if let Some(then) = keywords.get("then") {
                collect(validator, instance, then, &resolver, evaluated)?;
            }
        } else if let Some(otherwise) = keywords.get("else") {
            collect(validator, instance, otherwise, &resolver, evaluated)?;
        }
    }
    Ok(())
}
