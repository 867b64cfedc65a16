use referencing::Resolver;
use serde_json::Value;

use crate::{Error, Validate};

/// Collect the indices of `instance` evaluated by `schema`.
///
/// Returns an empty set for a non-array instance or a boolean schema. The
/// caller's `resolver` is never modified; references are followed with the
/// resolvers they produce.
///
/// # Errors
///
/// Fails if a `$ref` can not be resolved (including reference cycles) or if
/// the validator fails.
pub fn evaluated_items<V>(
    validator: &V,
    instance: &Value,
    schema: &Value,
    resolver: &Resolver<'_>,
) -> Result<Vec<usize>, Error>
where
    V: Validate + ?Sized,
{
    let mut evaluated = Vec::new();
    collect(validator, instance, schema, resolver, &mut evaluated)?;
    tracing::trace!(evaluated = evaluated.len(), "Collected evaluated items");
    Ok(evaluated)
}

fn collect<V>(
    validator: &V,
    instance: &Value,
    schema: &Value,
    resolver: &Resolver<'_>,
    evaluated: &mut Vec<usize>,
) -> Result<(), Error>
where
    V: Validate + ?Sized,
{
    let Value::Array(items) = instance else {
        return Ok(());
    };
    if !validator.is_type(schema, "object") {
        return Ok(());
    }
    let Value::Object(keywords) = schema else {
        return Ok(());
    };
    let resolver = resolver.in_subresource(schema);

    if keywords.contains_key("items") {
        evaluated.extend(0..items.len());
        return Ok(());
    }

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

    if let Some(prefix_items) = keywords.get("prefixItems") {
        let mut prefix = serde_json::Map::with_capacity(1);
        prefix.insert("prefixItems".to_string(), prefix_items.clone());
        if validator.is_valid(instance, &Value::Object(prefix), &resolver)? {
            evaluated.extend(0..prefix_items.as_array().map_or(0, Vec::len));
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

    for keyword in ["contains", "unevaluatedItems"] {
        if let Some(subschema) = keywords.get(keyword) {
            let child = resolver.for_child_instance();
            for (idx, item) in items.iter().enumerate() {
                if validator.is_valid(item, subschema, &child)? {
                    evaluated.push(idx);
                }
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
    Ok(())
}
