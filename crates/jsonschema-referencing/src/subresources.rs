use serde_json::Value;

/// A subschema together with the escaped JSON pointer segments leading to it.
pub(crate) struct Subresource<'a> {
    pub(crate) path: String,
    pub(crate) contents: &'a Value,
}

/// Collect the direct subschemas of `contents`.
///
/// Only keywords that hold subschemas are followed, so `$id` and `$anchor`
/// values inside `const`, `enum` or `examples` are never picked up.
pub(crate) fn subresources_of(contents: &Value) -> Vec<Subresource<'_>> {
    let mut found = Vec::new();
    let Some(schema) = contents.as_object() else {
        return found;
    };
    for (key, value) in schema {
        match key.as_str() {
            // For these keys, yield the value once.
            "additionalItems"
            | "additionalProperties"
            | "contains"
            | "contentSchema"
            | "else"
            | "if"
            | "not"
            | "propertyNames"
            | "then"
            | "unevaluatedItems"
            | "unevaluatedProperties" => found.push(Subresource {
                path: format!("/{key}"),
                contents: value,
            }),
            // For these keys, if the value is an array, iterate over its items.
            "allOf" | "anyOf" | "oneOf" | "prefixItems" => {
                if let Some(items) = value.as_array() {
                    for (idx, item) in items.iter().enumerate() {
                        found.push(Subresource {
                            path: format!("/{key}/{idx}"),
                            contents: item,
                        });
                    }
                }
            }
            // For these keys, if the value is an object, iterate over its values.
            "$defs" | "definitions" | "dependentSchemas" | "patternProperties" | "properties" => {
                if let Some(object) = value.as_object() {
                    for (name, subschema) in object {
                        found.push(Subresource {
                            path: format!("/{key}/{}", escape_segment(name)),
                            contents: subschema,
                        });
                    }
                }
            }
            // Older drafts allow an array of schemas under `items`.
            "items" => match value {
                Value::Array(items) => {
                    for (idx, item) in items.iter().enumerate() {
                        found.push(Subresource {
                            path: format!("/items/{idx}"),
                            contents: item,
                        });
                    }
                }
                _ => found.push(Subresource {
                    path: "/items".to_string(),
                    contents: value,
                }),
            },
            _ => {}
        }
    }
    found
}

fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::subresources_of;
    use serde_json::json;

    #[test]
    fn follows_only_schema_keywords() {
        let schema = json!({
            "properties": {"a/b": {"type": "string"}},
            "allOf": [{"minimum": 1}],
            "not": false,
            "const": {"$id": "http://example.com/ignored"},
        });
        let paths: Vec<_> = subresources_of(&schema)
            .into_iter()
            .map(|sub| sub.path)
            .collect();
        assert_eq!(paths, vec!["/properties/a~1b", "/allOf/0", "/not"]);
    }

    #[test]
    fn boolean_schema_has_none() {
        assert!(subresources_of(&json!(true)).is_empty());
    }
}
