use std::cell::RefCell;

use jsonschema_annotations::{
    evaluated_items, evaluated_properties, referencing::Resolver, validator_for, Error,
    ValidationError, Validate, Validator,
};
use serde_json::{json, Value};

/// Delegates to a real validator and records every scope it is asked to validate in.
struct Recording {
    inner: Validator,
    scopes: RefCell<Vec<String>>,
}

impl Recording {
    fn new(schema: &Value) -> Recording {
        Recording {
            inner: validator_for(schema),
            scopes: RefCell::new(Vec::new()),
        }
    }
}

impl Validate for Recording {
    fn is_type(&self, value: &Value, type_name: &str) -> bool {
        self.inner.is_type(value, type_name)
    }

    fn descend(
        &self,
        instance: &Value,
        schema: &Value,
        resolver: &Resolver<'_>,
    ) -> Result<Vec<ValidationError>, Error> {
        self.scopes
            .borrow_mut()
            .push(resolver.resolution_scope().to_string());
        self.inner.descend(instance, schema, resolver)
    }
}

fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values
}

#[test]
fn booleans_and_numbers_stay_distinct() {
    let validator = validator_for(&json!({"uniqueItems": true}));
    assert!(validator.is_valid(&json!([1, true])).expect("Evaluation does not fail"));
    assert!(validator.is_valid(&json!([0, false])).expect("Evaluation does not fail"));
    assert!(validator.is_valid(&json!([[1], [true]])).expect("Evaluation does not fail"));
    assert!(!validator.is_valid(&json!([1, 1.0])).expect("Evaluation does not fail"));
}

#[test]
fn nested_equality_ignores_key_order() {
    let validator = validator_for(&json!({"uniqueItems": true}));
    let instance = json!([
        {"a": [1, {"b": 2.0, "c": null}]},
        {"a": [1, {"c": null, "b": 2}]}
    ]);
    assert!(!validator.is_valid(&instance).expect("Evaluation does not fail"));
}

#[test]
fn items_marks_every_element() {
    let schema = json!({"items": {"type": "string"}, "prefixItems": [{"const": 0}]});
    let validator = validator_for(&schema);
    let instance = json!([1, 2, 3, 4]);
    let evaluated = evaluated_items(&validator, &instance, &schema, &validator.resolver())
        .expect("Evaluation does not fail");
    assert_eq!(sorted(evaluated), vec![0, 1, 2, 3]);
}

#[test]
fn all_of_is_a_union() {
    let schema = json!({
        "allOf": [
            {"properties": {"a": true}},
            {"properties": {"b": true}},
            {"patternProperties": {"^c": true}}
        ]
    });
    let validator = validator_for(&schema);
    let instance = json!({"a": 1, "b": 2, "cc": 3, "d": 4});
    assert_eq!(
        sorted(validator.evaluated_properties(&instance).expect("Evaluation does not fail")),
        vec!["a", "b", "cc"]
    );
}

#[test]
fn if_then_contributes_both_branches() {
    let schema = json!({
        "if": {"properties": {"kind": {"const": "user"}}, "required": ["kind"]},
        "then": {"properties": {"name": {"type": "string"}}},
        "else": {"properties": {"id": {"type": "integer"}}}
    });
    let validator = validator_for(&schema);
    let user = json!({"kind": "user", "name": "x", "id": 1});
    assert_eq!(
        sorted(validator.evaluated_properties(&user).expect("Evaluation does not fail")),
        vec!["kind", "name"]
    );
    let other = json!({"kind": "group", "name": "x", "id": 1});
    assert_eq!(
        validator.evaluated_properties(&other).expect("Evaluation does not fail"),
        vec!["id"]
    );
}

#[test]
fn resolver_is_unchanged_after_an_error() {
    let schema = json!({
        "$id": "http://example.com/root.json",
        "allOf": [{"$id": "nested/", "$ref": "missing.json"}]
    });
    let validator = validator_for(&schema);
    let resolver = validator.resolver();
    let before = resolver.clone();

    let object = json!({"a": 1});
    let result = evaluated_properties(&validator, &object, &schema, &resolver);
    assert!(matches!(result, Err(Error::Reference(_))));
    assert_eq!(resolver, before);

    let array = json!([1]);
    let result = evaluated_items(&validator, &array, &schema, &resolver);
    assert!(matches!(result, Err(Error::Reference(_))));
    assert_eq!(resolver, before);
}

#[test]
fn references_are_followed_in_their_own_scope() {
    let schema = json!({
        "$id": "http://example.com/root.json",
        "$ref": "other.json",
        "$defs": {
            "other": {
                "$id": "other.json",
                "allOf": [{"properties": {"a": {"type": "integer"}}}]
            }
        }
    });
    let recording = Recording::new(&schema);
    let resolver = recording.inner.resolver();
    let instance = json!({"a": 1, "b": 2});
    let evaluated = evaluated_properties(&recording, &instance, &schema, &resolver)
        .expect("Evaluation does not fail");
    assert_eq!(evaluated, vec!["a"]);
    let scopes = recording.scopes.borrow();
    assert!(!scopes.is_empty());
    assert!(scopes
        .iter()
        .all(|scope| scope == "http://example.com/other.json"));
    assert_eq!(resolver.resolution_scope(), "http://example.com/root.json");
}

#[test]
fn self_reference_on_the_same_instance_is_a_cycle() {
    let schema = json!({"$ref": "#", "properties": {"a": true}});
    let validator = validator_for(&schema);
    let instance = json!({"a": 1});
    let resolver = validator.resolver();
    let result = evaluated_properties(&validator, &instance, &schema, &resolver);
    assert!(matches!(
        result,
        Err(Error::Reference(
            jsonschema_annotations::referencing::Error::CyclicReference { .. }
        ))
    ));
}

#[test]
fn self_reference_on_children_is_recursion() {
    let schema = json!({
        "type": "object",
        "properties": {"child": {"$ref": "#"}},
        "unevaluatedProperties": false
    });
    let validator = validator_for(&schema);
    let deep = json!({"child": {"child": {"child": {}}}});
    assert!(validator.is_valid(&deep).expect("Evaluation does not fail"));
    let errors = validator
        .iter_errors(&json!({"child": {"child": {"extra": 1}}}))
        .expect("Evaluation does not fail");
    assert!(!errors.is_empty());
}

#[test]
fn mappings_are_read_per_name() {
    let instance = json!({"a": 1, "b": "x"});
    for (schema, expected) in [
        (json!({"properties": {"a": {"type": "integer"}, "b": {"type": "integer"}}}), vec!["a"]),
        (json!({"additionalProperties": {"type": "integer"}}), vec![]),
        (json!({"additionalProperties": {"b": {"type": "string"}}}), vec!["b"]),
        (json!({"unevaluatedProperties": {"a": {"type": "string"}}}), vec![]),
        (json!({"unevaluatedProperties": {"a": true, "c": true}}), vec!["a"]),
    ] {
        let validator = validator_for(&schema);
        let resolver = validator.resolver();
        let evaluated = evaluated_properties(&validator, &instance, &schema, &resolver)
            .expect("Evaluation does not fail");
        assert_eq!(evaluated, expected, "{schema}");
    }
}
