use serde_json::Value;

use crate::validator_for;

#[track_caller]
pub(crate) fn is_valid(schema: &Value, instance: &Value) {
    let validator = validator_for(schema);
    let errors = validator
        .iter_errors(instance)
        .expect("Evaluation should not fail");
    assert!(
        errors.is_empty(),
        "{instance} should be valid against {schema}, got: {:?}",
        errors.iter().map(ToString::to_string).collect::<Vec<_>>()
    );
}

#[track_caller]
pub(crate) fn is_not_valid(schema: &Value, instance: &Value) {
    let validator = validator_for(schema);
    assert!(
        !validator
            .is_valid(instance)
            .expect("Evaluation should not fail"),
        "{instance} should not be valid against {schema}"
    );
}

/// Compare error messages, ignoring their order.
#[track_caller]
pub(crate) fn expect_errors(schema: &Value, instance: &Value, expected: &[&str]) {
    let validator = validator_for(schema);
    let mut messages: Vec<String> = validator
        .iter_errors(instance)
        .expect("Evaluation should not fail")
        .iter()
        .map(ToString::to_string)
        .collect();
    messages.sort();
    let mut expected: Vec<&str> = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(messages, expected);
}

/// Compare instance paths of errors, ignoring their order.
#[track_caller]
pub(crate) fn assert_instance_paths(schema: &Value, instance: &Value, expected: &[&str]) {
    let validator = validator_for(schema);
    let mut paths: Vec<String> = validator
        .iter_errors(instance)
        .expect("Evaluation should not fail")
        .iter()
        .map(|error| error.instance_path().to_string())
        .collect();
    paths.sort();
    let mut expected: Vec<&str> = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(paths, expected);
}
