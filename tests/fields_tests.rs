// tests/fields_tests.rs

use appraise::error::{ErrorKind, QueryError};
use appraise::fields::{FieldSelector, preset};
use appraise::projection::{project, project_value};
use serde::Serialize;
use serde_json::{Value, json};

fn selector(fields: &[&str]) -> FieldSelector {
    FieldSelector::new(fields).unwrap()
}

fn keys(value: &serde_json::Map<String, Value>) -> Vec<&str> {
    value.keys().map(String::as_str).collect()
}

// ============================================================================
// Selector resolution
// ============================================================================

#[test]
fn test_empty_request_is_default_preset() {
    let empty: [&str; 0] = [];
    let resolved = FieldSelector::new(&empty).unwrap();
    assert!(!resolved.is_wildcard());
    assert_eq!(
        resolved.fields().collect::<Vec<_>>(),
        vec!["function", "interpretation", "module", "value"]
    );
    assert_eq!(resolved, FieldSelector::default());
    assert_eq!(resolved, selector(&["default"]));
}

#[test]
fn test_full_preset_is_wildcard() {
    let full = selector(&["full"]);
    assert!(full.is_wildcard());
    assert!(full.include("anything_at_all"));

    let mixed = selector(&["value", "full"]);
    assert!(mixed.is_wildcard());
}

#[test]
fn test_presets_expand() {
    let minimal = selector(&["minimal"]);
    assert!(minimal.include("value"));
    assert!(minimal.include("interpretation"));
    assert!(!minimal.include("module"));
    assert_eq!(preset("minimal"), Some(&["value", "interpretation"][..]));
}

#[test]
fn test_explicit_fields() {
    let chosen = selector(&["bvr", "standalone_sum"]);
    assert!(chosen.include("bvr"));
    assert!(chosen.include("standalone_sum"));
    assert!(!chosen.include("value"));
}

#[test]
fn test_preset_and_field_combine() {
    let combined = selector(&["minimal", "bvr"]);
    assert_eq!(
        combined.fields().collect::<Vec<_>>(),
        vec!["bvr", "interpretation", "value"]
    );
}

#[test]
fn test_unknown_field_fails_whole_selector() {
    let err = FieldSelector::new(&["value", "bogus", "interpretation"]).unwrap_err();
    assert_eq!(err, QueryError::UnknownField("bogus".to_string()));
    assert_eq!(err.to_string(), "unknown field: bogus");
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_unknown_field_even_next_to_full() {
    assert!(FieldSelector::new(&["full", "nope"]).is_err());
}

// ============================================================================
// Projection
// ============================================================================

#[test]
fn test_projection_keeps_intersection() {
    let result = json!({
        "value": 1.5,
        "interpretation": "strong",
        "extra": true,
    });
    let projected = project_value(&selector(&["value", "module"]), result);
    assert_eq!(keys(&projected), vec!["value"]);
    assert_eq!(projected["value"], json!(1.5));
}

#[test]
fn test_wildcard_keeps_everything() {
    let result = json!({
        "bvr": 1.6,
        "not_whitelisted": [1, 2],
        "nested": { "deep": null },
    });
    let projected = project_value(&selector(&["full"]), result.clone());
    assert_eq!(Value::Object(projected), result);
}

#[test]
fn test_projection_is_literal_key_matching() {
    let result = json!({
        "bvr": 1.6,
        "standalone_sum": 80.0,
        "bundle_price": 50.0,
        "interpretation": "strong",
        "component_values": { "a": 30.0, "b": 50.0 },
    });
    let projected = project_value(&selector(&["value"]), result);
    assert!(projected.is_empty());
}

#[test]
fn test_projection_is_shallow() {
    let result = json!({ "value": { "module": "kept", "other": "also kept" } });
    let projected = project_value(&selector(&["value"]), result);
    assert_eq!(projected["value"], json!({ "module": "kept", "other": "also kept" }));
}

#[test]
fn test_non_objects_are_wrapped() {
    let projected = project_value(&selector(&["module"]), json!([1, 2, 3]));
    assert_eq!(Value::Object(projected), json!({ "value": [1, 2, 3] }));

    let projected = project_value(&selector(&["minimal"]), json!("text"));
    assert_eq!(Value::Object(projected), json!({ "value": "text" }));
}

#[derive(Serialize)]
struct Ratio {
    value: f64,
    interpretation: &'static str,
    threshold: f64,
}

#[test]
fn test_project_serializes_structs() {
    let ratio = Ratio {
        value: 0.25,
        interpretation: "effective_range",
        threshold: 0.4,
    };
    let projected = project(&selector(&["minimal"]), &ratio).unwrap();
    assert_eq!(
        Value::Object(projected),
        json!({ "value": 0.25, "interpretation": "effective_range" })
    );
}

#[test]
fn test_unserializable_result_is_internal_error() {
    let result = std::collections::HashMap::from([((1, 2), "tuple keys")]);
    let err = project(&selector(&["value"]), &result).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
}
