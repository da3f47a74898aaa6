// tests/output_tests.rs

use appraise::output::{OutputMode, format_scalar, render, render_error, to_compact};
use serde_json::{Value, json};

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn test_number_formatting() {
    let test_cases = vec![
        (json!(2.0), "2"),
        (json!(1.75), "1.7500"),
        (json!(42), "42"),
        (json!(-3), "-3"),
        (json!(0.1), "0.1000"),
        (json!(1e20), "100000000000000000000.0000"),
        (json!(u64::MAX), "18446744073709551615"),
    ];

    for (value, expected) in test_cases {
        assert_eq!(format_scalar(&value), expected, "Failed for {}", value);
    }
}

#[test]
fn test_other_scalars() {
    assert_eq!(format_scalar(&json!("verbatim: text")), "verbatim: text");
    assert_eq!(format_scalar(&json!(true)), "true");
    assert_eq!(format_scalar(&json!(false)), "false");
    assert_eq!(format_scalar(&Value::Null), "");
}

#[test]
fn test_structured_values_inline_json() {
    assert_eq!(format_scalar(&json!({ "b": 1, "a": [true] })), r#"{"a":[true],"b":1}"#);
}

// ============================================================================
// Compact documents
// ============================================================================

#[test]
fn test_compact_object() {
    let value = json!({
        "value": 1.5,
        "interpretation": "strong",
        "count": 3,
        "missing": null,
    });
    assert_eq!(
        to_compact(&value),
        "count:3\ninterpretation:strong\nmissing:\nvalue:1.5000\n"
    );
}

#[test]
fn test_compact_array_of_objects() {
    let value = json!([
        { "modules": 6 },
        { "error": { "message": "unknown field: bogus" } },
        "plain",
        7.0,
    ]);
    assert_eq!(
        to_compact(&value),
        "modules:6\n---\nerror:{\"message\":\"unknown field: bogus\"}\n---\nplain\n7\n"
    );
}

#[test]
fn test_compact_scalar_top_level() {
    assert_eq!(to_compact(&json!("text")), "\"text\"\n");
}

#[test]
fn test_compact_nested_values_stay_inline() {
    let value = json!({ "per_module": { "pricing": 6 } });
    assert_eq!(to_compact(&value), "per_module:{\"pricing\":6}\n");
}

// ============================================================================
// Modes
// ============================================================================

#[test]
fn test_pretty_json_uses_two_spaces() {
    let value = json!({ "modules": ["pricing"] });
    assert_eq!(
        render(&value, OutputMode::Json),
        "{\n  \"modules\": [\n    \"pricing\"\n  ]\n}\n"
    );
}

#[test]
fn test_render_compact_mode() {
    assert_eq!(render(&json!({ "a": true }), OutputMode::Compact), "a:true\n");
}

#[test]
fn test_render_error() {
    assert_eq!(
        render_error("unknown operation: x", OutputMode::Json),
        "{\n  \"error\": {\n    \"message\": \"unknown operation: x\"\n  }\n}\n"
    );
    assert_eq!(
        render_error("unknown operation: x", OutputMode::Compact),
        "error:unknown operation: x\n"
    );
}

#[test]
fn test_mode_parsing() {
    assert_eq!("json".parse::<OutputMode>(), Ok(OutputMode::Json));
    assert_eq!("compact".parse::<OutputMode>(), Ok(OutputMode::Compact));
    assert_eq!("LLM".parse::<OutputMode>(), Ok(OutputMode::Compact));
    assert!("yaml".parse::<OutputMode>().is_err());
    assert_eq!(OutputMode::default(), OutputMode::Json);
}
