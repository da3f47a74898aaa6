// tests/parser_tests.rs

use appraise::ast::{Argument, Statement};
use appraise::parser::{ParseError, parse, parse_lenient};

// ============================================================================
// Single statements
// ============================================================================

#[test]
fn test_no_arguments() {
    let query = parse("summary()").unwrap();
    assert_eq!(query.statements, vec![Statement::new("summary")]);
}

#[test]
fn test_positional_then_keyed() {
    let query = parse("list(functions, module=pricing)").unwrap();
    let statement = &query.statements[0];

    assert_eq!(statement.operation, "list");
    assert_eq!(
        statement.args,
        vec![
            Argument::positional("functions"),
            Argument::keyed("module", "pricing"),
        ]
    );
    assert!(statement.fields.is_empty());
}

#[test]
fn test_string_values() {
    let query = parse(r#"calc("pricing.bvr", input="data/in.json")"#).unwrap();
    let statement = &query.statements[0];

    assert_eq!(statement.first_positional(), Some("pricing.bvr"));
    assert_eq!(statement.named("input"), Some("data/in.json"));
}

#[test]
fn test_field_block() {
    let query = parse(r#"calc("pricing.bvr") { value interpretation }"#).unwrap();
    assert_eq!(query.statements[0].fields, vec!["value", "interpretation"]);
}

#[test]
fn test_argument_order_is_preserved() {
    let query = parse("op(c=3, first, a=1, b=2)").unwrap();
    let values: Vec<&str> = query.statements[0]
        .args
        .iter()
        .map(|a| a.value.as_str())
        .collect();
    assert_eq!(values, vec!["3", "first", "1", "2"]);
    assert_eq!(query.statements[0].first_positional(), Some("first"));
}

#[test]
fn test_last_named_argument_wins() {
    let query = parse(r#"calc("pricing.bvr", input="a.json", input="b.json")"#).unwrap();
    assert_eq!(query.statements[0].named("input"), Some("b.json"));
}

// ============================================================================
// Batches
// ============================================================================

#[test]
fn test_batch_order() {
    let query = parse("list(modules); summary(); schema()").unwrap();
    let operations: Vec<&str> = query
        .statements
        .iter()
        .map(|s| s.operation.as_str())
        .collect();
    assert_eq!(operations, vec!["list", "summary", "schema"]);
    assert!(query.is_batch());
}

#[test]
fn test_semicolon_inside_string_is_not_a_boundary() {
    let query = parse(r#"calc("a.b", input="x;y.json")"#).unwrap();
    assert_eq!(query.len(), 1);
    assert_eq!(query.statements[0].named("input"), Some("x;y.json"));
}

#[test]
fn test_semicolon_inside_field_block_is_rejected() {
    let err = parse("summary() { modules; per_module }").unwrap_err();
    assert!(matches!(err, ParseError::Unexpected { .. }));
}

#[test]
fn test_empty_statements_are_skipped() {
    let query = parse(";summary();; list(modules);").unwrap();
    assert_eq!(query.len(), 2);
}

#[test]
fn test_empty_query() {
    assert_eq!(parse("").unwrap_err(), ParseError::EmptyQuery);
    assert_eq!(parse(" ; ;").unwrap_err(), ParseError::EmptyQuery);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_missing_parentheses() {
    let err = parse("summary").unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected '(', found end of input at line 1, column 8"
    );
}

#[test]
fn test_operation_name_must_be_identifier() {
    let err = parse(r#""calc"()"#).unwrap_err();
    assert!(matches!(err, ParseError::Unexpected { ref expected, .. } if expected == "operation name"));
}

#[test]
fn test_trailing_comma() {
    let err = parse("list(modules,)").unwrap_err();
    assert!(matches!(err, ParseError::Unexpected { ref expected, .. } if expected == "argument"));
}

#[test]
fn test_keyed_value_missing() {
    let err = parse("list(functions, module=)").unwrap_err();
    assert!(matches!(err, ParseError::Unexpected { ref expected, .. } if expected == "argument value"));
}

#[test]
fn test_empty_field_block() {
    let err = parse("summary() {}").unwrap_err();
    assert!(matches!(err, ParseError::EmptyFieldList { .. }));
}

#[test]
fn test_statements_need_separator() {
    let err = parse("summary() schema()").unwrap_err();
    assert!(matches!(err, ParseError::Unexpected { ref expected, .. } if expected == "';' or end of input"));
}

#[test]
fn test_one_bad_statement_fails_the_batch() {
    assert!(parse("list(modules); summary(; schema()").is_err());
}

#[test]
fn test_strict_parser_rejects_bare_dots() {
    assert!(matches!(
        parse("calc(pricing.bvr)").unwrap_err(),
        ParseError::Lex(_)
    ));
}

// ============================================================================
// Legacy queries
// ============================================================================

#[test]
fn test_lenient_matches_hand_built_statement() {
    let query = parse_lenient("calc(pricing.bvr, input=path/to/data.json) { minimal }").unwrap();
    let expected = Statement::new("calc")
        .with_arg(Argument::positional("pricing.bvr"))
        .with_arg(Argument::keyed("input", "path/to/data.json"))
        .with_fields(["minimal"]);
    assert_eq!(query.statements, vec![expected]);
}

#[test]
fn test_lenient_batch() {
    let query = parse_lenient(
        r#"calc(pricing.bvr, input="a.json"); calc(pricing.bundle_discount, input="b.json")"#,
    )
    .unwrap();
    assert_eq!(query.statements[0].first_positional(), Some("pricing.bvr"));
    assert_eq!(
        query.statements[1].first_positional(),
        Some("pricing.bundle_discount")
    );
    assert_eq!(query.statements[1].named("input"), Some("b.json"));
}

#[test]
fn test_preset_argument_requests_fields() {
    let query = parse_lenient("calc(pricing.bvr, minimal)").unwrap();
    assert_eq!(query.statements[0].requested_fields(), vec!["minimal"]);

    let query = parse("list(full)").unwrap();
    assert!(query.statements[0].requested_fields().is_empty());
}
