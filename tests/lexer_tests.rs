// tests/lexer_tests.rs

use appraise::ast::Token;
use appraise::lexer::{LexError, Lexer};

// ============================================================================
// Single Character Tokens
// ============================================================================

#[test]
fn test_single_char_tokens() {
    let test_cases = vec![
        ("(", Token::LParen),
        (")", Token::RParen),
        ("{", Token::LBrace),
        ("}", Token::RBrace),
        (",", Token::Comma),
        ("=", Token::Equals),
        (";", Token::Semicolon),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        let token = lexer.next_token().unwrap();
        assert_eq!(token, expected, "Failed for input: {}", input);
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

// ============================================================================
// Identifiers
// ============================================================================

#[test]
fn test_identifier_characters() {
    let test_cases = vec!["calc", "list", "tier-2", "_private", "bundle_discount", "42"];

    for input in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.next_token().unwrap(),
            Token::Identifier(input.to_string()),
            "Failed for input: {}",
            input
        );
        assert_eq!(lexer.next_token().unwrap(), Token::Eof);
    }
}

#[test]
fn test_identifier_stops_at_delimiters() {
    let tokens = Lexer::new("module=pricing)").tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("module".into()),
            Token::Equals,
            Token::Identifier("pricing".into()),
            Token::RParen,
            Token::Eof,
        ]
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_string_literal() {
    let mut lexer = Lexer::new(r#""data/input.json""#);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::String("data/input.json".into())
    );
}

#[test]
fn test_string_escapes() {
    let mut lexer = Lexer::new(r#""a \"quoted\" \\ word\n""#);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::String("a \"quoted\" \\ word\n".into())
    );
}

#[test]
fn test_unknown_escape_is_kept() {
    let mut lexer = Lexer::new(r#""C:\data\in.json""#);
    assert_eq!(
        lexer.next_token().unwrap(),
        Token::String(r"C:\data\in.json".into())
    );
}

#[test]
fn test_string_may_contain_delimiters() {
    let mut lexer = Lexer::new(r#""a;b{c}""#);
    assert_eq!(lexer.next_token().unwrap(), Token::String("a;b{c}".into()));
    assert_eq!(lexer.next_token().unwrap(), Token::Eof);
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new(r#"calc("pricing.bvr"#);
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    let err = lexer.next_token().unwrap_err();
    assert!(matches!(err, LexError::UnterminatedString { .. }));
    assert_eq!(err.position().column, 6);
}

#[test]
fn test_trailing_backslash_is_unterminated() {
    let mut lexer = Lexer::new("\"abc\\");
    assert!(matches!(
        lexer.next_token(),
        Err(LexError::UnterminatedString { .. })
    ));
}

// ============================================================================
// Whitespace and positions
// ============================================================================

#[test]
fn test_whitespace_is_skipped() {
    let tokens = Lexer::new("  summary \t(\n)  ").tokenize().unwrap();
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("summary".into()),
            Token::LParen,
            Token::RParen,
            Token::Eof,
        ]
    );
}

#[test]
fn test_token_start_tracks_lines() {
    let mut lexer = Lexer::new("list(modules);\n  summary()");
    for _ in 0..5 {
        lexer.next_token().unwrap();
    }
    assert_eq!(lexer.next_token().unwrap(), Token::Identifier("summary".into()));
    let start = lexer.token_start();
    assert_eq!(start.line, 2);
    assert_eq!(start.column, 3);
}

#[test]
fn test_unexpected_character() {
    let mut lexer = Lexer::new("calc(a|b)");
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    lexer.next_token().unwrap();
    let err = lexer.next_token().unwrap_err();
    assert_eq!(
        err.to_string(),
        "unexpected character '|' at line 1, column 7"
    );
}
