//! Unit tests for the lexer module.
//!
//! This module contains comprehensive tests for tokenization including:
//! - Keywords, primitive types and identifiers
//! - Numeric literals (integers and floats)
//! - String and char literals
//! - Operator classification and unary disambiguation
//! - Comments and newlines
//! - Error cases

use super::{lexer::tokenize, rules::DEFAULT_RULES, tokens::TokenType};

#[test]
fn test_tokenize_keywords() {
    let source = "let const func if else while for return import export class interface";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.len(), 12);
    for token in &result.tokens {
        assert_eq!(token.kind, TokenType::Keyword);
    }
}

#[test]
fn test_tokenize_types() {
    let source = "i32 i64 u32 u64 str char bool null void f32 f64";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.len(), 11);
    for token in &result.tokens {
        assert_eq!(token.kind, TokenType::Type);
    }
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar baz_123 _underscore $dollar CamelCase";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    let values: Vec<&str> = result.tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["foo", "bar", "baz_123", "_underscore", "$dollar", "CamelCase"]
    );
    for token in &result.tokens {
        assert_eq!(token.kind, TokenType::Word);
    }
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 0 100";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[0].kind, TokenType::Number);
    assert_eq!(result.tokens[0].value, "42");
    assert_eq!(result.tokens[1].kind, TokenType::Number);
    assert_eq!(result.tokens[1].value, "0");
    assert_eq!(result.tokens[2].kind, TokenType::Number);
    assert_eq!(result.tokens[2].value, "100");
}

#[test]
fn test_tokenize_floats() {
    let source = "3.14 100.5";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[0].kind, TokenType::Float);
    assert_eq!(result.tokens[0].value, "3.14");
    assert_eq!(result.tokens[1].kind, TokenType::Float);
    assert_eq!(result.tokens[1].value, "100.5");
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words" """#;
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[0].kind, TokenType::String);
    assert_eq!(result.tokens[0].value, "hello");
    assert_eq!(result.tokens[1].kind, TokenType::String);
    assert_eq!(result.tokens[1].value, "multiple words");
    assert_eq!(result.tokens[2].kind, TokenType::String);
    assert_eq!(result.tokens[2].value, "");
}

#[test]
fn test_tokenize_unterminated_string() {
    let source = "\"abc";
    let result = tokenize(source, &DEFAULT_RULES);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].get_error_name(), "UnterminatedString");
    assert!(result.tokens.is_empty());
}

#[test]
fn test_tokenize_string_aborts_on_newline() {
    let source = "\"abc\nlet x := 1";
    let result = tokenize(source, &DEFAULT_RULES);

    // The scan stops at the stray newline; nothing after it is tokenized.
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].get_error_name(), "UnterminatedString");
    assert!(result.tokens.is_empty());
}

#[test]
fn test_tokenize_chars() {
    let source = "'a' 'b'";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[0].kind, TokenType::Char);
    assert_eq!(result.tokens[0].value, "a");
    assert_eq!(result.tokens[1].kind, TokenType::Char);
    assert_eq!(result.tokens[1].value, "b");
}

#[test]
fn test_tokenize_char_too_long() {
    let source = "'ab'";
    let result = tokenize(source, &DEFAULT_RULES);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].get_error_name(), "CharTooLong");
    // The token is still emitted alongside the error.
    assert_eq!(result.tokens[0].kind, TokenType::Char);
    assert_eq!(result.tokens[0].value, "ab");
}

#[test]
fn test_tokenize_char_newline_recovers() {
    let source = "'a\nlet";
    let result = tokenize(source, &DEFAULT_RULES);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].get_error_name(), "UnterminatedChar");
    // Scanning continues on the next line.
    let last = result.tokens.last().unwrap();
    assert_eq!(last.kind, TokenType::Keyword);
    assert_eq!(last.value, "let");
}

#[test]
fn test_tokenize_operator_classification() {
    let source = "a + b == c && d ^ e = f";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[1].kind, TokenType::ArithmeticOperator);
    assert_eq!(result.tokens[3].kind, TokenType::LogicalOperator);
    assert_eq!(result.tokens[5].kind, TokenType::LogicalOperator);
    assert_eq!(result.tokens[7].kind, TokenType::BinaryOperator);
    assert_eq!(result.tokens[9].kind, TokenType::AssignmentOperator);
}

#[test]
fn test_tokenize_compound_assignment_operators() {
    let source = "a += 1\nb := 2\nc ?= 3";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    let assignments: Vec<&str> = result
        .tokens
        .iter()
        .filter(|t| t.kind == TokenType::AssignmentOperator)
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(assignments, vec!["+=", ":=", "?="]);
}

#[test]
fn test_tokenize_unary_plus_minus() {
    // At start of input `-` is unary; between words it is arithmetic; after
    // an operator it is unary again.
    let result = tokenize("-a", &DEFAULT_RULES);
    assert_eq!(result.tokens[0].kind, TokenType::UnaryOperator);
    assert_eq!(result.tokens[0].value, "-");

    let result = tokenize("a-b", &DEFAULT_RULES);
    assert_eq!(result.tokens[1].kind, TokenType::ArithmeticOperator);
    assert_eq!(result.tokens[1].value, "-");

    let result = tokenize("a = -b", &DEFAULT_RULES);
    assert_eq!(result.tokens[2].kind, TokenType::UnaryOperator);
}

#[test]
fn test_tokenize_increment_decrement() {
    let source = "a++ b--";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[1].kind, TokenType::UnaryOperator);
    assert_eq!(result.tokens[1].value, "++");
    assert_eq!(result.tokens[3].kind, TokenType::UnaryOperator);
    assert_eq!(result.tokens[3].value, "--");
}

#[test]
fn test_tokenize_punctuation() {
    let source = "( ) { } [ ] , ; ?.";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[0].kind, TokenType::Parenthesis);
    assert_eq!(result.tokens[1].kind, TokenType::Parenthesis);
    assert_eq!(result.tokens[2].kind, TokenType::Braces);
    assert_eq!(result.tokens[3].kind, TokenType::Braces);
    assert_eq!(result.tokens[4].kind, TokenType::SqBraces);
    assert_eq!(result.tokens[5].kind, TokenType::SqBraces);
    assert_eq!(result.tokens[6].kind, TokenType::Operator);
    assert_eq!(result.tokens[6].value, ",");
    assert_eq!(result.tokens[7].kind, TokenType::Operator);
    assert_eq!(result.tokens[7].value, ";");
    assert_eq!(result.tokens[8].kind, TokenType::Operator);
    assert_eq!(result.tokens[8].value, "?.");
}

#[test]
fn test_tokenize_dot_is_standalone_operator() {
    let source = "point.x";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[0].kind, TokenType::Word);
    assert_eq!(result.tokens[1].kind, TokenType::Operator);
    assert_eq!(result.tokens[1].value, ".");
    assert_eq!(result.tokens[2].kind, TokenType::Word);
}

#[test]
fn test_tokenize_newline_token() {
    let source = "a\nb";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[0].kind, TokenType::Word);
    assert_eq!(result.tokens[1].kind, TokenType::NewLine);
    assert_eq!(result.tokens[2].kind, TokenType::Word);
    assert_eq!(result.tokens[2].span.start.line, 2);
    assert_eq!(result.tokens[2].span.start.col, 1);
}

#[test]
fn test_tokenize_line_comment() {
    let source = "let x = 5 // this is a comment\nlet y = 10";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    let comment = result
        .tokens
        .iter()
        .find(|t| t.kind == TokenType::Comment)
        .unwrap();
    assert_eq!(comment.value, " this is a comment");
    // The comment swallows its terminating newline.
    assert!(!result.tokens.iter().any(|t| t.kind == TokenType::NewLine));
    assert_eq!(result.tokens.last().unwrap().value, "10");
}

#[test]
fn test_tokenize_multiline_comment() {
    let source = "a /* first\nsecond */ b";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    let comment = result
        .tokens
        .iter()
        .find(|t| t.kind == TokenType::CommentMultiline)
        .unwrap();
    assert_eq!(comment.value, " first\nsecond ");
    // The line counter keeps advancing inside the comment.
    let b = result.tokens.last().unwrap();
    assert_eq!(b.value, "b");
    assert_eq!(b.span.start.line, 2);
}

#[test]
fn test_tokenize_unrecognised_token() {
    let source = "let x = @";
    let result = tokenize(source, &DEFAULT_RULES);

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_tokenize_whitespace_handling() {
    let source = "  let   x   =   42  ";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens.len(), 4);
    assert_eq!(result.tokens[0].kind, TokenType::Keyword);
    assert_eq!(result.tokens[1].kind, TokenType::Word);
    assert_eq!(result.tokens[2].kind, TokenType::AssignmentOperator);
    assert_eq!(result.tokens[3].kind, TokenType::Number);
}

#[test]
fn test_tokenize_positions() {
    let source = "let x\nconst y";
    let result = tokenize(source, &DEFAULT_RULES);

    assert_eq!(result.tokens[0].span.start.line, 1);
    assert_eq!(result.tokens[0].span.start.col, 1);
    assert_eq!(result.tokens[1].span.start.col, 5);
    assert_eq!(result.tokens[3].span.start.line, 2);
    assert_eq!(result.tokens[3].span.start.col, 1);
    assert_eq!(result.tokens[4].span.start.col, 7);
}

#[test]
fn test_tokenize_value_round_trip() {
    // Re-concatenating token values (ignoring NewLine and comment tokens)
    // reconstructs the non-whitespace content of the input.
    let source = "let x := add(1, 2.5) // done";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    let rebuilt: String = result
        .tokens
        .iter()
        .filter(|t| {
            !matches!(
                t.kind,
                TokenType::NewLine | TokenType::Comment | TokenType::CommentMultiline
            )
        })
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(rebuilt, "letx:=add(1,2.5)");
}

#[test]
fn test_tokenize_function_declaration() {
    let source = "func add(a: i32, b: i32): i32 { return a + b }";
    let result = tokenize(source, &DEFAULT_RULES);

    assert!(result.errors.is_empty());
    assert_eq!(result.tokens[0].kind, TokenType::Keyword);
    assert_eq!(result.tokens[0].value, "func");
    assert_eq!(result.tokens[1].kind, TokenType::Word);
    assert_eq!(result.tokens[1].value, "add");
    assert_eq!(result.tokens[2].kind, TokenType::Parenthesis);
    assert_eq!(result.tokens[3].kind, TokenType::Word);
    assert_eq!(result.tokens[4].kind, TokenType::Operator);
    assert_eq!(result.tokens[4].value, ":");
    assert_eq!(result.tokens[5].kind, TokenType::Type);
    assert_eq!(result.tokens[5].value, "i32");
}

#[test]
fn test_tokenize_custom_rules() {
    // The rule set is data; a swapped configuration changes classification.
    let mut options = DEFAULT_RULES.clone();
    options.keywords.push(String::from("until"));
    options.types.push(String::from("decimal"));

    let result = tokenize("until x: decimal", &options);
    assert_eq!(result.tokens[0].kind, TokenType::Keyword);
    assert_eq!(result.tokens[1].kind, TokenType::Word);
    assert_eq!(result.tokens[3].kind, TokenType::Type);
}
