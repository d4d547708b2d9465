//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position { line: 1, col: 10 },
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position { line: 3, col: 42 };
    let error = Error::new(
        ErrorImpl::UnexpectedSyntax {
            token: "identifier".to_string(),
        },
        pos,
    );

    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().col, 42);
}

#[test]
fn test_unexpected_syntax_error() {
    let error = Error::new(
        ErrorImpl::UnexpectedSyntax {
            token: "identifier".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    assert_eq!(error.get_error_name(), "UnexpectedSyntax");
}

#[test]
fn test_unterminated_string_error() {
    let error = Error::new(ErrorImpl::UnterminatedString, Position { line: 2, col: 8 });

    assert_eq!(error.get_error_name(), "UnterminatedString");
}

#[test]
fn test_char_too_long_error() {
    let error = Error::new(
        ErrorImpl::CharTooLong {
            value: "ab".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    assert_eq!(error.get_error_name(), "CharTooLong");
}

#[test]
fn test_unknown_type_error() {
    let error = Error::new(
        ErrorImpl::UnknownType {
            type_: "CustomType".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    assert_eq!(error.get_error_name(), "UnknownType");
}

#[test]
fn test_invalid_class_base_error() {
    let error = Error::new(
        ErrorImpl::InvalidClassBase {
            what: "extend".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    assert_eq!(error.get_error_name(), "InvalidClassBase");
    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("extend")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_variable_already_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
}

#[test]
fn test_function_already_declared_error() {
    let error = Error::new(
        ErrorImpl::FunctionAlreadyDeclared {
            function: "main".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    assert_eq!(error.get_error_name(), "FunctionAlreadyDeclared");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedSyntax {
            token: "}".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position { line: 1, col: 1 },
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
}
