use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedChar => "UnterminatedChar",
            ErrorImpl::CharTooLong { .. } => "CharTooLong",
            ErrorImpl::UnexpectedSyntax { .. } => "UnexpectedSyntax",
            ErrorImpl::UnexpectedSyntaxDetailed { .. } => "UnexpectedSyntaxDetailed",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::FunctionNameRequired => "FunctionNameRequired",
            ErrorImpl::InvalidClassBase { .. } => "InvalidClassBase",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::FunctionAlreadyDeclared { .. } => "FunctionAlreadyDeclared",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Expected end of string, did you miss a `\"`?"))
            }
            ErrorImpl::UnterminatedChar => {
                ErrorTip::Suggestion(String::from("Expected end of char, did you miss a `'`?"))
            }
            ErrorImpl::CharTooLong { value } => ErrorTip::Suggestion(format!(
                "Expected char `{}` to be only one character",
                value
            )),
            ErrorImpl::UnexpectedSyntax { token } => {
                ErrorTip::Suggestion(format!("Unexpected syntax: `{}`", token))
            }
            ErrorImpl::UnexpectedSyntaxDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected syntax: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEof => ErrorTip::Suggestion(String::from(
                "Unexpected end of file, is the source complete?",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::FunctionNameRequired => {
                ErrorTip::Suggestion(String::from("Name is required in function"))
            }
            ErrorImpl::InvalidClassBase { what } => ErrorTip::Suggestion(format!(
                "Functions or array-like accessors cannot be used to {} a class",
                what
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::FunctionAlreadyDeclared { function } => {
                ErrorTip::Suggestion(format!("Function `{}` already declared", function))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("expected end of string")]
    UnterminatedString,
    #[error("expected end of char")]
    UnterminatedChar,
    #[error("expected char {value:?} to be only one character")]
    CharTooLong { value: String },
    #[error("unexpected syntax: {token:?}")]
    UnexpectedSyntax { token: String },
    #[error("unexpected syntax ({message}): {token:?}")]
    UnexpectedSyntaxDetailed { token: String, message: String },
    #[error("unexpected end of file")]
    UnexpectedEof,
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("name is required in function")]
    FunctionNameRequired,
    #[error("functions or array-like accessors cannot be used to {what} a class")]
    InvalidClassBase { what: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("function {function:?} already declared")]
    FunctionAlreadyDeclared { function: String },
}
