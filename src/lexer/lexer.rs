use std::mem;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::{
    rules::{LexerOptions, OperatorClass},
    tokens::{Token, TokenType},
};

/// Everything one scan produced: the token stream plus any lexical errors
/// collected along the way.
#[derive(Debug)]
pub struct LexerResults {
    pub tokens: Vec<Token>,
    pub errors: Vec<Error>,
}

/// The accumulator the scanner is currently filling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StateType {
    None,
    Word,
    Number,
    Float,
    String,
    Parenthesis,
    Braces,
    SqBraces,
    Char,
    Operator,
    UnaryOperator,
    Comment,
    CommentMultiline,
    NewLine,
}

#[derive(Debug)]
struct LexerState {
    kind: StateType,
    value: String,
    start: Position,
}

impl LexerState {
    fn reset(&mut self) {
        self.kind = StateType::None;
        self.value.clear();
        self.start = Position::null();
    }
}

/// A single-pass, character-level tokenizer.
///
/// The scanner holds one accumulator state at a time and flushes it into a
/// token whenever a boundary character arrives. It never panics: lexical
/// errors are collected into the result, and only an unterminated string or
/// an unrecognised operator sequence aborts the scan early.
pub struct Lexer<'a> {
    options: &'a LexerOptions,
    state: LexerState,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    line: u32,
    col: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(options: &'a LexerOptions) -> Lexer<'a> {
        Lexer {
            options,
            state: LexerState {
                kind: StateType::None,
                value: String::new(),
                start: Position::null(),
            },
            tokens: vec![],
            errors: vec![],
            line: 1,
            col: 1,
        }
    }

    fn pos(&self) -> Position {
        Position {
            line: self.line,
            col: self.col,
        }
    }

    fn newline(&mut self) {
        self.line += 1;
        self.col = 0;
    }

    fn move_col(&mut self) {
        self.col += 1;
    }

    fn error(&mut self, error_impl: ErrorImpl) {
        self.errors.push(Error::new(error_impl, self.pos()));
    }

    fn start_state(&mut self, kind: StateType) {
        self.state.kind = kind;
        self.state.start = self.pos();
        self.state.value.clear();
    }

    fn emit(&mut self, kind: TokenType) {
        let span = Span {
            start: self.state.start,
            end: self.pos(),
        };
        self.tokens.push(Token {
            kind,
            value: mem::take(&mut self.state.value),
            span,
        });
        self.state.reset();
    }

    /// Closes the current accumulator, classifying and emitting its token.
    fn flush(&mut self) {
        match self.state.kind {
            StateType::None => {}
            StateType::Number => self.emit(TokenType::Number),
            StateType::Float => self.emit(TokenType::Float),
            StateType::Word => {
                if self.options.is_keyword(&self.state.value) {
                    self.emit(TokenType::Keyword);
                } else if self.options.is_type(&self.state.value) {
                    self.emit(TokenType::Type);
                } else {
                    self.emit(TokenType::Word);
                }
            }
            StateType::String => self.emit(TokenType::String),
            StateType::Char => {
                if self.state.value.chars().count() != 1 {
                    self.errors.push(Error::new(
                        ErrorImpl::CharTooLong {
                            value: self.state.value.clone(),
                        },
                        self.state.start,
                    ));
                }
                self.emit(TokenType::Char);
            }
            StateType::Operator => match self.options.operators.classify(&self.state.value) {
                Some(OperatorClass::Arithmetic) => self.emit(TokenType::ArithmeticOperator),
                Some(OperatorClass::Assignment) => self.emit(TokenType::AssignmentOperator),
                Some(OperatorClass::Logical) => self.emit(TokenType::LogicalOperator),
                Some(OperatorClass::Binary) => self.emit(TokenType::BinaryOperator),
                Some(OperatorClass::Unary) => self.emit(TokenType::UnaryOperator),
                _ => self.emit(TokenType::Operator),
            },
            StateType::UnaryOperator => self.emit(TokenType::UnaryOperator),
            StateType::Comment => self.emit(TokenType::Comment),
            StateType::CommentMultiline => self.emit(TokenType::CommentMultiline),
            StateType::NewLine => self.emit(TokenType::NewLine),
            StateType::Parenthesis => self.emit(TokenType::Parenthesis),
            StateType::Braces => self.emit(TokenType::Braces),
            StateType::SqBraces => self.emit(TokenType::SqBraces),
        }
    }

    fn delimiter(&mut self, kind: StateType, ch: char) {
        self.flush();
        self.start_state(kind);
        self.state.value.push(ch);
        self.flush();
    }

    /// Scans `code` into tokens. A fresh `Lexer` owns each call; nothing
    /// survives into the next one.
    pub fn parse(mut self, code: &str) -> LexerResults {
        let chars: Vec<char> = code.chars().collect();

        let mut idx = 0;
        while idx < chars.len() {
            let ch = chars[idx];

            if self.state.kind == StateType::String && ch != '"' {
                if ch == '\n' {
                    self.error(ErrorImpl::UnterminatedString);
                    self.state.reset();
                    return self.output();
                }
                self.state.value.push(ch);
            } else if self.state.kind == StateType::Char && ch != '\'' {
                if ch == '\n' {
                    self.error(ErrorImpl::UnterminatedChar);
                    self.state.reset();
                    self.start_state(StateType::NewLine);
                    self.flush();
                    self.newline();
                } else {
                    self.state.value.push(ch);
                }
            } else if self.state.kind == StateType::Comment {
                if ch == '\n' {
                    self.flush();
                    self.newline();
                } else {
                    self.state.value.push(ch);
                }
            } else if self.state.kind == StateType::CommentMultiline {
                if ch == '*' && chars.get(idx + 1) == Some(&'/') {
                    self.move_col();
                    idx += 1;
                    self.flush();
                } else {
                    if ch == '\n' {
                        self.newline();
                    }
                    self.state.value.push(ch);
                }
            } else if ch.is_ascii_alphabetic() || ch == '_' || ch == '$' {
                match self.state.kind {
                    StateType::None => {
                        self.start_state(StateType::Word);
                        self.state.value.push(ch);
                    }
                    StateType::Word => self.state.value.push(ch),
                    _ => {
                        self.error(ErrorImpl::UnrecognisedToken {
                            token: ch.to_string(),
                        });
                        return self.output();
                    }
                }
            } else if ch == ' ' {
                self.flush();
            } else if ch == '\n' {
                self.flush();
                self.start_state(StateType::NewLine);
                self.flush();
                self.newline();
            } else if ch == '\r' {
                // ignored entirely
            } else if ch.is_ascii_digit() {
                match self.state.kind {
                    StateType::None => {
                        self.start_state(StateType::Number);
                        self.state.value.push(ch);
                    }
                    StateType::Number | StateType::Float | StateType::Word => {
                        self.state.value.push(ch)
                    }
                    _ => {
                        self.error(ErrorImpl::UnrecognisedToken {
                            token: ch.to_string(),
                        });
                        return self.output();
                    }
                }
            } else if ch == '"' {
                match self.state.kind {
                    StateType::None => self.start_state(StateType::String),
                    StateType::String => self.flush(),
                    _ => {
                        self.error(ErrorImpl::UnrecognisedToken {
                            token: ch.to_string(),
                        });
                        return self.output();
                    }
                }
            } else if ch == '\'' {
                match self.state.kind {
                    StateType::None => self.start_state(StateType::Char),
                    StateType::Char => self.flush(),
                    _ => {
                        self.error(ErrorImpl::UnrecognisedToken {
                            token: ch.to_string(),
                        });
                        return self.output();
                    }
                }
            } else if ch == '.' {
                if matches!(self.state.kind, StateType::Number | StateType::Float) {
                    self.state.kind = StateType::Float;
                    self.state.value.push(ch);
                } else {
                    self.flush();
                    self.start_state(StateType::Operator);
                    self.state.value.push(ch);
                    self.flush();
                }
            } else if ch == '(' || ch == ')' {
                self.delimiter(StateType::Parenthesis, ch);
            } else if ch == '{' || ch == '}' {
                self.delimiter(StateType::Braces, ch);
            } else if ch == '[' || ch == ']' {
                self.delimiter(StateType::SqBraces, ch);
            } else {
                self.flush();

                // Greedy operator lookahead: take up to two characters that
                // belong to the configured operator vocabulary.
                let op_start = self.pos();
                let mut op = String::new();
                while idx < chars.len()
                    && chars[idx] != ' '
                    && op.chars().count() < 2
                    && self.options.is_operator_char(chars[idx])
                {
                    op.push(chars[idx]);
                    self.move_col();
                    idx += 1;
                }

                if op.is_empty() {
                    self.error(ErrorImpl::UnrecognisedToken {
                        token: ch.to_string(),
                    });
                    return self.output();
                }

                if op == "+" || op == "-" {
                    // Unary vs arithmetic is decided by the previous token.
                    let unary = match self.tokens.last() {
                        None => true,
                        Some(token) => token.kind.is_operator_class(),
                    };
                    self.state.kind = if unary {
                        StateType::UnaryOperator
                    } else {
                        StateType::Operator
                    };
                    self.state.start = op_start;
                    self.state.value = op;
                    self.flush();
                } else {
                    match self.options.operators.classify(&op) {
                        Some(OperatorClass::Comment) => {
                            self.start_state(StateType::Comment);
                        }
                        Some(OperatorClass::CommentMultiline) => {
                            self.start_state(StateType::CommentMultiline);
                        }
                        Some(_) => {
                            self.state.kind = StateType::Operator;
                            self.state.start = op_start;
                            self.state.value = op;
                            self.flush();
                        }
                        None => {
                            self.errors
                                .push(Error::new(ErrorImpl::UnrecognisedToken { token: op }, op_start));
                            return self.output();
                        }
                    }
                }

                continue;
            }

            self.move_col();
            idx += 1;
        }

        match self.state.kind {
            StateType::String => {
                self.error(ErrorImpl::UnterminatedString);
                self.state.reset();
            }
            StateType::Char => {
                self.error(ErrorImpl::UnterminatedChar);
                self.state.reset();
            }
            _ => self.flush(),
        }

        self.output()
    }

    fn output(self) -> LexerResults {
        LexerResults {
            tokens: self.tokens,
            errors: self.errors,
        }
    }
}

/// Tokenizes a source string under the given rule set.
pub fn tokenize(source: &str, options: &LexerOptions) -> LexerResults {
    Lexer::new(options).parse(source)
}
