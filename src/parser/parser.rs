//! Token cursor and parse entry point.
//!
//! The [`Parser`] is the single point of controlled access to the token
//! sequence for every grammar rule. It holds one explicit read position;
//! speculative rules snapshot the position and rewind it instead of relying
//! on any ambient state.
//!
//! The matching primitives come in three forms:
//! - [`Parser::check`] - non-consuming lookahead probe
//! - [`Parser::eat`] - consume the token if it matches, never raise
//! - [`Parser::expect`] - consume the token or raise a syntax error
//!
//! All three transparently skip `NewLine` tokens: a newline is insignificant
//! to any structural match and only acts as a statement terminator where the
//! expression grammar consumes it explicitly.

use crate::{
    ast::statements::GlobalBlockStatement,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenType},
    Position,
};

use super::stmt::global_block_statement;

pub struct Parser {
    /// The token stream under the cursor, comments already stripped
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Non-fatal diagnostics collected while parsing continues
    pub errors: Vec<Error>,
}

impl Parser {
    /// Creates a new cursor over a token stream.
    ///
    /// Comment tokens are never structural, so they are filtered out up
    /// front rather than skipped at every probe.
    pub fn new(tokens: Vec<Token>) -> Self {
        Parser {
            tokens: tokens
                .into_iter()
                .filter(|token| {
                    !matches!(
                        token.kind,
                        TokenType::Comment | TokenType::CommentMultiline
                    )
                })
                .collect(),
            pos: 0,
            errors: vec![],
        }
    }

    /// Raw lookahead; `NewLine` tokens are visible here.
    pub fn get(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset)
    }

    /// The most recently consumed token.
    pub fn prev(&self) -> Option<&Token> {
        if self.pos == 0 {
            None
        } else {
            self.tokens.get(self.pos - 1)
        }
    }

    /// Consumes one token unconditionally.
    pub fn bump(&mut self) {
        self.pos += 1;
    }

    pub fn snapshot(&self) -> usize {
        self.pos
    }

    pub fn rewind(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Finds the first non-`NewLine` token at or after `offset`, returning
    /// its absolute index.
    fn scan(&self, offset: usize) -> Option<(usize, &Token)> {
        let mut index = self.pos + offset;
        loop {
            let token = self.tokens.get(index)?;
            if token.kind == TokenType::NewLine {
                index += 1;
            } else {
                return Some((index, token));
            }
        }
    }

    fn matches(token: &Token, kind: TokenType, values: &[&str]) -> bool {
        token.kind == kind && (values.is_empty() || values.contains(&token.value.as_str()))
    }

    /// Non-consuming probe: the token at `offset` (newlines skipped), if it
    /// matches. An empty `values` slice matches any value.
    pub fn check(&self, kind: TokenType, values: &[&str], offset: usize) -> Option<&Token> {
        let (_, token) = self.scan(offset)?;
        if Parser::matches(token, kind, values) {
            Some(token)
        } else {
            None
        }
    }

    /// Consumes and returns the current token when it matches; leaves the
    /// cursor untouched otherwise.
    pub fn eat(&mut self, kind: TokenType, values: &[&str]) -> Option<Token> {
        let (index, token) = self.scan(0)?;
        if !Parser::matches(token, kind, values) {
            return None;
        }
        let token = token.clone();
        self.pos = index + 1;
        Some(token)
    }

    /// Consumes and returns the current token, raising a syntax error when
    /// it does not match (or the input ended).
    pub fn expect(&mut self, kind: TokenType, values: &[&str]) -> Result<Token, Error> {
        match self.scan(0) {
            None => Err(self.eof_error()),
            Some((index, token)) => {
                if Parser::matches(token, kind, values) {
                    let token = token.clone();
                    self.pos = index + 1;
                    Ok(token)
                } else {
                    Err(Error::new(
                        ErrorImpl::UnexpectedSyntax {
                            token: token.value.clone(),
                        },
                        token.span.start,
                    ))
                }
            }
        }
    }

    /// An `UnexpectedEof` pinned to the last token of the stream.
    pub fn eof_error(&self) -> Error {
        let position = self
            .tokens
            .last()
            .map(|token| token.span.start)
            .unwrap_or(Position { line: 1, col: 1 });
        Error::new(ErrorImpl::UnexpectedEof, position)
    }
}

/// Parses a token stream into the module AST.
///
/// This is the main entry point for parsing. The first unmet required
/// expectation aborts the whole parse; non-fatal diagnostics (currently only
/// invalid class bases) are collected on the returned `Parser`.
pub fn parse(tokens: Vec<Token>) -> (Parser, Result<GlobalBlockStatement, Error>) {
    let mut parser = Parser::new(tokens);
    let result = global_block_statement(&mut parser);
    (parser, result)
}
