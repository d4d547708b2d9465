//! Type annotation parsing.
//!
//! A type annotation is one term, extended into a union by repeating on
//! `|`, optionally wrapped in parentheses as a whole. A term is either a
//! primitive type token or, when none is present, a restricted expression
//! parse for literal/const-expression type positions; each term may carry
//! an `[`-`]` array suffix with an optional literal length.

use crate::{
    ast::types::{ArrayLength, PrimitiveType, Types, TypeTerm},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenType,
    Position, Span,
};

use super::{
    expr::{returns_value, SkipKind, SkipSet},
    parser::Parser,
};

/// Expression forms that are not legal as value-derived type terms.
const SKIP_TYPE_POSITION: SkipSet = SkipSet::EMPTY
    .with(SkipKind::Assignment)
    .with(SkipKind::Arithmetic)
    .with(SkipKind::Binary)
    .with(SkipKind::Unary)
    .with(SkipKind::Logical)
    .with(SkipKind::Array)
    .with(SkipKind::AccessIndex);

struct TypeArm {
    term: TypeTerm,
    span: Span,
    array_length: Option<ArrayLength>,
    end: Position,
}

fn parse_type_arm(parser: &mut Parser) -> Result<TypeArm, Error> {
    let (term, span) = if let Some(token) = parser.eat(TokenType::Type, &[]) {
        let primitive = PrimitiveType::from_name(&token.value).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownType {
                    type_: token.value.clone(),
                },
                token.span.start,
            )
        })?;
        (TypeTerm::Primitive(primitive), token.span)
    } else {
        match returns_value(parser, true, SKIP_TYPE_POSITION)? {
            Some(value) => {
                let span = value.span();
                (TypeTerm::Value(Box::new(value)), span)
            }
            None => return Err(parser.eof_error()),
        }
    };

    let mut array_length = None;
    let mut end = span.end;
    if parser.eat(TokenType::SqBraces, &["["]).is_some() {
        let length = match parser.eat(TokenType::Number, &[]) {
            Some(number) => {
                let parsed = number.value.parse().map_err(|_| {
                    Error::new(
                        ErrorImpl::NumberParseError {
                            token: number.value.clone(),
                        },
                        number.span.start,
                    )
                })?;
                ArrayLength::Fixed(parsed)
            }
            None => ArrayLength::Unbounded,
        };
        array_length = Some(length);
        end = parser.expect(TokenType::SqBraces, &["]"])?.span.end;
    }

    Ok(TypeArm {
        term,
        span,
        array_length,
        end,
    })
}

/// Parses a full type annotation at the cursor.
pub fn parse_types(parser: &mut Parser) -> Result<Types, Error> {
    let with_bracket = parser.eat(TokenType::Parenthesis, &["("]).is_some();

    let mut arms = vec![parse_type_arm(parser)?];
    while parser
        .eat(TokenType::BinaryOperator, &["|"])
        .is_some()
    {
        arms.push(parse_type_arm(parser)?);
    }

    if with_bracket {
        parser.expect(TokenType::Parenthesis, &[")"])?;
    }

    let start = arms[0].span.start;
    let end = arms[arms.len() - 1].end;

    if arms.len() == 1 {
        let arm = arms.pop().unwrap();
        return Ok(Types {
            value: vec![arm.term],
            array_length: arm.array_length,
            span: Span { start, end },
        });
    }

    // Inside a union, a suffixed arm keeps its arity in a nested group.
    let value = arms
        .into_iter()
        .map(|arm| match arm.array_length {
            None => arm.term,
            Some(length) => TypeTerm::Group(Box::new(Types {
                value: vec![arm.term],
                array_length: Some(length),
                span: Span {
                    start: arm.span.start,
                    end: arm.end,
                },
            })),
        })
        .collect();

    Ok(Types {
        value,
        array_length: None,
        span: Span { start, end },
    })
}
