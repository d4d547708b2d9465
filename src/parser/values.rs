//! Literal value parsers.
//!
//! One parser per literal form. Each validates and consumes its leading
//! token; the composite forms (array, dict) loop on comma-separated
//! elements through the expression grammar until the matching closing
//! delimiter, tolerating a missing trailing comma.

use crate::{
    ast::expressions::{
        ArrayParsed, BooleanParsed, DictElement, DictParsed, FloatParsed, NullParsed, NumberParsed,
        StringParsed,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenType,
    Span,
};

use super::{
    expr::{identifier_expression, required_value, returns_value, SkipSet},
    parser::Parser,
};

pub fn string_parser(parser: &mut Parser) -> Result<StringParsed, Error> {
    let token = parser.expect(TokenType::String, &[])?;

    Ok(StringParsed {
        value: token.value,
        span: token.span,
    })
}

pub fn number_parser(parser: &mut Parser) -> Result<NumberParsed, Error> {
    let token = parser.expect(TokenType::Number, &[])?;

    let value = token.value.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start,
        )
    })?;

    Ok(NumberParsed {
        value,
        span: token.span,
    })
}

pub fn float_parser(parser: &mut Parser) -> Result<FloatParsed, Error> {
    let token = parser.expect(TokenType::Float, &[])?;

    let value = token.value.parse().map_err(|_| {
        Error::new(
            ErrorImpl::NumberParseError {
                token: token.value.clone(),
            },
            token.span.start,
        )
    })?;

    Ok(FloatParsed {
        value,
        span: token.span,
    })
}

pub fn boolean_parser(parser: &mut Parser) -> Result<BooleanParsed, Error> {
    let token = parser.expect(TokenType::Keyword, &["true", "false"])?;

    Ok(BooleanParsed {
        value: token.value == "true",
        span: token.span,
    })
}

pub fn null_parser(parser: &mut Parser) -> Result<NullParsed, Error> {
    let token = parser.expect(TokenType::Type, &["null"])?;

    Ok(NullParsed { span: token.span })
}

pub fn array_parser(parser: &mut Parser) -> Result<ArrayParsed, Error> {
    let open = parser.expect(TokenType::SqBraces, &["["])?;

    let mut elements = vec![];
    let end;
    loop {
        if let Some(close) = parser.eat(TokenType::SqBraces, &["]"]) {
            end = close.span.end;
            break;
        }

        if let Some(element) = returns_value(parser, true, SkipSet::EMPTY)? {
            elements.push(element);
        }
        parser.eat(TokenType::Operator, &[","]);
    }

    Ok(ArrayParsed {
        elements,
        span: Span {
            start: open.span.start,
            end,
        },
    })
}

pub fn dict_parser(parser: &mut Parser) -> Result<DictParsed, Error> {
    let open = parser.expect(TokenType::Braces, &["{"])?;

    let mut elements = vec![];
    let end;
    loop {
        if let Some(close) = parser.eat(TokenType::Braces, &["}"]) {
            end = close.span.end;
            break;
        }

        let name = identifier_expression(parser)?;
        let colon = parser.expect(TokenType::Operator, &[":"])?;
        let value = required_value(parser, SkipSet::EMPTY, &colon)?;

        elements.push(DictElement {
            span: Span {
                start: name.span.start,
                end: value.span().end,
            },
            name,
            value,
        });
        parser.eat(TokenType::Operator, &[","]);
    }

    Ok(DictParsed {
        elements,
        span: Span {
            start: open.span.start,
            end,
        },
    })
}
