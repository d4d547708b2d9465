//! Expression resolution.
//!
//! [`returns_value`] resolves one value-producing construct starting at the
//! cursor. It is an iterative left-fold: each step inspects the current
//! token, dispatches to the matching sub-rule, and feeds the result back in
//! as the left operand of the next step, until a `NewLine`/`;` terminator is
//! consumed or no further token extends the chain.
//!
//! Binary operator sub-rules parse their right operand through a restricted
//! call that excludes the arithmetic, logical and binary categories, so a
//! right operand is always a single term and continuation happens only
//! through the outer loop. All binary operators therefore associate strictly
//! left-to-right with no precedence tiers between categories: `a + b * c`
//! resolves as `(a + b) * c`. This is deliberate observed behavior of the
//! grammar and must not be "fixed" to standard precedence.

use crate::{
    ast::expressions::{
        AccessDotExpression, AccessExpression, AccessWithArrayLikeExpression, ArithmeticOperator,
        BinaryOperator, CallFunctionExpression, Identifier, LogicalOperator, ReturnsValue,
        TypeChangeExpression, UnaryLocation, UnaryOperator,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenType},
    Span,
};

use super::{
    parser::Parser,
    stmt::{assign_variable, function_statement},
    types::parse_types,
    values::{
        array_parser, boolean_parser, dict_parser, float_parser, null_parser, number_parser,
        string_parser,
    },
};

/// Node kinds the expression fold can be told not to re-enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipKind {
    CallFunction,
    AccessDot,
    Identifier,
    AccessIndex,
    Arithmetic,
    Logical,
    Binary,
    Unary,
    Assignment,
    String,
    Number,
    Float,
    Boolean,
    Null,
    Array,
    Dict,
    Function,
    TypeChange,
}

/// An explicit bit-set of [`SkipKind`]s threaded through the expression
/// grammar; the calling context uses it to control which extensions are
/// legal and to prevent runaway recursion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipSet(u32);

impl SkipSet {
    pub const EMPTY: SkipSet = SkipSet(0);

    pub const fn with(self, kind: SkipKind) -> SkipSet {
        SkipSet(self.0 | 1 << kind as u32)
    }

    pub const fn contains(self, kind: SkipKind) -> bool {
        self.0 & (1 << kind as u32) != 0
    }
}

/// The right operand of a binary operator may not itself be a binary
/// expression of any category.
pub const SKIP_OPERATORS: SkipSet = SkipSet::EMPTY
    .with(SkipKind::Arithmetic)
    .with(SkipKind::Logical)
    .with(SkipKind::Binary);

fn is_chainable(value: &ReturnsValue) -> bool {
    matches!(
        value,
        ReturnsValue::Identifier(_)
            | ReturnsValue::CallFunction(_)
            | ReturnsValue::AccessDot(_)
            | ReturnsValue::AccessIndex(_)
    )
}

fn into_access(value: ReturnsValue) -> AccessExpression {
    match value {
        ReturnsValue::Identifier(identifier) => AccessExpression::Identifier(identifier),
        ReturnsValue::CallFunction(call) => AccessExpression::Call(call),
        ReturnsValue::AccessDot(dot) => AccessExpression::Dot(dot),
        ReturnsValue::AccessIndex(index) => AccessExpression::Index(index),
        _ => unreachable!("only access chains are chainable"),
    }
}

fn skip_kind_of(access: &AccessExpression) -> SkipKind {
    match access {
        AccessExpression::Identifier(_) => SkipKind::Identifier,
        AccessExpression::Call(_) => SkipKind::CallFunction,
        AccessExpression::Dot(_) => SkipKind::AccessDot,
        AccessExpression::Index(_) => SkipKind::AccessIndex,
    }
}

/// Resolves one value-producing construct, or `None` when the cursor sat on
/// a bare terminator (or, with `raise_error` unset, on nothing parseable).
pub fn returns_value(
    parser: &mut Parser,
    raise_error: bool,
    skip: SkipSet,
) -> Result<Option<ReturnsValue>, Error> {
    returns_value_with(parser, raise_error, skip, None)
}

/// Raises when a required operand is missing after `after`.
pub(super) fn required_value(
    parser: &mut Parser,
    skip: SkipSet,
    after: &Token,
) -> Result<ReturnsValue, Error> {
    match returns_value(parser, true, skip)? {
        Some(value) => Ok(value),
        None => Err(Error::new(
            ErrorImpl::UnexpectedSyntaxDetailed {
                token: after.value.clone(),
                message: String::from("expected a value after this"),
            },
            after.span.start,
        )),
    }
}

pub(super) fn returns_value_with(
    parser: &mut Parser,
    raise_error: bool,
    skip: SkipSet,
    up: Option<ReturnsValue>,
) -> Result<Option<ReturnsValue>, Error> {
    let mut raise_error = raise_error;
    let mut up = up;

    loop {
        let (kind, value, start) = match parser.get(0) {
            None => {
                if raise_error {
                    return Err(parser.eof_error());
                }
                return Ok(up);
            }
            Some(token) => (token.kind, token.value.clone(), token.span.start),
        };

        if kind == TokenType::NewLine || (kind == TokenType::Operator && value == ";") {
            parser.bump();
            return Ok(up);
        } else if kind == TokenType::Parenthesis && value == "(" {
            if !skip.contains(SkipKind::CallFunction)
                && up.as_ref().map(is_chainable).unwrap_or(false)
            {
                let left = into_access(up.take().unwrap());
                let call = call_function_expression(parser, Some(left))?;
                up = Some(ReturnsValue::CallFunction(Box::new(call)));
            } else {
                parser.expect(TokenType::Parenthesis, &["("])?;
                let inner = returns_value_with(parser, true, SkipSet::EMPTY, up.take())?;
                parser.expect(TokenType::Parenthesis, &[")"])?;
                up = inner;
            }
        } else if !skip.contains(SkipKind::Arithmetic) && kind == TokenType::ArithmeticOperator {
            up = Some(arithmetic_operator(parser, up.take())?);
        } else if !skip.contains(SkipKind::Assignment) && kind == TokenType::AssignmentOperator {
            let target = if up.as_ref().map(is_chainable).unwrap_or(false) {
                Some(into_access(up.take().unwrap()))
            } else {
                None
            };
            let assign = assign_variable(parser, target)?;
            up = Some(ReturnsValue::AssignVariable(Box::new(assign)));
        } else if !skip.contains(SkipKind::Logical) && kind == TokenType::LogicalOperator {
            up = Some(logical_operator(parser, up.take())?);
        } else if !skip.contains(SkipKind::Binary) && kind == TokenType::BinaryOperator {
            up = Some(binary_operator(parser, up.take())?);
        } else if !skip.contains(SkipKind::Unary) && kind == TokenType::UnaryOperator {
            up = Some(unary_operator(parser, up.take())?);
        } else if kind == TokenType::Word
            && !(skip.contains(SkipKind::AccessDot)
                && skip.contains(SkipKind::Identifier)
                && skip.contains(SkipKind::CallFunction))
        {
            let result = access_expression(parser, false, false, false)?;
            if skip.contains(skip_kind_of(&result)) {
                if raise_error {
                    return Err(Error::new(ErrorImpl::UnexpectedSyntax { token: value }, start));
                }
                return Ok(up);
            }
            up = Some(result.into());
        } else if !skip.contains(SkipKind::String) && kind == TokenType::String && up.is_none() {
            up = Some(ReturnsValue::String(string_parser(parser)?));
        } else if !skip.contains(SkipKind::Number) && kind == TokenType::Number && up.is_none() {
            up = Some(ReturnsValue::Number(number_parser(parser)?));
        } else if !skip.contains(SkipKind::Float) && kind == TokenType::Float && up.is_none() {
            up = Some(ReturnsValue::Float(float_parser(parser)?));
        } else if kind == TokenType::SqBraces
            && value == "["
            && !(skip.contains(SkipKind::AccessIndex) && skip.contains(SkipKind::Array))
        {
            if !skip.contains(SkipKind::AccessIndex)
                && up.as_ref().map(is_chainable).unwrap_or(false)
            {
                let left = into_access(up.take().unwrap());
                let index = access_with_array_like_expression(parser, Some(left))?;
                up = Some(ReturnsValue::AccessIndex(Box::new(index)));
            } else if !skip.contains(SkipKind::Array) && up.is_none() {
                up = Some(ReturnsValue::Array(array_parser(parser)?));
            } else if raise_error {
                return Err(Error::new(ErrorImpl::UnexpectedSyntax { token: value }, start));
            } else {
                return Ok(up);
            }
        } else if !skip.contains(SkipKind::Dict)
            && kind == TokenType::Braces
            && value == "{"
            && up.is_none()
        {
            up = Some(ReturnsValue::Dict(dict_parser(parser)?));
        } else if kind == TokenType::Keyword
            && !(skip.contains(SkipKind::Boolean)
                && skip.contains(SkipKind::Function)
                && skip.contains(SkipKind::TypeChange))
        {
            if !skip.contains(SkipKind::Boolean)
                && (value == "true" || value == "false")
                && up.is_none()
            {
                up = Some(ReturnsValue::Boolean(boolean_parser(parser)?));
            } else if !skip.contains(SkipKind::Function) && value == "func" && up.is_none() {
                // A function literal owns everything through its block and
                // never extends into a longer chain.
                let function = function_statement(parser, false)?;
                return Ok(Some(ReturnsValue::Function(Box::new(function))));
            } else if !skip.contains(SkipKind::TypeChange) && value == "as" {
                up = Some(type_change_expression(parser, up.take())?);
            } else if raise_error {
                return Err(Error::new(ErrorImpl::UnexpectedSyntax { token: value }, start));
            } else {
                return Ok(up);
            }
        } else if !skip.contains(SkipKind::Null)
            && kind == TokenType::Type
            && value == "null"
            && up.is_none()
        {
            up = Some(ReturnsValue::Null(null_parser(parser)?));
        } else if raise_error {
            return Err(Error::new(ErrorImpl::UnexpectedSyntax { token: value }, start));
        } else {
            return Ok(up);
        }

        // A nested parse that consumed the statement terminator ends this
        // fold too.
        if let Some(prev) = parser.prev() {
            if prev.kind == TokenType::NewLine
                || (prev.kind == TokenType::Operator && prev.value == ";")
            {
                return Ok(up);
            }
        }

        raise_error = false;
    }
}

fn operand(left: Option<ReturnsValue>, operator: &Token) -> Result<ReturnsValue, Error> {
    match left {
        Some(value) => Ok(value),
        None => Err(Error::new(
            ErrorImpl::UnexpectedSyntaxDetailed {
                token: operator.value.clone(),
                message: String::from("expected a value before this operator"),
            },
            operator.span.start,
        )),
    }
}

pub fn arithmetic_operator(
    parser: &mut Parser,
    left: Option<ReturnsValue>,
) -> Result<ReturnsValue, Error> {
    let operator = parser.expect(TokenType::ArithmeticOperator, &[])?;
    let left = operand(left, &operator)?;
    let right = required_value(parser, SKIP_OPERATORS, &operator)?;

    Ok(ReturnsValue::Arithmetic(Box::new(ArithmeticOperator {
        span: Span::between(left.span(), right.span()),
        left,
        operator: operator.value,
        right,
    })))
}

pub fn logical_operator(
    parser: &mut Parser,
    left: Option<ReturnsValue>,
) -> Result<ReturnsValue, Error> {
    let operator = parser.expect(TokenType::LogicalOperator, &[])?;
    let left = operand(left, &operator)?;
    let right = required_value(parser, SKIP_OPERATORS, &operator)?;

    Ok(ReturnsValue::Logical(Box::new(LogicalOperator {
        span: Span::between(left.span(), right.span()),
        left,
        operator: operator.value,
        right,
    })))
}

pub fn binary_operator(
    parser: &mut Parser,
    left: Option<ReturnsValue>,
) -> Result<ReturnsValue, Error> {
    let operator = parser.expect(TokenType::BinaryOperator, &[])?;
    let left = operand(left, &operator)?;
    let right = required_value(parser, SKIP_OPERATORS, &operator)?;

    Ok(ReturnsValue::Binary(Box::new(BinaryOperator {
        span: Span::between(left.span(), right.span()),
        left,
        operator: operator.value,
        right,
    })))
}

pub fn unary_operator(
    parser: &mut Parser,
    left: Option<ReturnsValue>,
) -> Result<ReturnsValue, Error> {
    let node = match left {
        None => {
            let operator = parser.expect(TokenType::UnaryOperator, &[])?;
            let value = required_value(
                parser,
                SkipSet::EMPTY.with(SkipKind::Unary),
                &operator,
            )?;
            UnaryOperator {
                span: Span {
                    start: operator.span.start,
                    end: value.span().end,
                },
                value,
                operator: operator.value,
                location: UnaryLocation::Left,
            }
        }
        Some(value) => {
            let operator = parser.expect(TokenType::UnaryOperator, &["++", "--"])?;
            UnaryOperator {
                span: Span {
                    start: value.span().start,
                    end: operator.span.end,
                },
                value,
                operator: operator.value,
                location: UnaryLocation::Right,
            }
        }
    };

    Ok(ReturnsValue::Unary(Box::new(node)))
}

pub fn identifier_expression(parser: &mut Parser) -> Result<Identifier, Error> {
    let token = parser.expect(TokenType::Word, &[])?;

    Ok(Identifier {
        name: token.value,
        span: token.span,
    })
}

/// Resolves an access chain rooted at the current `Word` token. One token of
/// lookahead decides the shape: `.`/`?.` continues as dot access, `(` as a
/// call, `[` as indexing (only where the caller allows it), anything else is
/// a bare identifier.
pub fn access_expression(
    parser: &mut Parser,
    skip_dot_expression: bool,
    allow_array_like_expression: bool,
    skip_function_expression: bool,
) -> Result<AccessExpression, Error> {
    if !skip_dot_expression
        && parser
            .check(TokenType::Operator, &["?.", "."], 1)
            .is_some()
    {
        let dot = access_dot_expression(parser, None)?;
        Ok(AccessExpression::Dot(Box::new(dot)))
    } else if !skip_function_expression
        && parser.check(TokenType::Parenthesis, &["("], 1).is_some()
    {
        let call = call_function_expression(parser, None)?;
        let call = AccessExpression::Call(Box::new(call));

        if parser.check(TokenType::Operator, &[".", "?."], 0).is_some() {
            let dot = access_dot_expression(parser, Some(call))?;
            return Ok(AccessExpression::Dot(Box::new(dot)));
        }

        Ok(call)
    } else if allow_array_like_expression
        && parser.check(TokenType::SqBraces, &["["], 0).is_some()
    {
        let index = access_with_array_like_expression(parser, None)?;
        Ok(AccessExpression::Index(Box::new(index)))
    } else {
        Ok(AccessExpression::Identifier(identifier_expression(parser)?))
    }
}

pub fn access_dot_expression(
    parser: &mut Parser,
    left: Option<AccessExpression>,
) -> Result<AccessDotExpression, Error> {
    let left = match left {
        Some(left) => left,
        None => access_expression(parser, true, false, false)?,
    };

    let return_null = parser.eat(TokenType::Operator, &["?."]).is_some();
    if !return_null {
        parser.expect(TokenType::Operator, &["."])?;
    }

    let right = access_expression(parser, false, false, false)?;

    Ok(AccessDotExpression {
        span: Span::between(left.span(), right.span()),
        left,
        right,
        return_null,
    })
}

pub fn access_with_array_like_expression(
    parser: &mut Parser,
    left: Option<AccessExpression>,
) -> Result<AccessWithArrayLikeExpression, Error> {
    let left = match left {
        Some(left) => left,
        None => access_expression(parser, false, true, false)?,
    };

    let open = parser.expect(TokenType::SqBraces, &["["])?;
    let right = required_value(parser, SkipSet::EMPTY, &open)?;
    let close = parser.expect(TokenType::SqBraces, &["]"])?;

    Ok(AccessWithArrayLikeExpression {
        span: Span {
            start: left.span().start,
            end: close.span.end,
        },
        left,
        right,
    })
}

pub fn call_function_expression(
    parser: &mut Parser,
    left: Option<AccessExpression>,
) -> Result<CallFunctionExpression, Error> {
    let what = match left {
        Some(left) => left,
        None => access_expression(parser, false, false, true)?,
    };

    parser.expect(TokenType::Parenthesis, &["("])?;

    let mut params = vec![];
    let end;
    loop {
        if let Some(close) = parser.eat(TokenType::Parenthesis, &[")"]) {
            end = close.span.end;
            break;
        }

        if let Some(param) = returns_value(parser, true, SkipSet::EMPTY)? {
            params.push(param);
        }
        parser.eat(TokenType::Operator, &[","]);
    }

    Ok(CallFunctionExpression {
        span: Span {
            start: what.span().start,
            end,
        },
        what,
        params,
    })
}

pub fn type_change_expression(
    parser: &mut Parser,
    up: Option<ReturnsValue>,
) -> Result<ReturnsValue, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["as"])?;
    let value = match up {
        Some(value) => value,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedSyntaxDetailed {
                    token: keyword.value,
                    message: String::from("expected a value before the cast"),
                },
                keyword.span.start,
            ))
        }
    };

    let return_null = parser.eat(TokenType::Operator, &["?"]).is_some();
    let to_type = parse_types(parser)?;

    Ok(ReturnsValue::TypeChange(Box::new(TypeChangeExpression {
        span: Span {
            start: value.span().start,
            end: to_type.span.end,
        },
        value,
        to_type,
        return_null,
    })))
}
