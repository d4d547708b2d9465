//! Value-producing expression nodes.
//!
//! [`ReturnsValue`] is the closed union of everything that can appear in
//! value position; [`AccessExpression`] is the narrower union of access
//! chain shapes (identifier, call, dot access, indexing) used wherever the
//! grammar requires an assignable or callable target.

use crate::Span;

use super::{
    statements::{AssignVariableStatement, FunctionStatement},
    types::Types,
};

/// A bare identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// A function call: the callee access chain plus its argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct CallFunctionExpression {
    pub what: AccessExpression,
    pub params: Vec<ReturnsValue>,
    pub span: Span,
}

/// Dot access `a.b`; `return_null` is set for the null-propagating `a?.b`
/// form and applies to this hop only.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessDotExpression {
    pub left: AccessExpression,
    pub right: AccessExpression,
    pub return_null: bool,
    pub span: Span,
}

/// Array-like indexing `a[expr]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessWithArrayLikeExpression {
    pub left: AccessExpression,
    pub right: ReturnsValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticOperator {
    pub left: ReturnsValue,
    pub operator: String,
    pub right: ReturnsValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogicalOperator {
    pub left: ReturnsValue,
    pub operator: String,
    pub right: ReturnsValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperator {
    pub left: ReturnsValue,
    pub operator: String,
    pub right: ReturnsValue,
    pub span: Span,
}

/// Which side of its operand a unary operator appeared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryLocation {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperator {
    pub value: ReturnsValue,
    pub operator: String,
    pub location: UnaryLocation,
    pub span: Span,
}

/// A type cast `value as Type`; `return_null` marks the `as?` form.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChangeExpression {
    pub value: ReturnsValue,
    pub to_type: Types,
    pub return_null: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringParsed {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberParsed {
    pub value: i64,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatParsed {
    pub value: f64,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanParsed {
    pub value: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NullParsed {
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayParsed {
    pub elements: Vec<ReturnsValue>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictElement {
    pub name: Identifier,
    pub value: ReturnsValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictParsed {
    pub elements: Vec<DictElement>,
    pub span: Span,
}

/// An access chain shape: the only forms that may be assigned to, called,
/// dotted into, or indexed.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessExpression {
    Identifier(Identifier),
    Call(Box<CallFunctionExpression>),
    Dot(Box<AccessDotExpression>),
    Index(Box<AccessWithArrayLikeExpression>),
}

impl AccessExpression {
    pub fn span(&self) -> Span {
        match self {
            AccessExpression::Identifier(identifier) => identifier.span,
            AccessExpression::Call(call) => call.span,
            AccessExpression::Dot(dot) => dot.span,
            AccessExpression::Index(index) => index.span,
        }
    }
}

/// Everything that produces a value.
#[derive(Debug, Clone, PartialEq)]
pub enum ReturnsValue {
    Identifier(Identifier),
    CallFunction(Box<CallFunctionExpression>),
    AccessDot(Box<AccessDotExpression>),
    AccessIndex(Box<AccessWithArrayLikeExpression>),
    Arithmetic(Box<ArithmeticOperator>),
    Logical(Box<LogicalOperator>),
    Binary(Box<BinaryOperator>),
    Unary(Box<UnaryOperator>),
    TypeChange(Box<TypeChangeExpression>),
    String(StringParsed),
    Number(NumberParsed),
    Float(FloatParsed),
    Boolean(BooleanParsed),
    Null(NullParsed),
    Array(ArrayParsed),
    Dict(DictParsed),
    AssignVariable(Box<AssignVariableStatement>),
    Function(Box<FunctionStatement>),
}

impl ReturnsValue {
    pub fn span(&self) -> Span {
        match self {
            ReturnsValue::Identifier(identifier) => identifier.span,
            ReturnsValue::CallFunction(call) => call.span,
            ReturnsValue::AccessDot(dot) => dot.span,
            ReturnsValue::AccessIndex(index) => index.span,
            ReturnsValue::Arithmetic(op) => op.span,
            ReturnsValue::Logical(op) => op.span,
            ReturnsValue::Binary(op) => op.span,
            ReturnsValue::Unary(op) => op.span,
            ReturnsValue::TypeChange(cast) => cast.span,
            ReturnsValue::String(string) => string.span,
            ReturnsValue::Number(number) => number.span,
            ReturnsValue::Float(float) => float.span,
            ReturnsValue::Boolean(boolean) => boolean.span,
            ReturnsValue::Null(null) => null.span,
            ReturnsValue::Array(array) => array.span,
            ReturnsValue::Dict(dict) => dict.span,
            ReturnsValue::AssignVariable(assign) => assign.span,
            ReturnsValue::Function(function) => function.span,
        }
    }
}

impl From<AccessExpression> for ReturnsValue {
    fn from(access: AccessExpression) -> ReturnsValue {
        match access {
            AccessExpression::Identifier(identifier) => ReturnsValue::Identifier(identifier),
            AccessExpression::Call(call) => ReturnsValue::CallFunction(call),
            AccessExpression::Dot(dot) => ReturnsValue::AccessDot(dot),
            AccessExpression::Index(index) => ReturnsValue::AccessIndex(index),
        }
    }
}
