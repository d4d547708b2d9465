//! Statement and block nodes.
//!
//! [`Node`] is the closed union of everything legal inside a block;
//! [`GlobalNode`] additionally admits the module-level import and export
//! declarations.

use crate::Span;

use super::{
    expressions::{AccessExpression, Identifier, ReturnsValue, StringParsed},
    types::Types,
};

/// `let`/`const` declaration. Exactly one of `variable_type` (annotated
/// form) or an inferred `:=` value may leave the other side absent.
#[derive(Debug, Clone, PartialEq)]
pub struct InitializeVariableStatement {
    pub constant: bool,
    pub name: Identifier,
    pub variable_type: Option<Types>,
    pub value: Option<ReturnsValue>,
    pub span: Span,
}

/// Assignment to an already-resolved access chain.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignVariableStatement {
    pub target: AccessExpression,
    pub operator: String,
    pub value: ReturnsValue,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionParameter {
    pub name: Identifier,
    pub param_type: Types,
    pub default: Option<ReturnsValue>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<Node>,
    pub span: Span,
}

/// A function declaration or expression-position function literal; the
/// name is absent in the latter case.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionStatement {
    pub name: Option<Identifier>,
    pub params: Vec<FunctionParameter>,
    pub return_type: Types,
    pub block: BlockStatement,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceElement {
    pub name: Identifier,
    pub element_type: Types,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceStatement {
    pub name: Identifier,
    pub elements: Vec<InterfaceElement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportStatement {
    pub what: Vec<Identifier>,
    pub from: StringParsed,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportStatement {
    pub what: Vec<Identifier>,
    pub from: Option<StringParsed>,
    pub span: Span,
}

/// Class declaration. A method literally named `init` is lifted out of the
/// method list into `initializer`.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassStatement {
    pub name: Identifier,
    pub extends: Option<AccessExpression>,
    pub implements: Option<AccessExpression>,
    pub properties: Vec<InitializeVariableStatement>,
    pub methods: Vec<FunctionStatement>,
    pub initializer: Option<FunctionStatement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub variable: InitializeVariableStatement,
    pub condition: ReturnsValue,
    pub increment: ReturnsValue,
    pub block: BlockStatement,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: ReturnsValue,
    pub block: BlockStatement,
    pub span: Span,
}

/// One link of an `if`/`else if`/`else` chain. A bare `else` block is a
/// `ConditionStatement` with no `condition`.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionStatement {
    pub condition: Option<ReturnsValue>,
    pub block: BlockStatement,
    pub else_body: Option<Box<ConditionStatement>>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<ReturnsValue>,
    pub span: Span,
}

/// Everything legal inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Value(ReturnsValue),
    InitializeVariable(InitializeVariableStatement),
    Function(FunctionStatement),
    Class(ClassStatement),
    For(ForStatement),
    While(WhileStatement),
    Condition(ConditionStatement),
    Return(ReturnStatement),
    Interface(InterfaceStatement),
}

impl Node {
    pub fn span(&self) -> Span {
        match self {
            Node::Value(value) => value.span(),
            Node::InitializeVariable(init) => init.span,
            Node::Function(function) => function.span,
            Node::Class(class) => class.span,
            Node::For(for_) => for_.span,
            Node::While(while_) => while_.span,
            Node::Condition(condition) => condition.span,
            Node::Return(return_) => return_.span,
            Node::Interface(interface) => interface.span,
        }
    }
}

/// A block-level node or a module-level import/export declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalNode {
    Statement(Node),
    Import(ImportStatement),
    Export(ExportStatement),
}

impl GlobalNode {
    pub fn span(&self) -> Span {
        match self {
            GlobalNode::Statement(node) => node.span(),
            GlobalNode::Import(import) => import.span,
            GlobalNode::Export(export) => export.span,
        }
    }
}

/// The top-level statement sequence of one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalBlockStatement {
    pub body: Vec<GlobalNode>,
    pub span: Span,
}
