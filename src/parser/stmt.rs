//! Statement parsing.
//!
//! One recursive-descent rule per construct: each consumes its leading
//! keyword, the required clauses, and an optional trailing block. The block
//! rule recognizes the statement keywords and otherwise falls through to
//! the expression grammar; a `let`/`const` or any block-introducing keyword
//! statement terminates the surrounding scan of its block level, which is
//! observed behavior of the grammar and kept as-is. The module-level rule
//! additionally accepts `import` and `export` declarations and runs until
//! end of input.

use crate::{
    ast::{
        expressions::AccessExpression,
        statements::{
            AssignVariableStatement, BlockStatement, ClassStatement, ConditionStatement,
            ExportStatement, ForStatement, FunctionParameter, FunctionStatement,
            GlobalBlockStatement, GlobalNode, ImportStatement, InitializeVariableStatement,
            InterfaceElement, InterfaceStatement, Node, ReturnStatement, WhileStatement,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenType,
    Position, Span,
};

use super::{
    expr::{access_expression, identifier_expression, required_value, returns_value, SkipSet},
    parser::Parser,
    types::parse_types,
    values::string_parser,
};

/// `let`/`const` declaration: either `:=` with a required value and an
/// inferred type, or `:` with a required type annotation and an optional
/// `=` value.
pub fn initialize_variable_statement(
    parser: &mut Parser,
) -> Result<InitializeVariableStatement, Error> {
    let initializer = parser.expect(TokenType::Keyword, &["let", "const"])?;
    let constant = initializer.value == "const";

    let name = identifier_expression(parser)?;

    let mut value = None;
    let variable_type = if let Some(walrus) = parser.eat(TokenType::AssignmentOperator, &[":="]) {
        value = Some(required_value(parser, SkipSet::EMPTY, &walrus)?);
        None
    } else {
        parser.expect(TokenType::Operator, &[":"])?;
        let annotation = parse_types(parser)?;
        if let Some(equals) = parser.eat(TokenType::AssignmentOperator, &["="]) {
            value = Some(required_value(parser, SkipSet::EMPTY, &equals)?);
        }
        Some(annotation)
    };

    let end = match (&value, &variable_type) {
        (Some(value), _) => value.span().end,
        (None, Some(annotation)) => annotation.span.end,
        (None, None) => name.span.end,
    };

    Ok(InitializeVariableStatement {
        span: Span {
            start: initializer.span.start,
            end,
        },
        constant,
        name,
        variable_type,
        value,
    })
}

/// Assignment with an already-resolved target, or with the target parsed in
/// place when the statement begins at its access chain.
pub fn assign_variable(
    parser: &mut Parser,
    target: Option<AccessExpression>,
) -> Result<AssignVariableStatement, Error> {
    let target = match target {
        Some(target) => target,
        None => access_expression(parser, false, false, false)?,
    };

    let operator = parser.expect(TokenType::AssignmentOperator, &[])?;
    let value = required_value(parser, SkipSet::EMPTY, &operator)?;

    Ok(AssignVariableStatement {
        span: Span {
            start: target.span().start,
            end: value.span().end,
        },
        target,
        operator: operator.value,
        value,
    })
}

/// `func` declaration or expression-position function literal. The
/// parameter list and return type are mandatory even when the name or the
/// parameters are absent.
pub fn function_statement(
    parser: &mut Parser,
    name_required: bool,
) -> Result<FunctionStatement, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["func"])?;

    let name = if parser.check(TokenType::Word, &[], 0).is_some() {
        Some(identifier_expression(parser)?)
    } else {
        if name_required {
            let position = parser
                .get(0)
                .map(|token| token.span.start)
                .unwrap_or(keyword.span.start);
            return Err(Error::new(ErrorImpl::FunctionNameRequired, position));
        }
        None
    };

    parser.expect(TokenType::Parenthesis, &["("])?;

    let mut params = vec![];
    loop {
        if parser.eat(TokenType::Parenthesis, &[")"]).is_some() {
            break;
        }

        let param_name = identifier_expression(parser)?;
        parser.expect(TokenType::Operator, &[":"])?;
        let param_type = parse_types(parser)?;

        let mut default = None;
        if let Some(equals) = parser.eat(TokenType::AssignmentOperator, &["="]) {
            default = Some(required_value(parser, SkipSet::EMPTY, &equals)?);
        }

        let end = default
            .as_ref()
            .map(|value| value.span().end)
            .unwrap_or(param_type.span.end);
        params.push(FunctionParameter {
            span: Span {
                start: param_name.span.start,
                end,
            },
            name: param_name,
            param_type,
            default,
        });

        parser.eat(TokenType::Operator, &[","]);
    }

    parser.expect(TokenType::Operator, &[":"])?;
    let return_type = parse_types(parser)?;

    let block = block_statement(parser, false)?;

    Ok(FunctionStatement {
        span: Span {
            start: keyword.span.start,
            end: block.span.end,
        },
        name,
        params,
        return_type,
        block,
    })
}

pub fn interface_statement(parser: &mut Parser) -> Result<InterfaceStatement, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["interface"])?;

    let name = identifier_expression(parser)?;

    parser.expect(TokenType::Braces, &["{"])?;

    let mut elements = vec![];
    let end;
    loop {
        if let Some(close) = parser.eat(TokenType::Braces, &["}"]) {
            end = close.span.end;
            break;
        }

        let element_name = identifier_expression(parser)?;
        parser.expect(TokenType::Operator, &[":"])?;
        let element_type = parse_types(parser)?;

        elements.push(InterfaceElement {
            span: Span {
                start: element_name.span.start,
                end: element_type.span.end,
            },
            name: element_name,
            element_type,
        });

        parser.eat(TokenType::Operator, &[","]);
    }

    Ok(InterfaceStatement {
        span: Span {
            start: keyword.span.start,
            end,
        },
        name,
        elements,
    })
}

pub fn while_statement(parser: &mut Parser) -> Result<WhileStatement, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["while"])?;

    let open = parser.expect(TokenType::Parenthesis, &["("])?;
    let condition = required_value(parser, SkipSet::EMPTY, &open)?;
    parser.expect(TokenType::Parenthesis, &[")"])?;

    let block = block_statement(parser, false)?;

    Ok(WhileStatement {
        span: Span {
            start: keyword.span.start,
            end: block.span.end,
        },
        condition,
        block,
    })
}

/// `if` with an optional chained `else if` (recursively another condition
/// statement) or terminal bare `else` block.
pub fn condition_statement(parser: &mut Parser) -> Result<ConditionStatement, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["if"])?;

    let open = parser.expect(TokenType::Parenthesis, &["("])?;
    let condition = required_value(parser, SkipSet::EMPTY, &open)?;
    parser.expect(TokenType::Parenthesis, &[")"])?;

    let block = block_statement(parser, false)?;

    let else_body = if parser.check(TokenType::Keyword, &["else"], 0).is_some() {
        let else_token = parser.expect(TokenType::Keyword, &["else"])?;
        if parser.check(TokenType::Keyword, &["if"], 0).is_some() {
            Some(Box::new(condition_statement(parser)?))
        } else {
            let else_block = block_statement(parser, false)?;
            Some(Box::new(ConditionStatement {
                span: Span {
                    start: else_token.span.start,
                    end: else_block.span.end,
                },
                condition: None,
                block: else_block,
                else_body: None,
            }))
        }
    } else {
        None
    };

    let end = else_body
        .as_ref()
        .map(|body| body.span.end)
        .unwrap_or(block.span.end);

    Ok(ConditionStatement {
        span: Span {
            start: keyword.span.start,
            end,
        },
        condition: Some(condition),
        block,
        else_body,
    })
}

pub fn for_statement(parser: &mut Parser) -> Result<ForStatement, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["for"])?;

    parser.expect(TokenType::Parenthesis, &["("])?;
    let variable = initialize_variable_statement(parser)?;
    let comma = parser.expect(TokenType::Operator, &[","])?;
    let condition = required_value(parser, SkipSet::EMPTY, &comma)?;
    let comma = parser.expect(TokenType::Operator, &[","])?;
    let increment = required_value(parser, SkipSet::EMPTY, &comma)?;
    parser.expect(TokenType::Parenthesis, &[")"])?;

    let block = block_statement(parser, false)?;

    Ok(ForStatement {
        span: Span {
            start: keyword.span.start,
            end: block.span.end,
        },
        variable,
        condition,
        increment,
        block,
    })
}

/// `extends`/`implements` base. A call or indexing form is not a valid
/// base; it is reported as a non-fatal error and the class keeps parsing.
fn class_base(parser: &mut Parser, what: &str) -> Result<Option<AccessExpression>, Error> {
    let result = access_expression(parser, false, false, false)?;

    match result {
        AccessExpression::Call(_) | AccessExpression::Index(_) => {
            let position = result.span().start;
            parser.errors.push(Error::new(
                ErrorImpl::InvalidClassBase {
                    what: String::from(what),
                },
                position,
            ));
            Ok(None)
        }
        base => Ok(Some(base)),
    }
}

/// Class declaration: optional `extends`/`implements` bases, then a brace
/// body alternating property declarations and methods. A method literally
/// named `init` becomes the class initializer.
pub fn class_statement(parser: &mut Parser) -> Result<ClassStatement, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["class"])?;

    let name = identifier_expression(parser)?;

    let extends = if parser.eat(TokenType::Keyword, &["extends"]).is_some() {
        class_base(parser, "extend")?
    } else {
        None
    };

    let implements = if parser.eat(TokenType::Keyword, &["implements"]).is_some() {
        class_base(parser, "implement")?
    } else {
        None
    };

    parser.expect(TokenType::Braces, &["{"])?;

    let mut properties = vec![];
    let mut methods = vec![];
    let mut initializer = None;
    let end;
    loop {
        if let Some(close) = parser.eat(TokenType::Braces, &["}"]) {
            end = close.span.end;
            break;
        }

        if parser
            .check(TokenType::Keyword, &["const", "let"], 0)
            .is_some()
        {
            properties.push(initialize_variable_statement(parser)?);
        } else {
            let function = function_statement(parser, false)?;
            let is_init = function
                .name
                .as_ref()
                .map(|name| name.name == "init")
                .unwrap_or(false);
            if is_init {
                initializer = Some(function);
            } else {
                methods.push(function);
            }
        }
    }

    Ok(ClassStatement {
        span: Span {
            start: keyword.span.start,
            end,
        },
        name,
        extends,
        implements,
        properties,
        methods,
        initializer,
    })
}

/// Brace-delimited statement sequence, or the unbraced module-level variant
/// when `use_for_global_block` is set.
pub fn block_statement(
    parser: &mut Parser,
    use_for_global_block: bool,
) -> Result<BlockStatement, Error> {
    let mut start = Position::null();
    if !use_for_global_block {
        start = parser.expect(TokenType::Braces, &["{"])?.span.start;
    }

    let mut body = vec![];
    loop {
        let (token_kind, token_value) = match parser.get(0) {
            None => break,
            Some(token) => (token.kind, token.value.clone()),
        };
        if token_kind == TokenType::Braces {
            break;
        }

        let mut owns_rest_of_block = false;
        if token_kind == TokenType::Keyword {
            match token_value.as_str() {
                "let" | "const" => {
                    body.push(Node::InitializeVariable(initialize_variable_statement(
                        parser,
                    )?));
                    owns_rest_of_block = true;
                }
                "return" => {
                    let keyword = parser.expect(TokenType::Keyword, &["return"])?;
                    let value = returns_value(parser, true, SkipSet::EMPTY)?;
                    let end = value
                        .as_ref()
                        .map(|value| value.span().end)
                        .unwrap_or(keyword.span.end);
                    body.push(Node::Return(ReturnStatement {
                        span: Span {
                            start: keyword.span.start,
                            end,
                        },
                        value,
                    }));
                }
                "interface" => {
                    body.push(Node::Interface(interface_statement(parser)?));
                    owns_rest_of_block = true;
                }
                "while" => {
                    body.push(Node::While(while_statement(parser)?));
                    owns_rest_of_block = true;
                }
                "if" => {
                    body.push(Node::Condition(condition_statement(parser)?));
                    owns_rest_of_block = true;
                }
                "for" => {
                    body.push(Node::For(for_statement(parser)?));
                    owns_rest_of_block = true;
                }
                "class" => {
                    body.push(Node::Class(class_statement(parser)?));
                    owns_rest_of_block = true;
                }
                _ => {}
            }
        }

        if owns_rest_of_block {
            break;
        }

        let before = parser.snapshot();
        if let Some(value) = returns_value(parser, false, SkipSet::EMPTY)? {
            body.push(Node::Value(value));
        }
        if parser.snapshot() == before {
            // Nothing this block level can consume; let the caller decide.
            break;
        }
    }

    let end;
    if !use_for_global_block {
        end = parser.expect(TokenType::Braces, &["}"])?.span.end;
    } else {
        end = parser
            .prev()
            .map(|token| token.span.end)
            .unwrap_or(Position { line: 1, col: 1 });
    }

    Ok(BlockStatement {
        span: Span { start, end },
        body,
    })
}

fn import_statement(parser: &mut Parser) -> Result<ImportStatement, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["import"])?;

    let mut what = vec![identifier_expression(parser)?];
    while parser.eat(TokenType::Operator, &[","]).is_some() {
        what.push(identifier_expression(parser)?);
    }

    parser.expect(TokenType::Word, &["from"])?;
    let from = string_parser(parser)?;

    Ok(ImportStatement {
        span: Span {
            start: keyword.span.start,
            end: from.span.end,
        },
        what,
        from,
    })
}

fn export_statement(parser: &mut Parser) -> Result<ExportStatement, Error> {
    let keyword = parser.expect(TokenType::Keyword, &["export"])?;

    let mut what = vec![identifier_expression(parser)?];
    while parser.eat(TokenType::Operator, &[","]).is_some() {
        what.push(identifier_expression(parser)?);
    }

    let from = if parser.eat(TokenType::Word, &["from"]).is_some() {
        Some(string_parser(parser)?)
    } else {
        None
    };

    let end = from
        .as_ref()
        .map(|from| from.span.end)
        .unwrap_or(what[what.len() - 1].span.end);

    Ok(ExportStatement {
        span: Span {
            start: keyword.span.start,
            end,
        },
        what,
        from,
    })
}

/// The top-level module rule: everything the block grammar accepts plus
/// `import`/`export`, until end of input.
pub fn global_block_statement(parser: &mut Parser) -> Result<GlobalBlockStatement, Error> {
    let mut body = vec![];

    loop {
        let (token_kind, token_value) = match parser.get(0) {
            None => break,
            Some(token) => (token.kind, token.value.clone()),
        };

        let before = parser.snapshot();
        if token_kind == TokenType::Keyword && token_value == "import" {
            body.push(GlobalNode::Import(import_statement(parser)?));
        } else if token_kind == TokenType::Keyword && token_value == "export" {
            body.push(GlobalNode::Export(export_statement(parser)?));
        }

        let block = block_statement(parser, true)?;
        body.extend(block.body.into_iter().map(GlobalNode::Statement));

        if parser.snapshot() == before {
            let token = parser.get(0).expect("unconsumed token must exist");
            return Err(Error::new(
                ErrorImpl::UnexpectedSyntax {
                    token: token.value.clone(),
                },
                token.span.start,
            ));
        }
    }

    let end = parser
        .prev()
        .map(|token| token.span.end)
        .unwrap_or(Position { line: 1, col: 1 });

    Ok(GlobalBlockStatement {
        body,
        span: Span {
            start: Position { line: 1, col: 1 },
            end,
        },
    })
}
