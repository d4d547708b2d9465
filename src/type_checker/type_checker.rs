use std::collections::HashMap;

use crate::{
    ast::{
        expressions::ReturnsValue,
        statements::{
            ClassStatement, FunctionStatement, GlobalBlockStatement, GlobalNode,
            InitializeVariableStatement, InterfaceStatement, Node,
        },
    },
    errors::errors::{Error, ErrorImpl},
};

/// A named declaration visible in a scope.
#[derive(Debug, Clone)]
pub enum Declaration {
    Variable(InitializeVariableStatement),
    Function(FunctionStatement),
    Class(ClassStatement),
    Interface(InterfaceStatement),
    /// Brought into scope by an `import`; the declaring module is elsewhere.
    Imported,
}

/// One lexical scope. A child scope starts out with its parent's entries.
#[derive(Debug, Clone, Default)]
pub struct State {
    entries: HashMap<String, Declaration>,
}

impl State {
    pub fn new() -> State {
        State {
            entries: HashMap::new(),
        }
    }

    pub fn child(parent: &State) -> State {
        State {
            entries: parent.entries.clone(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.entries.get(name)
    }

    /// Records a declaration; returns false when the name already exists.
    pub fn declare(&mut self, name: &str, declaration: Declaration) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(String::from(name), declaration);
        true
    }
}

pub struct TypeChecker {
    pub state: State,
}

impl TypeChecker {
    fn new() -> TypeChecker {
        TypeChecker { state: State::new() }
    }

    fn declare_function(&mut self, function: &FunctionStatement) -> Option<Error> {
        let name = function.name.as_ref()?;
        if !self
            .state
            .declare(&name.name, Declaration::Function(function.clone()))
        {
            return Some(Error::new(
                ErrorImpl::FunctionAlreadyDeclared {
                    function: name.name.clone(),
                },
                function.span.start,
            ));
        }
        None
    }

    fn declare_node(&mut self, node: &Node) -> Option<Error> {
        match node {
            Node::InitializeVariable(init) => {
                if !self
                    .state
                    .declare(&init.name.name, Declaration::Variable(init.clone()))
                {
                    return Some(Error::new(
                        ErrorImpl::VariableAlreadyDeclared {
                            variable: init.name.name.clone(),
                        },
                        init.span.start,
                    ));
                }
                None
            }
            // Top-level function declarations arrive as expression nodes.
            Node::Value(ReturnsValue::Function(function)) => self.declare_function(function),
            Node::Function(function) => self.declare_function(function),
            Node::Class(class) => {
                if !self
                    .state
                    .declare(&class.name.name, Declaration::Class(class.clone()))
                {
                    return Some(Error::new(
                        ErrorImpl::VariableAlreadyDeclared {
                            variable: class.name.name.clone(),
                        },
                        class.span.start,
                    ));
                }
                None
            }
            Node::Interface(interface) => {
                if !self
                    .state
                    .declare(&interface.name.name, Declaration::Interface(interface.clone()))
                {
                    return Some(Error::new(
                        ErrorImpl::VariableAlreadyDeclared {
                            variable: interface.name.name.clone(),
                        },
                        interface.span.start,
                    ));
                }
                None
            }
            _ => None,
        }
    }
}

/// Walks the module's top level, recording declarations and reporting the
/// first duplicate. Everything deeper is deliberately unchecked for now.
pub fn type_check(ast: &GlobalBlockStatement) -> (TypeChecker, Option<Error>) {
    let mut checker = TypeChecker::new();

    for node in &ast.body {
        let error = match node {
            GlobalNode::Statement(node) => checker.declare_node(node),
            GlobalNode::Import(import) => {
                let mut error = None;
                for name in &import.what {
                    if !checker.state.declare(&name.name, Declaration::Imported) {
                        error = Some(Error::new(
                            ErrorImpl::VariableAlreadyDeclared {
                                variable: name.name.clone(),
                            },
                            name.span.start,
                        ));
                        break;
                    }
                }
                error
            }
            GlobalNode::Export(_) => None,
        };

        if let Some(error) = error {
            return (checker, Some(error));
        }
    }

    (checker, None)
}
