/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for value-producing expression nodes
/// - statements: Definitions for statement and block nodes
/// - types: Definitions for type annotation nodes
///
/// Every node is a closed tagged union or a struct carrying its semantic
/// fields plus a `Span`; nodes are built bottom-up during a single descent
/// and never mutated afterwards.
pub mod expressions;
pub mod statements;
pub mod types;
