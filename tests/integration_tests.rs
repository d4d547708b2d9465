//! Integration tests for the whole front end.
//!
//! These tests verify that the complete pipeline works correctly from
//! source code through tokenization, parsing and the semantic checking
//! pass.

use slang::{
    ast::{
        expressions::ReturnsValue,
        statements::{GlobalNode, Node},
        types::{PrimitiveType, TypeTerm},
    },
    lexer::{lexer::tokenize, rules::DEFAULT_RULES},
    parser::parser::parse,
    type_checker::type_checker::type_check,
};

#[test]
fn test_pipeline_simple_program() {
    let source = "let x := 42";
    let lexed = tokenize(source, &DEFAULT_RULES);
    assert!(lexed.errors.is_empty());

    let (_, result) = parse(lexed.tokens);
    let ast = result.unwrap();

    let (checker, error) = type_check(&ast);
    assert!(error.is_none());
    assert!(checker.state.get("x").is_some());
}

#[test]
fn test_pipeline_module_with_main() {
    let source = "\
import print from \"core\"

func main(): i32 {
return 0
}

export main
";
    let lexed = tokenize(source, &DEFAULT_RULES);
    assert!(lexed.errors.is_empty());

    let (parser, result) = parse(lexed.tokens);
    let ast = result.unwrap();
    assert!(parser.errors.is_empty());

    // import, function, export
    assert_eq!(ast.body.len(), 3);
    assert!(matches!(ast.body[0], GlobalNode::Import(_)));
    assert!(matches!(ast.body[2], GlobalNode::Export(_)));

    let main = match &ast.body[1] {
        GlobalNode::Statement(Node::Value(ReturnsValue::Function(function))) => function,
        other => panic!("expected the main function, got {:?}", other),
    };
    assert_eq!(main.name.as_ref().unwrap().name, "main");
    assert!(main.params.is_empty());
    assert_eq!(
        main.return_type.value,
        vec![TypeTerm::Primitive(PrimitiveType::I32)]
    );

    let (checker, error) = type_check(&ast);
    assert!(error.is_none());
    assert!(checker.state.get("main").is_some());
    assert!(checker.state.get("print").is_some());
}

#[test]
fn test_pipeline_duplicate_function_declaration() {
    let source = "func twice(): void { }\nfunc twice(): void { }";
    let lexed = tokenize(source, &DEFAULT_RULES);
    let (_, result) = parse(lexed.tokens);
    let ast = result.unwrap();

    let (_, error) = type_check(&ast);
    let error = error.expect("expected a duplicate declaration error");
    assert_eq!(error.get_error_name(), "FunctionAlreadyDeclared");
}

#[test]
fn test_pipeline_duplicate_variable_declaration() {
    let source = "let x := 1\nlet x := 2";
    let lexed = tokenize(source, &DEFAULT_RULES);
    let (_, result) = parse(lexed.tokens);
    let ast = result.unwrap();

    let (_, error) = type_check(&ast);
    let error = error.expect("expected a duplicate declaration error");
    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
}

#[test]
fn test_pipeline_lexical_error_reports_position() {
    let source = "let x := @";
    let lexed = tokenize(source, &DEFAULT_RULES);

    assert_eq!(lexed.errors.len(), 1);
    let error = &lexed.errors[0];
    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().col, 10);
}

#[test]
fn test_pipeline_parse_error_aborts() {
    let source = "func broken(: void { }";
    let lexed = tokenize(source, &DEFAULT_RULES);
    assert!(lexed.errors.is_empty());

    let (_, result) = parse(lexed.tokens);
    assert!(result.is_err());
}

#[test]
fn test_pipeline_independent_calls_share_nothing() {
    // Two runs over different inputs behave as if each were the only one.
    let first = tokenize("let a := 1", &DEFAULT_RULES);
    let second = tokenize("let b := 2", &DEFAULT_RULES);

    assert_eq!(first.tokens.len(), 4);
    assert_eq!(second.tokens.len(), 4);
    assert_eq!(first.tokens[1].value, "a");
    assert_eq!(second.tokens[1].value, "b");

    let (_, first_ast) = parse(first.tokens);
    let (_, second_ast) = parse(second.tokens);
    assert!(first_ast.is_ok());
    assert!(second_ast.is_ok());
}

#[test]
fn test_pipeline_class_module() {
    let source = "\
class Counter {
let count: i32 = 0
func init(): void { }
func bump(): void {
count += 1
}
}
";
    let lexed = tokenize(source, &DEFAULT_RULES);
    assert!(lexed.errors.is_empty());

    let (parser, result) = parse(lexed.tokens);
    let ast = result.unwrap();
    assert!(parser.errors.is_empty());

    let class = match &ast.body[0] {
        GlobalNode::Statement(Node::Class(class)) => class,
        other => panic!("expected a class, got {:?}", other),
    };
    assert_eq!(class.name.name, "Counter");
    assert_eq!(class.properties.len(), 1);
    assert_eq!(class.methods.len(), 1);
    assert!(class.initializer.is_some());

    let (checker, error) = type_check(&ast);
    assert!(error.is_none());
    assert!(checker.state.get("Counter").is_some());
}
