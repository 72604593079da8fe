//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Declarations and assignments
//! - If / if-else branches
//! - Loops with their header clauses
//! - Print and scan
//! - Expression precedence and conditions

use std::rc::Rc;

use crate::ast::node::{CondOp, Node, NodeKind, StepOp, TypeKind};
use crate::lexer::lexer::tokenize;

use super::parser::parse;

fn parse_source(source: &str) -> Node {
    let tokens = tokenize(source.to_string(), Some("test.val".to_string())).unwrap();
    parse(tokens, Rc::new("test.val".to_string())).unwrap()
}

/// The single top-level statement of a parsed program.
fn only_stmt(program: &Node) -> &Node {
    let block = &program.children()[0];
    assert_eq!(*block.kind(), NodeKind::Block);
    assert_eq!(block.children().len(), 1);
    &block.children()[0]
}

#[test]
fn test_parse_declaration() {
    let program = parse_source("giez x = 42;");
    let decl = only_stmt(&program);

    assert_eq!(*decl.kind(), NodeKind::Declaration { name: "x".to_string() });
    assert_eq!(decl.children().len(), 2);
    assert_eq!(*decl.children()[0].kind(), NodeKind::TypeTag { kind: TypeKind::Integer });
    assert_eq!(*decl.children()[1].kind(), NodeKind::Integer { value: 42 });
}

#[test]
fn test_parse_string_declaration() {
    let program = parse_source("iderennon s = \"oi mundo\";");
    let decl = only_stmt(&program);

    assert_eq!(*decl.kind(), NodeKind::Declaration { name: "s".to_string() });
    assert_eq!(*decl.children()[0].kind(), NodeKind::TypeTag { kind: TypeKind::Str });
    assert_eq!(
        *decl.children()[1].kind(),
        NodeKind::Str { value: "oi mundo".to_string() }
    );
}

#[test]
fn test_parse_scan_declaration() {
    let program = parse_source("giez x = scan(giez);");
    let decl = only_stmt(&program);

    let scan = &decl.children()[1];
    assert_eq!(*scan.kind(), NodeKind::Scan);
    assert_eq!(scan.children().len(), 1);
    assert_eq!(*scan.children()[0].kind(), NodeKind::TypeTag { kind: TypeKind::Integer });
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("x = x + 1;");
    let assignment = only_stmt(&program);

    assert_eq!(*assignment.kind(), NodeKind::Assignment { name: "x".to_string() });
    assert_eq!(assignment.children().len(), 1);
    assert_eq!(*assignment.children()[0].kind(), NodeKind::Binary { op: '+' });
}

#[test]
fn test_parse_binary_precedence() {
    let program = parse_source("x = 5 + 3 * 2;");
    let assignment = only_stmt(&program);

    let sum = &assignment.children()[0];
    assert_eq!(*sum.kind(), NodeKind::Binary { op: '+' });
    assert_eq!(*sum.children()[0].kind(), NodeKind::Integer { value: 5 });

    let product = &sum.children()[1];
    assert_eq!(*product.kind(), NodeKind::Binary { op: '*' });
    assert_eq!(*product.children()[0].kind(), NodeKind::Integer { value: 3 });
    assert_eq!(*product.children()[1].kind(), NodeKind::Integer { value: 2 });
}

#[test]
fn test_parse_unary() {
    let program = parse_source("x = -y;");
    let assignment = only_stmt(&program);

    let unary = &assignment.children()[0];
    assert_eq!(*unary.kind(), NodeKind::Unary { op: '-' });
    assert_eq!(*unary.children()[0].kind(), NodeKind::Identifier { name: "y".to_string() });
}

#[test]
fn test_parse_grouping() {
    let program = parse_source("x = (5 + 3) * 2;");
    let assignment = only_stmt(&program);

    let product = &assignment.children()[0];
    assert_eq!(*product.kind(), NodeKind::Binary { op: '*' });
    assert_eq!(*product.children()[0].kind(), NodeKind::Binary { op: '+' });
    assert_eq!(*product.children()[1].kind(), NodeKind::Integer { value: 2 });
}

#[test]
fn test_parse_if() {
    let program = parse_source("if (x < 10) { print(x); }");
    let branch = only_stmt(&program);

    assert_eq!(*branch.kind(), NodeKind::If);
    assert_eq!(branch.children().len(), 2);
    assert_eq!(*branch.children()[0].kind(), NodeKind::Condition { op: CondOp::Less });
    assert_eq!(*branch.children()[1].kind(), NodeKind::Block);
}

#[test]
fn test_parse_if_else() {
    let program = parse_source("if (x == 1) { print(\"um\"); } else { print(\"outro\"); }");
    let branch = only_stmt(&program);

    assert_eq!(*branch.kind(), NodeKind::IfElse);
    assert_eq!(branch.children().len(), 3);
    assert_eq!(*branch.children()[0].kind(), NodeKind::Condition { op: CondOp::Equals });
    assert_eq!(*branch.children()[1].kind(), NodeKind::Block);
    assert_eq!(*branch.children()[2].kind(), NodeKind::Block);
}

#[test]
fn test_parse_logical_condition() {
    let program = parse_source("if ((x < 1 || x > 9)) { print(x); }");
    let branch = only_stmt(&program);

    let cond = &branch.children()[0];
    assert_eq!(*cond.kind(), NodeKind::Condition { op: CondOp::Or });
    assert_eq!(*cond.children()[0].kind(), NodeKind::Condition { op: CondOp::Less });
    assert_eq!(*cond.children()[1].kind(), NodeKind::Condition { op: CondOp::Greater });
}

#[test]
fn test_parse_parenthesized_factor_in_condition() {
    let program = parse_source("if ((x) < 10) { print(x); }");
    let branch = only_stmt(&program);

    let cond = &branch.children()[0];
    assert_eq!(*cond.kind(), NodeKind::Condition { op: CondOp::Less });
    assert_eq!(*cond.children()[0].kind(), NodeKind::Identifier { name: "x".to_string() });
}

#[test]
fn test_parse_loop() {
    let program = parse_source("loop (giez i = 0; i < 10; i++) { print(i); }");
    let loop_node = only_stmt(&program);

    assert_eq!(*loop_node.kind(), NodeKind::Loop);
    assert_eq!(loop_node.children().len(), 4);
    assert_eq!(
        *loop_node.children()[0].kind(),
        NodeKind::Declaration { name: "i".to_string() }
    );
    assert_eq!(*loop_node.children()[1].kind(), NodeKind::Condition { op: CondOp::Less });
    assert_eq!(
        *loop_node.children()[2].kind(),
        NodeKind::Pass { name: "i".to_string(), op: StepOp::Increment }
    );
    assert_eq!(*loop_node.children()[3].kind(), NodeKind::Block);
}

#[test]
fn test_parse_print_string() {
    let program = parse_source("print(\"oi\");");
    let print = only_stmt(&program);

    assert_eq!(*print.kind(), NodeKind::Print);
    assert_eq!(*print.children()[0].kind(), NodeKind::Str { value: "oi".to_string() });
}

#[test]
fn test_parse_statement_sequence_order() {
    let program = parse_source("giez a = 1;\ngiez b = 2;\na = b;");
    let block = &program.children()[0];

    assert_eq!(block.children().len(), 3);
    assert_eq!(*block.children()[0].kind(), NodeKind::Declaration { name: "a".to_string() });
    assert_eq!(*block.children()[1].kind(), NodeKind::Declaration { name: "b".to_string() });
    assert_eq!(*block.children()[2].kind(), NodeKind::Assignment { name: "a".to_string() });
}

#[test]
fn test_identifier_line_is_reference_line() {
    let program = parse_source("giez a = 1;\nif (a < 2) {\n    print(a);\n}");
    let block = &program.children()[0];

    let branch = &block.children()[1];
    let print = &branch.children()[1].children()[0];
    let ident = &print.children()[0];

    assert_eq!(*ident.kind(), NodeKind::Identifier { name: "a".to_string() });
    assert_eq!(ident.line(), 3);
}

#[test]
fn test_parse_error_on_missing_semicolon() {
    let tokens = tokenize("giez x = 1".to_string(), Some("test.val".to_string())).unwrap();
    let result = parse(tokens, Rc::new("test.val".to_string()));

    assert!(result.is_err());
}

#[test]
fn test_parse_error_on_stray_token() {
    let tokens = tokenize("else".to_string(), Some("test.val".to_string())).unwrap();
    let result = parse(tokens, Rc::new("test.val".to_string()));

    assert!(result.is_err());
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}
