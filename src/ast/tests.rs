//! Unit tests for the AST node model and the graph renderer.

use super::node::{CondOp, Node, NodeKind, StepOp, TypeKind};
use super::render::render;

#[test]
fn test_append_preserves_order() {
    let mut block = Node::new(NodeKind::Block, 1);
    block.append(Node::new(NodeKind::Integer { value: 1 }, 1));
    block.append(Node::new(NodeKind::Integer { value: 2 }, 2));
    block.append(Node::new(NodeKind::Integer { value: 3 }, 3));

    let values: Vec<String> = block.children().iter().map(|c| c.render_label()).collect();
    assert_eq!(values, vec!["1", "2", "3"]);
}

#[test]
fn test_labels() {
    assert_eq!(Node::new(NodeKind::Program, 0).render_label(), "Program");
    assert_eq!(Node::new(NodeKind::Block, 0).render_label(), "stmts");
    assert_eq!(
        Node::new(NodeKind::Declaration { name: "a".to_string() }, 1).render_label(),
        "declaration"
    );
    assert_eq!(
        Node::new(NodeKind::Assignment { name: "a".to_string() }, 1).render_label(),
        "a="
    );
    assert_eq!(
        Node::new(NodeKind::Boolean { value: true }, 1).render_label(),
        "true"
    );
    assert_eq!(Node::new(NodeKind::Binary { op: '+' }, 1).render_label(), "+");
    assert_eq!(
        Node::new(NodeKind::Condition { op: CondOp::LessEquals }, 1).render_label(),
        "<="
    );
    assert_eq!(Node::new(NodeKind::If, 1).render_label(), "if");
    assert_eq!(Node::new(NodeKind::IfElse, 1).render_label(), "if-else");
    assert_eq!(Node::new(NodeKind::Loop, 1).render_label(), "loop");
    assert_eq!(Node::new(NodeKind::Scan, 1).render_label(), "scan");
    assert_eq!(
        Node::new(NodeKind::Pass { name: "i".to_string(), op: StepOp::Increment }, 1)
            .render_label(),
        "i++"
    );
    assert_eq!(
        Node::new(NodeKind::TypeTag { kind: TypeKind::Float }, 1).render_label(),
        "bevumbagon"
    );
}

#[test]
fn test_debug_renders_operators_recursively() {
    let mut sum = Node::new(NodeKind::Binary { op: '+' }, 1);
    sum.append(Node::new(NodeKind::Integer { value: 2 }, 1));
    let mut product = Node::new(NodeKind::Binary { op: '*' }, 1);
    product.append(Node::new(NodeKind::Identifier { name: "a".to_string() }, 1));
    product.append(Node::new(NodeKind::Integer { value: 3 }, 1));
    sum.append(product);

    assert_eq!(sum.render_debug(), "2+a*3");
}

#[test]
fn test_debug_renders_conditions() {
    let mut cond = Node::new(NodeKind::Condition { op: CondOp::Less }, 4);
    cond.append(Node::new(NodeKind::Identifier { name: "i".to_string() }, 4));
    cond.append(Node::new(NodeKind::Integer { value: 10 }, 4));

    assert_eq!(cond.render_debug(), "i<10");
}

#[test]
fn test_debug_defaults_to_label() {
    let mut print = Node::new(NodeKind::Print, 2);
    print.append(Node::new(NodeKind::Str { value: "oi".to_string() }, 2));

    assert_eq!(print.render_debug(), "print");
}

#[test]
fn test_render_children_before_parent() {
    let mut program = Node::new(NodeKind::Program, 0);
    let mut block = Node::new(NodeKind::Block, 1);
    block.append(Node::new(NodeKind::Integer { value: 7 }, 1));
    program.append(block);

    let text = render(&program);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "graph {",
            "N0[label=\"7\"];",
            "N1[label=\"stmts\"];",
            "N1--N0;",
            "N2[label=\"Program\"];",
            "N2--N1;",
            "}",
        ]
    );
}
