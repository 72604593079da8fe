use crate::{
    ast::node::{Node, NodeKind},
    errors::errors::SemanticError,
};

use super::reporter::Reporter;

/// Type-mix checker.
///
/// Carries no state between nodes. For every binary operator it looks
/// only at the literal shape of the two immediate children: pairing an
/// integer literal with anything that is not an integer literal is
/// reported at the operator's line. Identifiers and nested expressions
/// are not resolved.
pub struct TypeMixChecker;

impl TypeMixChecker {
    pub fn new() -> Self {
        TypeMixChecker
    }

    pub fn check(&self, node: &Node, reporter: &mut Reporter) {
        for child in node.children() {
            self.check(child, reporter);
        }

        match node.kind() {
            NodeKind::Binary { .. } => {
                if let [left, right] = node.children() {
                    let left_is_integer = matches!(left.kind(), NodeKind::Integer { .. });
                    let right_is_integer = matches!(right.kind(), NodeKind::Integer { .. });

                    if left_is_integer != right_is_integer {
                        reporter.report(node.line(), SemanticError::MixedTypes);
                    }
                }
            }
            NodeKind::Program
            | NodeKind::Block
            | NodeKind::Declaration { .. }
            | NodeKind::Assignment { .. }
            | NodeKind::Identifier { .. }
            | NodeKind::Integer { .. }
            | NodeKind::Float { .. }
            | NodeKind::Boolean { .. }
            | NodeKind::Str { .. }
            | NodeKind::Unary { .. }
            | NodeKind::Condition { .. }
            | NodeKind::If
            | NodeKind::IfElse
            | NodeKind::Loop
            | NodeKind::Print
            | NodeKind::Scan
            | NodeKind::Pass { .. }
            | NodeKind::TypeTag { .. } => {}
        }
    }
}
