use crate::{
    ast::node::{Node, NodeKind},
    errors::errors::SemanticError,
};

use super::{reporter::Reporter, scope::ScopeStack};

/// Duplicate-declaration checker.
///
/// Maintains its own scope stack with the same push/pop boundaries as
/// the declaration checker, but tests the opposite condition: a
/// declaration whose name already exists in the innermost scope is
/// reported at the declaration's line. The name is inserted either way,
/// so a third occurrence reports against the second's presence rather
/// than once per earlier duplicate.
pub struct DuplicateChecker {
    scopes: ScopeStack,
}

impl DuplicateChecker {
    /// The caller names the starting scope ("global" from the driver);
    /// the label only feeds the diagnostic text.
    pub fn new(scope: &str) -> Self {
        DuplicateChecker {
            scopes: ScopeStack::new(scope),
        }
    }

    pub fn check(&mut self, node: &Node, reporter: &mut Reporter) {
        match node.kind() {
            NodeKind::Loop => {
                self.scopes.push("loop");
                for child in node.children() {
                    self.check(child, reporter);
                }
                self.scopes.pop();
            }
            NodeKind::If | NodeKind::IfElse => {
                let mut children = node.children().iter();
                if let Some(condition) = children.next() {
                    self.check(condition, reporter);
                }
                let mut label = "if";
                for body in children {
                    self.scopes.push(label);
                    self.check(body, reporter);
                    self.scopes.pop();
                    label = "else";
                }
            }
            NodeKind::Declaration { name } => {
                for child in node.children() {
                    self.check(child, reporter);
                }
                if self.scopes.in_current(name) {
                    reporter.report(
                        node.line(),
                        SemanticError::Duplicate {
                            name: name.clone(),
                            scope: self.scopes.current_label().to_string(),
                        },
                    );
                }
                self.scopes.declare(name);
            }
            NodeKind::Program
            | NodeKind::Block
            | NodeKind::Assignment { .. }
            | NodeKind::Identifier { .. }
            | NodeKind::Integer { .. }
            | NodeKind::Float { .. }
            | NodeKind::Boolean { .. }
            | NodeKind::Str { .. }
            | NodeKind::Unary { .. }
            | NodeKind::Binary { .. }
            | NodeKind::Condition { .. }
            | NodeKind::Print
            | NodeKind::Scan
            | NodeKind::Pass { .. }
            | NodeKind::TypeTag { .. } => {
                for child in node.children() {
                    self.check(child, reporter);
                }
            }
        }
    }
}
