use crate::{
    ast::node::{Node, NodeKind},
    errors::errors::SemanticError,
};

use super::{reporter::Reporter, scope::ScopeStack};

/// Scope-aware declaration checker.
///
/// Walks the tree depth-first, children before parent and siblings in
/// `children` order, so a declaration becomes visible exactly to the
/// references that textually follow it (no forward references). An
/// identifier with no visible declaration is reported at its own line;
/// every use site is an independent finding.
pub struct DeclChecker {
    scopes: ScopeStack,
}

impl DeclChecker {
    pub fn new() -> Self {
        DeclChecker {
            scopes: ScopeStack::new("global"),
        }
    }

    pub fn check(&mut self, node: &Node, reporter: &mut Reporter) {
        match node.kind() {
            NodeKind::Loop => {
                // The init declaration, condition, post-step and body all
                // live in the loop's own scope.
                self.scopes.push("loop");
                for child in node.children() {
                    self.check(child, reporter);
                }
                self.scopes.pop();
            }
            NodeKind::If | NodeKind::IfElse => {
                // The condition stays in the enclosing scope; each body
                // gets a scope of its own.
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
            NodeKind::Identifier { name } => {
                if !self.scopes.is_visible(name) {
                    reporter.report(
                        node.line(),
                        SemanticError::Undefined { name: name.clone() },
                    );
                }
            }
            NodeKind::Declaration { name } => {
                // The initializer is checked before the name becomes
                // visible, so a self-reference is a miss.
                for child in node.children() {
                    self.check(child, reporter);
                }
                self.scopes.declare(name);
            }
            NodeKind::Program
            | NodeKind::Block
            | NodeKind::Assignment { .. }
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
