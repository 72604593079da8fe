use std::collections::HashSet;

/// A stack of lexical scopes, each a labelled set of declared names.
///
/// The stack always holds at least the root scope it was created with.
/// Lookup walks from the innermost scope outward; insertion always
/// targets the innermost scope.
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

struct Scope {
    label: String,
    names: HashSet<String>,
}

impl ScopeStack {
    pub fn new(label: &str) -> Self {
        ScopeStack {
            scopes: vec![Scope {
                label: label.to_string(),
                names: HashSet::new(),
            }],
        }
    }

    pub fn push(&mut self, label: &str) {
        self.scopes.push(Scope {
            label: label.to_string(),
            names: HashSet::new(),
        });
    }

    /// Pops the innermost scope. The root scope is never popped.
    pub fn pop(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// Inserts a name into the innermost scope, shadowing or duplicating
    /// without complaint; the checkers decide what duplication means.
    pub fn declare(&mut self, name: &str) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.names.insert(name.to_string());
        }
    }

    /// True if the name is declared in any active scope, searched from
    /// the innermost outward. A miss creates no binding.
    pub fn is_visible(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|scope| scope.names.contains(name))
    }

    /// True if the name is declared in the innermost scope only.
    pub fn in_current(&self, name: &str) -> bool {
        match self.scopes.last() {
            Some(scope) => scope.names.contains(name),
            None => false,
        }
    }

    pub fn current_label(&self) -> &str {
        match self.scopes.last() {
            Some(scope) => &scope.label,
            None => "",
        }
    }
}
