use crate::errors::errors::SemanticError;

/// One finding: a source line and the condition found there.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: u32,
    pub error: SemanticError,
}

/// Accumulates the semantic findings of one compilation unit.
///
/// The reporter is threaded by mutable reference through every checker
/// pass; there is no ambient global counter. Reporting never fails and
/// diagnostics are never retracted: the count only grows for the
/// lifetime of a run.
pub struct Reporter {
    unit: String,
    diagnostics: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new(unit: &str) -> Self {
        Reporter {
            unit: unit.to_string(),
            diagnostics: vec![],
        }
    }

    pub fn report(&mut self, line: u32, error: SemanticError) {
        self.diagnostics.push(Diagnostic { line, error });
    }

    pub fn count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Formats a diagnostic in the compatible wire format:
    /// `<unit>:<line>:0: semantic error: <message>`.
    pub fn format(&self, diagnostic: &Diagnostic) -> String {
        format!(
            "{}:{}:0: semantic error: {}",
            self.unit, diagnostic.line, diagnostic.error
        )
    }

    /// All diagnostics in wire format, in reporting order.
    pub fn rendered(&self) -> Vec<String> {
        self.diagnostics.iter().map(|d| self.format(d)).collect()
    }
}
