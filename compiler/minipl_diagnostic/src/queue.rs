//! Ordered collection of diagnostics for one run.
//!
//! Diagnostics are kept in the order they were reported. The pipeline
//! reports lexical errors, then syntax errors, then type errors, then
//! whatever the interpreter produced, and that order is what the user sees.

use crate::{Diagnostic, ErrorGuaranteed};

#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Count of diagnostics where `is_error()` holds.
    error_count: usize,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        DiagnosticQueue::default()
    }

    /// Record a diagnostic of any kind.
    pub fn push(&mut self, diag: Diagnostic) {
        if diag.is_error() {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
    }

    /// Record every diagnostic from `diags`.
    pub fn extend(&mut self, diags: impl IntoIterator<Item = Diagnostic>) {
        for diag in diags {
            self.push(diag);
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Proof of failure if any error was recorded.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Take every diagnostic in report order, leaving the queue empty.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.error_count = 0;
        std::mem::take(&mut self.diagnostics)
    }
}
