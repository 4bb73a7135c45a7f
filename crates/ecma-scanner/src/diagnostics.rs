//! Error sinks.
//!
//! The scanner never stops on malformed input. Every problem is handed to
//! an [`ErrorSink`] together with the offending span, and scanning carries
//! on with a best-effort token.

use crate::span::TokenSpan;
use ecma_common::{Diagnostic, DiagnosticCategory, JsError};
use tracing::debug;

/// Receiver of scanner (and parser) diagnostics. Fire-and-continue: the
/// reporter does not wait on, or react to, anything the sink does.
pub trait ErrorSink {
    fn report(&mut self, error: JsError, span: &TokenSpan);
}

impl<T: ErrorSink + ?Sized> ErrorSink for &mut T {
    fn report(&mut self, error: JsError, span: &TokenSpan) {
        (**self).report(error, span);
    }
}

impl<T: ErrorSink + ?Sized> ErrorSink for Box<T> {
    fn report(&mut self, error: JsError, span: &TokenSpan) {
        (**self).report(error, span);
    }
}

/// Sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreErrors;

impl ErrorSink for IgnoreErrors {
    fn report(&mut self, _error: JsError, _span: &TokenSpan) {}
}

/// Collects diagnostics in report order, resolving each location as it
/// arrives.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
    /// Per-kind severity overrides.
    overrides: Vec<(JsError, DiagnosticCategory)>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `error` with `category` instead of its default severity.
    pub fn set_category(&mut self, error: JsError, category: DiagnosticCategory) {
        self.overrides.retain(|(e, _)| *e != error);
        self.overrides.push((error, category));
    }

    fn category_for(&self, error: JsError) -> DiagnosticCategory {
        self.overrides
            .iter()
            .find(|(e, _)| *e == error)
            .map_or(error.category(), |&(_, category)| category)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether any error-category diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Whether a diagnostic of `error` kind was reported.
    pub fn contains(&self, error: JsError) -> bool {
        self.diagnostics.iter().any(|d| d.error == error)
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

impl ErrorSink for DiagnosticCollection {
    fn report(&mut self, error: JsError, span: &TokenSpan) {
        let location = span.start_location();
        debug!(
            code = error.code(),
            start = span.start,
            end = span.end,
            line = location.line,
            column = location.column,
            "{}",
            error.message()
        );
        let category = self.category_for(error);
        self.diagnostics
            .push(Diagnostic::new(error, span.start, span.end, location).with_category(category));
    }
}

impl ErrorSink for Vec<(JsError, TokenSpan)> {
    fn report(&mut self, error: JsError, span: &TokenSpan) {
        self.push((error, span.clone()));
    }
}
