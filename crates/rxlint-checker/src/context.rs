//! Per-file lint state shared by the rules.

use crate::type_query::{TypeEnvironment, TypeQuery};
use rxlint_common::{Diagnostic, DiagnosticCategory, DiagnosticMessage};
use rxlint_parser::{NodeArena, NodeIndex};
use tracing::debug;

/// Everything a rule sees while checking one file.
pub struct LintContext<'a> {
    pub arena: &'a NodeArena,
    pub types: TypeQuery<'a>,
    pub file_name: String,
    /// Category given to every diagnostic reported through this context.
    pub category: DiagnosticCategory,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(arena: &'a NodeArena, env: &'a dyn TypeEnvironment, file_name: impl Into<String>) -> Self {
        Self {
            arena,
            types: TypeQuery::new(env),
            file_name: file_name.into(),
            category: DiagnosticCategory::Error,
            diagnostics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    /// Report `message` anchored at `node`.
    ///
    /// Nodes without a span (absent or synthesized) are reported at offset 0
    /// with zero length rather than dropped.
    pub fn report(&mut self, node: NodeIndex, message: &DiagnosticMessage, args: &[&str]) {
        let span = self.arena.span(node).unwrap_or_default();
        debug!(
            rule = message.rule,
            file = %self.file_name,
            start = span.start,
            length = span.len(),
            "report"
        );
        let diagnostic = Diagnostic::from_message(
            message,
            self.file_name.clone(),
            span.start,
            span.len(),
            args,
        )
        .with_category(self.category);
        self.diagnostics.push(diagnostic);
    }

    /// Take the diagnostics reported so far.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
