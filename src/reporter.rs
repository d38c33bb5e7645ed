use colored::Colorize;
use rxlint_common::{Diagnostic, DiagnosticCategory};

use crate::linter::SourceFile;

/// Renders diagnostics as `file:line:column - category rule: message`
/// followed by the offending source line with the span underlined.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn render(&self, file: &SourceFile, diagnostics: &[Diagnostic]) -> String {
        let mut out = String::new();
        for (index, diagnostic) in diagnostics.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            out.push_str(&self.format_diagnostic(file, diagnostic));
        }
        out
    }

    pub fn format_diagnostic(&self, file: &SourceFile, diagnostic: &Diagnostic) -> String {
        let text = file.arena.source_text();
        let (line, column) = line_and_column(text, diagnostic.start);

        let mut output = format!("{}:{}:{}", diagnostic.file, line, column);
        output.push_str(" - ");
        output.push_str(&self.format_category(diagnostic.category));
        output.push(' ');
        output.push_str(&self.format_rule(diagnostic.rule));
        output.push_str(": ");
        output.push_str(&diagnostic.message_text);

        if let Some(snippet) = self.format_snippet(text, diagnostic.start, diagnostic.length) {
            output.push_str(&snippet);
        }
        output
    }

    /// The source line containing `start`, with `~` under the span.
    fn format_snippet(&self, text: &str, start: u32, length: u32) -> Option<String> {
        if length == 0 {
            return None;
        }
        let start = start as usize;
        let line_start = text.get(..start)?.rfind('\n').map_or(0, |i| i + 1);
        let line_end = text[start..].find('\n').map_or(text.len(), |i| start + i);
        let line_text = &text[line_start..line_end];
        let (line_num, _) = line_and_column(text, start as u32);

        let prefix_width = text[line_start..start].chars().count();
        let span_end = (start + length as usize).min(line_end);
        let span_width = text.get(start..span_end).map_or(1, |span| span.chars().count().max(1));
        let underline = format!("{}{}", " ".repeat(prefix_width), "~".repeat(span_width));

        let underline_display = if self.color {
            underline.red().to_string()
        } else {
            underline
        };

        let mut snippet = String::new();
        snippet.push('\n');
        snippet.push_str(&format!("  {line_num:>3}   {line_text}"));
        snippet.push('\n');
        snippet.push_str(&format!("        {underline_display}"));
        Some(snippet)
    }

    fn format_category(&self, category: DiagnosticCategory) -> String {
        let label = match category {
            DiagnosticCategory::Error => "error",
            DiagnosticCategory::Warning => "warning",
            DiagnosticCategory::Suggestion => "suggestion",
            DiagnosticCategory::Message => "message",
        };

        if !self.color {
            return label.to_string();
        }

        match category {
            DiagnosticCategory::Error => label.red().bold().to_string(),
            DiagnosticCategory::Warning => label.yellow().bold().to_string(),
            DiagnosticCategory::Suggestion => label.blue().bold().to_string(),
            DiagnosticCategory::Message => label.cyan().bold().to_string(),
        }
    }

    fn format_rule(&self, rule: &str) -> String {
        if self.color {
            rule.bright_blue().to_string()
        } else {
            rule.to_string()
        }
    }
}

/// One-based line and column (in characters) of byte `offset`.
fn line_and_column(text: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(text.len());
    let before = text.get(..offset).unwrap_or(text);
    let line = before.matches('\n').count() as u32 + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() as u32 + 1;
    (line, column)
}
