//! Diagnostic types and message lookup for the lint rules.
//!
//! Message data lives in `data.rs`. Templates use `{0}`, `{1}`, ... placeholders
//! whose names are listed in `DiagnosticMessage::params`, so a diagnostic can
//! carry both the rendered text and the named interpolation data.

use serde::Serialize;

mod data;
pub use data::{DIAGNOSTIC_MESSAGES, diagnostic_codes, diagnostic_messages, rule_messages};

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

/// A lint diagnostic anchored at a sub-span of the offending node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
    /// Name of the rule that produced this diagnostic (e.g. `suffix-subjects`).
    pub rule: &'static str,
    /// Stable message identifier within the rule (e.g. `forbidden`).
    pub message_id: &'static str,
    /// Named interpolation data, in template parameter order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<(&'static str, String)>,
}

impl Diagnostic {
    /// Create a diagnostic from a message definition and its arguments.
    ///
    /// `args` are matched positionally against `message.params`; missing
    /// arguments leave their placeholders untouched.
    #[must_use]
    pub fn from_message(
        message: &DiagnosticMessage,
        file: String,
        start: u32,
        length: u32,
        args: &[&str],
    ) -> Self {
        let data = message
            .params
            .iter()
            .zip(args.iter())
            .map(|(name, value)| (*name, (*value).to_string()))
            .collect();
        Self {
            file,
            start,
            length,
            message_text: format_message(message.message, args),
            category: message.category,
            code: message.code,
            rule: message.rule,
            message_id: message.message_id,
            data,
        }
    }

    /// Override the category (severity) of this diagnostic.
    #[must_use]
    pub const fn with_category(mut self, category: DiagnosticCategory) -> Self {
        self.category = category;
        self
    }

    /// Look up a named interpolation value.
    pub fn data_value(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Format a diagnostic message by replacing {0}, {1}, etc. with arguments.
#[must_use]
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

/// A diagnostic message definition.
#[derive(Clone, Copy, Debug)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub rule: &'static str,
    pub message_id: &'static str,
    pub message: &'static str,
    /// Names of the `{0}`, `{1}`, ... placeholders in `message`.
    pub params: &'static [&'static str],
}

/// Look up a diagnostic message definition by code.
#[must_use]
pub fn get_diagnostic_message(code: u32) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES.iter().find(|m| m.code == code)
}

/// Look up a diagnostic message definition by rule name and message id.
#[must_use]
pub fn find_rule_message(rule: &str, message_id: &str) -> Option<&'static DiagnosticMessage> {
    DIAGNOSTIC_MESSAGES
        .iter()
        .find(|m| m.rule == rule && m.message_id == message_id)
}

/// Get the message template for a diagnostic code.
#[must_use]
pub fn get_message_template(code: u32) -> Option<&'static str> {
    get_diagnostic_message(code).map(|m| m.message)
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod tests;
