//! Lint rules.
//!
//! Each rule implements [`Rule`]: static metadata plus a `check` pass over
//! one file. Rules hold only their compiled options, so one instance can
//! check many files in parallel.

use crate::context::LintContext;
use crate::error::ConfigError;
use rxlint_common::DiagnosticCategory;
use rxlint_parser::NodeIndex;
use serde::{Deserialize, Serialize};

pub mod no_unsafe_subject_next;
pub mod suffix_subjects;

pub use no_unsafe_subject_next::NoUnsafeSubjectNext;
pub use suffix_subjects::{SuffixSubjects, SuffixSubjectsConfig, SuffixSubjectsOptions};

/// Severity of a configured rule.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Off,
    Warn,
    #[default]
    Error,
}

impl Severity {
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        match text {
            "off" => Ok(Self::Off),
            "warn" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(ConfigError::InvalidSeverity(other.to_string())),
        }
    }

    /// Diagnostic category for an enabled severity.
    pub const fn category(self) -> Option<DiagnosticCategory> {
        match self {
            Self::Off => None,
            Self::Warn => Some(DiagnosticCategory::Warning),
            Self::Error => Some(DiagnosticCategory::Error),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Static metadata for a rule.
#[derive(Clone, Copy, Debug)]
pub struct RuleMeta {
    /// Rule name, e.g. `suffix-subjects`.
    pub name: &'static str,
    pub description: &'static str,
    /// Whether the rule accepts an options object.
    pub has_options: bool,
}

/// A lint rule.
pub trait Rule: Send + Sync {
    fn meta(&self) -> &'static RuleMeta;

    /// Check the file rooted at `root`, reporting into `ctx`.
    fn check(&self, ctx: &mut LintContext<'_>, root: NodeIndex);
}

/// Metadata of every built-in rule.
pub static ALL_RULES: &[&RuleMeta] = &[
    &no_unsafe_subject_next::META,
    &suffix_subjects::META,
];

/// Look up a built-in rule by name.
pub fn find_rule_meta(name: &str) -> Option<&'static RuleMeta> {
    ALL_RULES.iter().copied().find(|meta| meta.name == name)
}

/// Instantiate a built-in rule from its name and raw JSON options.
pub fn create_rule(
    name: &str,
    options: Option<&serde_json::Value>,
) -> Result<Box<dyn Rule>, ConfigError> {
    match name {
        no_unsafe_subject_next::NAME => {
            if let Some(options) = options.filter(|value| !value.is_null()) {
                return Err(ConfigError::InvalidRuleOptions {
                    rule: name.to_string(),
                    source: serde::de::Error::custom(format!(
                        "rule takes no options, got {options}"
                    )),
                });
            }
            Ok(Box::new(NoUnsafeSubjectNext))
        }
        suffix_subjects::NAME => {
            let options = match options {
                Some(value) => SuffixSubjectsOptions::from_value(value)?,
                None => SuffixSubjectsOptions::default(),
            };
            Ok(Box::new(SuffixSubjects::new(options.compile()?)))
        }
        other => Err(ConfigError::UnknownRule(other.to_string())),
    }
}
