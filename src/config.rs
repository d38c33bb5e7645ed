//! Lint configuration.
//!
//! ```json
//! {
//!   "rules": {
//!     "no-unsafe-subject-next": "error",
//!     "suffix-subjects": ["warn", { "suffix": "Subject", "types": { "^EventEmitter$": false } }]
//!   }
//! }
//! ```
//!
//! A rule entry is a severity string (`off`, `warn`, `error`) or an array
//! holding the severity and, optionally, the rule's options object. Rule
//! names are checked when the configuration is loaded; options are
//! validated when a [`Linter`](crate::Linter) is built from it.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use rxlint_checker::rules::{ALL_RULES, find_rule_meta};
use rxlint_checker::{ConfigError, Severity};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Severity and raw options of one configured rule.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleEntry {
    pub severity: Severity,
    pub options: Option<Value>,
}

impl RuleEntry {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }

    fn from_value(rule: &str, value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::String(severity) => Ok(Self::new(Severity::parse(severity)?)),
            Value::Array(items) => match items.as_slice() {
                [Value::String(severity)] => Ok(Self::new(Severity::parse(severity)?)),
                [Value::String(severity), options] => {
                    Ok(Self::new(Severity::parse(severity)?).with_options(options.clone()))
                }
                _ => Err(malformed_entry(rule, value)),
            },
            _ => Err(malformed_entry(rule, value)),
        }
    }

    fn to_value(&self) -> Value {
        let severity = Value::String(self.severity.as_str().to_string());
        match &self.options {
            Some(options) => Value::Array(vec![severity, options.clone()]),
            None => severity,
        }
    }
}

fn malformed_entry(rule: &str, value: &Value) -> ConfigError {
    ConfigError::InvalidRuleOptions {
        rule: rule.to_string(),
        source: serde::de::Error::custom(format!(
            "expected a severity or [severity, options], got {value}"
        )),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(default)]
    rules: IndexMap<String, Value>,
}

/// Rule configuration, in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LintConfig {
    pub rules: IndexMap<String, RuleEntry>,
}

impl LintConfig {
    /// Every built-in rule at `severity` with default options.
    pub fn all_rules(severity: Severity) -> Self {
        let rules = ALL_RULES
            .iter()
            .map(|meta| (meta.name.to_string(), RuleEntry::new(severity)))
            .collect();
        Self { rules }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let mut rules = IndexMap::with_capacity(raw.rules.len());
        for (name, value) in &raw.rules {
            if find_rule_meta(name).is_none() {
                return Err(ConfigError::UnknownRule(name.clone()));
            }
            rules.insert(name.clone(), RuleEntry::from_value(name, value)?);
        }
        debug!(rules = rules.len(), "loaded lint configuration");
        Ok(Self { rules })
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid configuration {}", path.display()))
    }

    /// Set (or replace) a rule entry.
    pub fn set(&mut self, rule: &str, entry: RuleEntry) -> Result<(), ConfigError> {
        if find_rule_meta(rule).is_none() {
            return Err(ConfigError::UnknownRule(rule.to_string()));
        }
        self.rules.insert(rule.to_string(), entry);
        Ok(())
    }

    pub fn get(&self, rule: &str) -> Option<&RuleEntry> {
        self.rules.get(rule)
    }

    /// Rules whose severity is not `off`.
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleEntry)> {
        self.rules
            .iter()
            .filter(|(_, entry)| entry.severity != Severity::Off)
            .map(|(name, entry)| (name.as_str(), entry))
    }

    /// The configuration in its JSON form.
    pub fn to_value(&self) -> Value {
        let rules = self
            .rules
            .iter()
            .map(|(name, entry)| (name.clone(), entry.to_value()))
            .collect::<serde_json::Map<String, Value>>();
        serde_json::json!({ "rules": rules })
    }
}
