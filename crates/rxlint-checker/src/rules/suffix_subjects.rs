//! `suffix-subjects`: identifiers holding subjects must end with a suffix.
//!
//! ```typescript
//! const numbers = new Subject<number>();        // reported
//! const numbersSubject = new Subject<number>(); // fine
//! const numbersSubject$ = new Subject<number>(); // fine, one `$` allowed
//! ```
//!
//! The suffix comparison is case-insensitive. Which bindings are checked is
//! controlled by the `parameters`, `properties` and `variables` switches;
//! the `types` table exempts (or re-includes) types by name.

use super::{Rule, RuleMeta};
use crate::bindings::{BindingSwitches, collect_bindings};
use crate::context::LintContext;
use crate::error::ConfigError;
use crate::type_patterns::OrderedPatternList;
use indexmap::IndexMap;
use regex::Regex;
use rxlint_common::diagnostics::rule_messages::SUFFIX_SUBJECTS_FORBIDDEN;
use rxlint_parser::NodeIndex;
use rxlint_solver::TypePattern;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub const NAME: &str = "suffix-subjects";

pub static META: RuleMeta = RuleMeta {
    name: NAME,
    description: "Enforces the use of a suffix in subject identifiers.",
    has_options: true,
};

pub const DEFAULT_SUFFIX: &str = "Subject";

/// User-facing options, as written in the lint configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct SuffixSubjectsOptions {
    pub parameters: bool,
    pub properties: bool,
    pub suffix: String,
    /// Regular expression source to validate flag. Replaces the default
    /// `EventEmitter` exemption when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<IndexMap<String, bool>>,
    pub variables: bool,
}

impl Default for SuffixSubjectsOptions {
    fn default() -> Self {
        Self {
            parameters: true,
            properties: true,
            suffix: DEFAULT_SUFFIX.to_string(),
            types: None,
            variables: true,
        }
    }
}

impl SuffixSubjectsOptions {
    /// Deserialize options from the JSON value of a rule entry.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ConfigError> {
        Self::deserialize(value).map_err(|source| ConfigError::InvalidRuleOptions {
            rule: NAME.to_string(),
            source,
        })
    }

    /// Validate and compile into the form the rule runs with.
    pub fn compile(&self) -> Result<SuffixSubjectsConfig, ConfigError> {
        let suffix_regex = suffix_regex(&self.suffix)?;
        let types = OrderedPatternList::from_option(self.types.as_ref())?;
        Ok(SuffixSubjectsConfig {
            switches: BindingSwitches {
                parameters: self.parameters,
                properties: self.properties,
                variables: self.variables,
            },
            suffix: self.suffix.clone(),
            suffix_regex,
            types,
        })
    }
}

/// `<suffix>` optionally followed by one `$`, at the end of the name,
/// case-insensitive. The suffix is matched literally.
fn suffix_regex(suffix: &str) -> Result<Regex, ConfigError> {
    Regex::new(&format!(r"(?i){}\$?$", regex::escape(suffix))).map_err(|source| {
        ConfigError::InvalidSuffix {
            suffix: suffix.to_string(),
            source,
        }
    })
}

/// Compiled options.
#[derive(Clone, Debug)]
pub struct SuffixSubjectsConfig {
    pub switches: BindingSwitches,
    pub suffix: String,
    suffix_regex: Regex,
    pub types: OrderedPatternList,
}

impl SuffixSubjectsConfig {
    pub fn has_suffix(&self, name: &str) -> bool {
        self.suffix_regex.is_match(name)
    }
}

#[derive(Clone, Debug)]
pub struct SuffixSubjects {
    config: SuffixSubjectsConfig,
}

impl SuffixSubjects {
    pub fn new(config: SuffixSubjectsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuffixSubjectsConfig {
        &self.config
    }
}

impl Rule for SuffixSubjects {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check(&self, ctx: &mut LintContext<'_>, root: NodeIndex) {
        let arena = ctx.arena;
        let types = ctx.types;
        let subject = TypePattern::name("Subject");
        let config = &self.config;

        for occurrence in collect_bindings(arena, root) {
            if !occurrence.kind.is_enabled(config.switches) {
                continue;
            }
            let Some(name) = arena.name_text(occurrence.name) else {
                continue;
            };
            if config.has_suffix(&name) {
                continue;
            }
            let type_id = types.type_of(occurrence.type_node);
            if !types.could_be_type(type_id, &subject) {
                continue;
            }
            if !config.types.should_validate(&types, type_id) {
                trace!(name = %name, "exempted by types table");
                continue;
            }
            debug!(
                name = %name,
                kind = ?occurrence.kind,
                type_name = %types.display(type_id),
                "subject binding without suffix"
            );
            ctx.report(occurrence.name, &SUFFIX_SUBJECTS_FORBIDDEN, &[&config.suffix]);
        }
    }
}
