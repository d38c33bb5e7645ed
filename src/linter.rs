//! Running configured rules over source files.

use crate::config::LintConfig;
use rayon::prelude::*;
use rxlint_checker::rules::{Rule, create_rule};
use rxlint_checker::{ConfigError, LintContext, TypeEnvironment};
use rxlint_common::{Diagnostic, DiagnosticCategory};
use rxlint_parser::{NodeArena, NodeIndex};
use tracing::debug;

/// A syntax tree to lint.
pub struct SourceFile {
    pub name: String,
    pub arena: NodeArena,
    pub root: NodeIndex,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, arena: NodeArena, root: NodeIndex) -> Self {
        Self {
            name: name.into(),
            arena,
            root,
        }
    }
}

/// One file of a multi-file run, with the types of its nodes.
#[derive(Clone, Copy)]
pub struct LintInput<'a> {
    pub file: &'a SourceFile,
    pub env: &'a dyn TypeEnvironment,
}

struct ConfiguredRule {
    rule: Box<dyn Rule>,
    category: DiagnosticCategory,
}

/// Compiled rule set.
pub struct Linter {
    rules: Vec<ConfiguredRule>,
}

impl Linter {
    /// Instantiate every enabled rule of `config`, validating its options.
    pub fn from_config(config: &LintConfig) -> Result<Self, ConfigError> {
        let mut rules = Vec::new();
        for (name, entry) in config.enabled_rules() {
            let Some(category) = entry.severity.category() else {
                continue;
            };
            let rule = create_rule(name, entry.options.as_ref())?;
            rules.push(ConfiguredRule { rule, category });
        }
        debug!(rules = rules.len(), "linter ready");
        Ok(Self { rules })
    }

    /// Names of the enabled rules, in configuration order.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|configured| configured.rule.meta().name)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Diagnostics for one file, ordered by position.
    pub fn lint_file(&self, file: &SourceFile, env: &dyn TypeEnvironment) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for configured in &self.rules {
            let mut ctx = LintContext::new(&file.arena, env, file.name.as_str())
                .with_category(configured.category);
            configured.rule.check(&mut ctx, file.root);
            diagnostics.append(&mut ctx.take_diagnostics());
        }
        diagnostics.sort_by_key(|diagnostic| diagnostic.start);
        debug!(
            file = %file.name,
            diagnostics = diagnostics.len(),
            "linted file"
        );
        diagnostics
    }

    /// Lint independent files in parallel. The result is in input order.
    pub fn lint_files(&self, inputs: &[LintInput<'_>]) -> Vec<Vec<Diagnostic>> {
        inputs
            .par_iter()
            .map(|input| self.lint_file(input.file, input.env))
            .collect()
    }
}
