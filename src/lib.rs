//! rxlint: type-aware lint rules for reactive-stream subjects.
//!
//! Hosts build a syntax tree in a [`NodeArena`](rxlint_parser::NodeArena),
//! record node types in a [`TypeEnvironment`], load a [`LintConfig`] and run
//! a [`Linter`] over one or many files:
//!
//! - `no-unsafe-subject-next` flags `subject.next()` without a value when
//!   the subject's element type cannot be absent
//! - `suffix-subjects` flags subject bindings whose name lacks the suffix

// Lint configuration (JSON)
pub mod config;
pub use config::{LintConfig, RuleEntry};

// Compiled rule set and single/multi-file runs
pub mod linter;
pub use linter::{LintInput, Linter, SourceFile};

// Human-readable diagnostic output
pub mod reporter;
pub use reporter::Reporter;

// Tracing subscriber setup (RXLINT_LOG / RXLINT_LOG_FORMAT)
pub mod tracing_config;

pub use rxlint_checker::rules::{ALL_RULES, RuleMeta, Severity};
pub use rxlint_checker::{ConfigError, NodeTypeTable, TypeEnvironment};
pub use rxlint_common::{Diagnostic, DiagnosticCategory};
pub use rxlint_solver::{TypeDatabase, TypeId, TypeInterner};
