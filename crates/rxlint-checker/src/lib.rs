//! Type-aware lint rules for RxJS subjects.
//!
//! This crate is organized into several modules:
//! - `type_query` - node to type binding (`TypeEnvironment`) and the
//!   `TypeQuery` service the rules ask type questions through
//! - `bindings` - binding occurrences for naming rules
//! - `type_patterns` - the ordered include/exclude table of type patterns
//! - `context` - `LintContext`, per-file state and diagnostic reporting
//! - `rules` - `no-unsafe-subject-next` and `suffix-subjects`
//! - `error` - configuration errors

pub mod bindings;
pub mod context;
pub mod error;
pub mod rules;
pub mod type_patterns;
pub mod type_query;

pub use bindings::{BindingKind, BindingOccurrence, BindingOwner, BindingSwitches, collect_bindings};
pub use context::LintContext;
pub use error::ConfigError;
pub use rules::{Rule, RuleMeta, Severity};
pub use type_patterns::{OrderedPatternList, PatternRule};
pub use type_query::{NodeTypeTable, TypeEnvironment, TypeQuery};

#[cfg(test)]
#[path = "../tests/bindings_tests.rs"]
mod bindings_tests;
#[cfg(test)]
#[path = "../tests/type_patterns_tests.rs"]
mod type_patterns_tests;
#[cfg(test)]
#[path = "../tests/options_tests.rs"]
mod options_tests;
