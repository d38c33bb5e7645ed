//! Type representation and type queries.
//!
//! This crate models the slice of a TypeScript type system that the lint
//! rules need to observe:
//!
//! - **`TypeInterner`**: interned `TypeData` addressed by `TypeId`, plus the
//!   `DefinitionStore` of declared classes, interfaces and aliases
//! - **`TypeDatabase`**: the narrow capability interface the queries run
//!   against (alias targets, union members, nominal names, type arguments,
//!   base types, flags). Hosts wrapping another type checker implement it.
//! - **Type queries**: `could_be_type`, `type_arguments`, `has_flag` and
//!   friends, all pure functions of a `TypeDatabase` snapshot
//! - **`TypePattern`**: name or regular-expression matchers over nominal names

mod db;
pub mod def;
mod format;
mod intern;
pub mod pattern;
pub mod recursion;
pub mod type_queries;
pub mod types;

pub use db::TypeDatabase;
pub use def::{DefId, DefKind, DefinitionInfo, DefinitionStore};
pub use format::TypeFormatter;
pub use intern::TypeInterner;
pub use pattern::TypePattern;
pub use type_queries::UnionMatch;
pub use types::{IntrinsicKind, LiteralValue, TypeData, TypeFlags, TypeId, TypeList};

// Test modules are loaded by their source files via #[path = "../tests/..."].
#[cfg(test)]
#[path = "../tests/concurrency_tests.rs"]
mod concurrency_tests;
