//! Syntax tree arena for rxlint.
//!
//! The tree is produced by a host (a parser or a foreign AST bridge) through
//! the `add_*` builder methods on [`NodeArena`]. Once built it is read-only:
//! the lint rules only observe nodes through [`NodeIndex`] handles.

pub mod parser;

pub use parser::node::*;
pub use parser::{ChildList, NodeIndex, NodeList};
