//! Node arena, node kinds and node data.

mod base;
pub mod node;
mod node_access;
mod node_arena;

pub use base::{NodeIndex, NodeList};
pub use node::{ModifierFlags, Node, NodeArena, SyntaxKind};
pub use node_access::ChildList;

#[cfg(test)]
#[path = "tests/node_arena_tests.rs"]
mod tests;
