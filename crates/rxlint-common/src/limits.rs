//! Centralized limits and thresholds.
//!
//! Solver recursion limits (alias chains, base-type walks) are centralized in
//! `rxlint_solver::recursion::RecursionProfile` rather than here.

/// Maximum depth for the syntax tree walk.
///
/// The walk is iterative, so this bounds the explicit stack rather than the
/// call stack. Trees deeper than this are truncated and the remaining nodes
/// are not visited.
pub const MAX_AST_DEPTH: u32 = 5_000;

/// Maximum number of parent links followed when searching for an enclosing
/// node.
///
/// ```typescript
/// // Each arrow adds one level between the pattern and its declarator:
/// const f = () => () => () => { const [a] = source; };
/// ```
pub const MAX_PARENT_WALK: u32 = 1_000;

/// Maximum number of alias links followed when resolving a type alias.
///
/// ```typescript
/// type A = B;
/// type B = C;
/// type C = Subject<number>;
/// ```
pub const MAX_ALIAS_RESOLUTION_DEPTH: u32 = 128;

/// Maximum number of interned types per snapshot.
pub const MAX_INTERNED_TYPES: usize = 5_000_000;
