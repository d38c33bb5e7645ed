//! Type Queries
//!
//! Pure functions over a `TypeDatabase` snapshot. These are the only type
//! questions the lint rules ask, so callers never match on `TypeData`.

use crate::TypeDatabase;
use crate::pattern::TypePattern;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::types::{TypeFlags, TypeId, TypeList};
use tracing::trace;

/// How a union participates in nominal matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnionMatch {
    /// Some member matching is enough ("could be").
    #[default]
    Any,
    /// Every member has to match.
    All,
}

// =============================================================================
// Alias Resolution
// =============================================================================

/// Follow alias references until a non-alias type is reached.
///
/// Cyclic or overly long alias chains resolve to `TypeId::ERROR`.
pub fn resolve_alias(db: &dyn TypeDatabase, type_id: TypeId) -> TypeId {
    let mut guard = RecursionGuard::with_profile(RecursionProfile::AliasResolution);
    let mut current = type_id;
    let mut entered = Vec::new();
    let resolved = loop {
        let Some(target) = db.alias_target(current) else {
            break current;
        };
        match guard.enter(current) {
            RecursionResult::Entered => entered.push(current),
            denied => {
                trace!(type_id = type_id.0, ?denied, "alias resolution stopped");
                break TypeId::ERROR;
            }
        }
        current = target;
    };
    for key in entered.into_iter().rev() {
        guard.leave(key);
    }
    resolved
}

// =============================================================================
// Flag and Shape Queries
// =============================================================================

/// Whether the alias-resolved type carries any of `flags`.
pub fn has_flag(db: &dyn TypeDatabase, type_id: TypeId, flags: TypeFlags) -> bool {
    db.type_flags(type_id).intersects(flags)
}

/// Whether the alias-resolved type is a generic instantiation.
pub fn is_reference_type(db: &dyn TypeDatabase, type_id: TypeId) -> bool {
    db.is_reference(resolve_alias(db, type_id))
}

/// Type arguments of the alias-resolved type; empty unless it is a generic
/// instantiation.
pub fn type_arguments(db: &dyn TypeDatabase, type_id: TypeId) -> TypeList {
    db.type_arguments(resolve_alias(db, type_id))
}

/// Members of the alias-resolved union, or `None` for non-unions.
pub fn union_members(db: &dyn TypeDatabase, type_id: TypeId) -> Option<TypeList> {
    db.union_members(resolve_alias(db, type_id))
}

/// Whether the type is a union with at least one member carrying `flags`.
///
/// Members that are themselves unions, directly or behind an alias, are
/// searched too.
pub fn union_has_member_with_flag(db: &dyn TypeDatabase, type_id: TypeId, flags: TypeFlags) -> bool {
    let mut guard = RecursionGuard::with_profile(RecursionProfile::TypeMatch);
    union_member_flag(db, type_id, flags, &mut guard)
}

fn union_member_flag(
    db: &dyn TypeDatabase,
    type_id: TypeId,
    flags: TypeFlags,
    guard: &mut RecursionGuard<TypeId>,
) -> bool {
    let type_id = resolve_alias(db, type_id);
    let Some(members) = db.union_members(type_id) else {
        return false;
    };
    if !guard.enter(type_id).is_entered() {
        return false;
    }
    let found = members
        .iter()
        .any(|&m| has_flag(db, m, flags) || union_member_flag(db, m, flags, guard));
    guard.leave(type_id);
    found
}

// =============================================================================
// Nominal Matching
// =============================================================================

/// Whether `type_id` could be an instance of a type matching `pattern`.
///
/// Aliases are resolved first, a union or intersection matches when any
/// member matches, and a class or interface matches when its own name or the
/// name of any declared base type matches.
pub fn could_be_type(db: &dyn TypeDatabase, type_id: TypeId, pattern: &TypePattern) -> bool {
    could_be_type_with(db, type_id, pattern, UnionMatch::Any)
}

/// [`could_be_type`] with a configurable union mode.
pub fn could_be_type_with(
    db: &dyn TypeDatabase,
    type_id: TypeId,
    pattern: &TypePattern,
    mode: UnionMatch,
) -> bool {
    let mut matcher = NominalMatcher {
        db,
        pattern,
        mode,
        guard: RecursionGuard::with_profile(RecursionProfile::TypeMatch),
    };
    let result = matcher.check(type_id);
    trace!(
        type_id = type_id.0,
        pattern = %pattern,
        ?mode,
        result,
        "could_be_type"
    );
    result
}

struct NominalMatcher<'a> {
    db: &'a dyn TypeDatabase,
    pattern: &'a TypePattern,
    mode: UnionMatch,
    guard: RecursionGuard<TypeId>,
}

impl NominalMatcher<'_> {
    fn check(&mut self, type_id: TypeId) -> bool {
        let type_id = resolve_alias(self.db, type_id);

        match self.guard.enter(type_id) {
            RecursionResult::Entered => {}
            _ => return false,
        }
        let result = self.check_resolved(type_id);
        self.guard.leave(type_id);
        result
    }

    fn check_resolved(&mut self, type_id: TypeId) -> bool {
        if let Some(members) = self.db.union_members(type_id) {
            return match self.mode {
                UnionMatch::Any => members.iter().any(|&m| self.check(m)),
                UnionMatch::All => !members.is_empty() && members.iter().all(|&m| self.check(m)),
            };
        }
        if let Some(members) = self.db.intersection_members(type_id) {
            return members.iter().any(|&m| self.check(m));
        }

        if self
            .db
            .nominal_name(type_id)
            .is_some_and(|name| self.pattern.matches_name(name))
        {
            return true;
        }

        self.db
            .base_types(type_id)
            .iter()
            .any(|&base| self.check(base))
    }
}

#[cfg(test)]
#[path = "../tests/type_queries_tests.rs"]
mod tests;
