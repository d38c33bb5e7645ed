//! The type oracle capability interface.
//!
//! Lint rules never see `TypeData` directly. They ask a `TypeDatabase` a
//! handful of structural questions, so a host that wraps another type checker
//! only has to answer these.

use crate::format::TypeFormatter;
use crate::intern::TypeInterner;
use crate::types::{TypeData, TypeFlags, TypeId, TypeList};
use rxlint_common::limits::MAX_ALIAS_RESOLUTION_DEPTH;
use tracing::trace;

/// Read-only view of a type snapshot.
///
/// Every method is total: ids the database does not know answer as if they
/// were the error type (`ANY` flags, no members, no name).
pub trait TypeDatabase: Send + Sync {
    /// Flags of `type_id`, looking through aliases.
    fn type_flags(&self, type_id: TypeId) -> TypeFlags;

    /// One alias step: the type an alias reference expands to.
    fn alias_target(&self, type_id: TypeId) -> Option<TypeId>;

    /// Members of a union type (not looking through aliases).
    fn union_members(&self, type_id: TypeId) -> Option<TypeList>;

    /// Members of an intersection type (not looking through aliases).
    fn intersection_members(&self, type_id: TypeId) -> Option<TypeList>;

    /// Declared name of the class or interface behind an object or reference
    /// type. Aliases have no nominal name.
    fn nominal_name(&self, type_id: TypeId) -> Option<&str>;

    /// Whether `type_id` itself is a generic instantiation.
    fn is_reference(&self, type_id: TypeId) -> bool;

    /// Type arguments of a generic instantiation, in declaration order.
    fn type_arguments(&self, type_id: TypeId) -> TypeList;

    /// Declared `extends`/`implements` heritage of the class or interface
    /// behind an object or reference type.
    fn base_types(&self, type_id: TypeId) -> TypeList;

    /// Human readable rendering, for logs and test failure messages.
    fn display_type(&self, type_id: TypeId) -> String {
        format!("type#{}", type_id.0)
    }
}

impl TypeInterner {
    fn def_of(&self, type_id: TypeId) -> Option<crate::def::DefId> {
        match self.lookup(type_id)? {
            TypeData::Object(def) => Some(*def),
            TypeData::Reference { target, .. } => Some(*target),
            _ => None,
        }
    }
}

impl TypeDatabase for TypeInterner {
    fn type_flags(&self, type_id: TypeId) -> TypeFlags {
        let mut current = type_id;
        for _ in 0..MAX_ALIAS_RESOLUTION_DEPTH {
            match self.lookup(current) {
                Some(TypeData::Alias { target, .. }) => current = *target,
                Some(data) => return data.own_flags(),
                None => return TypeFlags::ANY,
            }
        }
        trace!(type_id = type_id.0, "alias chain too deep, treating as error");
        TypeFlags::ANY
    }

    fn alias_target(&self, type_id: TypeId) -> Option<TypeId> {
        match self.lookup(type_id)? {
            TypeData::Alias { target, .. } => Some(*target),
            _ => None,
        }
    }

    fn union_members(&self, type_id: TypeId) -> Option<TypeList> {
        match self.lookup(type_id)? {
            TypeData::Union(members) => Some(members.clone()),
            _ => None,
        }
    }

    fn intersection_members(&self, type_id: TypeId) -> Option<TypeList> {
        match self.lookup(type_id)? {
            TypeData::Intersection(members) => Some(members.clone()),
            _ => None,
        }
    }

    fn nominal_name(&self, type_id: TypeId) -> Option<&str> {
        let def = self.def_of(type_id)?;
        self.definitions().get(def).map(|info| info.name.as_str())
    }

    fn is_reference(&self, type_id: TypeId) -> bool {
        matches!(self.lookup(type_id), Some(TypeData::Reference { .. }))
    }

    fn type_arguments(&self, type_id: TypeId) -> TypeList {
        match self.lookup(type_id) {
            Some(TypeData::Reference { args, .. }) => args.clone(),
            _ => TypeList::new(),
        }
    }

    fn base_types(&self, type_id: TypeId) -> TypeList {
        self.def_of(type_id)
            .and_then(|def| self.definitions().get(def))
            .map(|info| info.bases.iter().copied().collect())
            .unwrap_or_default()
    }

    fn display_type(&self, type_id: TypeId) -> String {
        TypeFormatter::new(self).format(type_id)
    }
}
