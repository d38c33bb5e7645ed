//! Type interning.
//!
//! `TypeInterner` owns every `TypeData` of one program snapshot together with
//! the `DefinitionStore`. Building the snapshot needs `&mut self`; once built
//! it is shared read-only (`TypeDatabase` is `Sync`), so no locking is needed
//! while lint rules run.

use crate::def::{DefId, DefinitionInfo, DefinitionStore};
use crate::types::{IntrinsicKind, LiteralValue, TypeData, TypeId, TypeList};
use rustc_hash::FxHashMap;
use rxlint_common::limits::{MAX_ALIAS_RESOLUTION_DEPTH, MAX_INTERNED_TYPES};
use tracing::{trace, warn};

#[derive(Clone, Debug)]
pub struct TypeInterner {
    types: Vec<TypeData>,
    index: FxHashMap<TypeData, TypeId>,
    definitions: DefinitionStore,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    /// Create an interner pre-seeded with the intrinsic types, so that
    /// `TypeId::ANY`, `TypeId::VOID`, ... are valid immediately.
    pub fn new() -> Self {
        let mut interner = Self {
            types: Vec::with_capacity(64),
            index: FxHashMap::default(),
            definitions: DefinitionStore::new(),
        };
        for kind in IntrinsicKind::ALL {
            interner.intern(TypeData::Intrinsic(kind));
        }
        debug_assert_eq!(interner.types.len() as u32, TypeId::FIRST_USER);
        interner
    }

    fn intern(&mut self, data: TypeData) -> TypeId {
        if let Some(&id) = self.index.get(&data) {
            return id;
        }
        if self.types.len() >= MAX_INTERNED_TYPES {
            warn!(limit = MAX_INTERNED_TYPES, "type interner is full");
            return TypeId::ERROR;
        }
        let id = TypeId(self.types.len() as u32);
        trace!(type_id = id.0, ?data, "intern");
        self.types.push(data.clone());
        self.index.insert(data, id);
        id
    }

    /// Look up the data of an interned type.
    #[inline]
    pub fn lookup(&self, id: TypeId) -> Option<&TypeData> {
        self.types.get(id.0 as usize)
    }

    /// Number of interned types (including intrinsics).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn definitions(&self) -> &DefinitionStore {
        &self.definitions
    }

    // =========================================================================
    // Definitions
    // =========================================================================

    pub fn register_definition(&mut self, info: DefinitionInfo) -> DefId {
        self.definitions.register(info)
    }

    /// Declare a class with `type_param_count` type parameters.
    pub fn declare_class(&mut self, name: &str, type_param_count: u32) -> DefId {
        self.register_definition(DefinitionInfo::class(name, type_param_count))
    }

    pub fn declare_interface(&mut self, name: &str, type_param_count: u32) -> DefId {
        self.register_definition(DefinitionInfo::interface(name, type_param_count))
    }

    pub fn declare_type_alias(&mut self, name: &str, type_param_count: u32) -> DefId {
        self.register_definition(DefinitionInfo::type_alias(name, type_param_count))
    }

    /// Record `base` as an `extends`/`implements` heritage type of `def`.
    pub fn add_base_type(&mut self, def: DefId, base: TypeId) {
        if let Some(info) = self.definitions.get_mut(def) {
            info.bases.push(base);
        }
    }

    // =========================================================================
    // Type constructors
    // =========================================================================

    pub fn literal_string(&mut self, value: &str) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::String(value.to_string())))
    }

    pub fn literal_number(&mut self, text: &str) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::Number(text.to_string())))
    }

    pub fn literal_boolean(&mut self, value: bool) -> TypeId {
        self.intern(TypeData::Literal(LiteralValue::Boolean(value)))
    }

    /// Instance type of a non-generic class or interface.
    pub fn object(&mut self, def: DefId) -> TypeId {
        self.intern(TypeData::Object(def))
    }

    /// Generic instantiation `def<args>`. With no arguments this is the same
    /// as [`object`](Self::object).
    pub fn reference(&mut self, def: DefId, args: &[TypeId]) -> TypeId {
        if args.is_empty() {
            return self.object(def);
        }
        self.intern(TypeData::Reference {
            target: def,
            args: args.iter().copied().collect(),
        })
    }

    pub fn type_param(&mut self, name: &str) -> TypeId {
        self.intern(TypeData::TypeParameter {
            name: name.to_string(),
        })
    }

    /// Reference to alias `def<args>` that expands to `target`.
    pub fn alias(&mut self, def: DefId, args: &[TypeId], target: TypeId) -> TypeId {
        self.intern(TypeData::Alias {
            def,
            args: args.iter().copied().collect(),
            target,
        })
    }

    /// Expand alias members to their targets so that normalization sees the
    /// underlying unions and intrinsics. Overlong chains become `ERROR`.
    fn expand_member(&self, member: TypeId) -> TypeId {
        let mut current = member;
        for _ in 0..MAX_ALIAS_RESOLUTION_DEPTH {
            match self.lookup(current) {
                Some(TypeData::Alias { target, .. }) => current = *target,
                _ => return current,
            }
        }
        trace!(type_id = member.0, "alias member too deep, treating as error");
        TypeId::ERROR
    }

    /// Normalized union.
    ///
    /// Alias members are expanded, nested unions are flattened and duplicates
    /// removed (first occurrence wins the position). `any` and `unknown`
    /// absorb the whole union, `never` members vanish, a single remaining
    /// member is returned as is.
    pub fn union(&mut self, members: &[TypeId]) -> TypeId {
        let mut flat = TypeList::new();
        for &member in members {
            let member = self.expand_member(member);
            match self.lookup(member) {
                Some(TypeData::Union(inner)) => {
                    for &m in inner {
                        if !flat.contains(&m) {
                            flat.push(m);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }

        if flat.contains(&TypeId::ANY) || flat.contains(&TypeId::ERROR) {
            return TypeId::ANY;
        }
        if flat.contains(&TypeId::UNKNOWN) {
            return TypeId::UNKNOWN;
        }
        flat.retain(|m| *m != TypeId::NEVER);

        match flat.len() {
            0 => TypeId::NEVER,
            1 => flat[0],
            _ => self.intern(TypeData::Union(flat)),
        }
    }

    /// Normalized intersection: alias members expanded, flattened and
    /// de-duplicated; `any` absorbs, `unknown` members vanish.
    pub fn intersection(&mut self, members: &[TypeId]) -> TypeId {
        let mut flat = TypeList::new();
        for &member in members {
            let member = self.expand_member(member);
            match self.lookup(member) {
                Some(TypeData::Intersection(inner)) => {
                    for &m in inner {
                        if !flat.contains(&m) {
                            flat.push(m);
                        }
                    }
                }
                _ => {
                    if !flat.contains(&member) {
                        flat.push(member);
                    }
                }
            }
        }

        if flat.contains(&TypeId::ANY) || flat.contains(&TypeId::ERROR) {
            return TypeId::ANY;
        }
        if flat.contains(&TypeId::NEVER) {
            return TypeId::NEVER;
        }
        flat.retain(|m| *m != TypeId::UNKNOWN);

        match flat.len() {
            0 => TypeId::UNKNOWN,
            1 => flat[0],
            _ => self.intern(TypeData::Intersection(flat)),
        }
    }
}

#[cfg(test)]
#[path = "../tests/intern_tests.rs"]
mod tests;
