//! Definition identifiers and storage.
//!
//! A `DefId` names a declared class, interface or type alias. Nominal
//! matching compares the declared name of a definition; base types recorded
//! here let a derived class (`BehaviorSubject<T> extends Subject<T>`) match its
//! ancestors.

use crate::types::TypeId;
use tracing::trace;

/// Solver-owned definition identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefId(pub u32);

impl DefId {
    /// Sentinel value for invalid `DefId`.
    pub const INVALID: Self = Self(0);

    /// First valid `DefId`.
    pub const FIRST_VALID: u32 = 1;

    /// Check if this `DefId` is valid.
    pub const fn is_valid(self) -> bool {
        self.0 >= Self::FIRST_VALID
    }
}

/// Kind of type definition.
///
/// | Kind | Nominal name used for matching | Example |
/// |------|-------------------------------|---------|
/// | Class | Yes | `class Subject<T> {}` |
/// | Interface | Yes | `interface Observer<T> {}` |
/// | TypeAlias | No, always resolved first | `type Events = Subject<string>` |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DefKind {
    Class,
    Interface,
    TypeAlias,
}

/// Information about a declared type.
#[derive(Clone, Debug)]
pub struct DefinitionInfo {
    pub kind: DefKind,
    /// Declared name (for matching and diagnostics).
    pub name: String,
    /// Number of type parameters of a generic declaration.
    pub type_param_count: u32,
    /// `extends` / `implements` heritage, in declaration order.
    pub bases: Vec<TypeId>,
    /// Optional file identifier for debugging
    pub file_id: Option<u32>,
}

impl DefinitionInfo {
    pub fn class(name: impl Into<String>, type_param_count: u32) -> Self {
        Self::new(DefKind::Class, name, type_param_count)
    }

    pub fn interface(name: impl Into<String>, type_param_count: u32) -> Self {
        Self::new(DefKind::Interface, name, type_param_count)
    }

    pub fn type_alias(name: impl Into<String>, type_param_count: u32) -> Self {
        Self::new(DefKind::TypeAlias, name, type_param_count)
    }

    fn new(kind: DefKind, name: impl Into<String>, type_param_count: u32) -> Self {
        Self {
            kind,
            name: name.into(),
            type_param_count,
            bases: Vec::new(),
            file_id: None,
        }
    }

    #[must_use]
    pub fn with_base(mut self, base: TypeId) -> Self {
        self.bases.push(base);
        self
    }

    #[must_use]
    pub const fn with_file_id(mut self, file_id: u32) -> Self {
        self.file_id = Some(file_id);
        self
    }

    pub const fn is_generic(&self) -> bool {
        self.type_param_count > 0
    }
}

/// Storage for definitions, indexed by `DefId`.
#[derive(Clone, Debug, Default)]
pub struct DefinitionStore {
    definitions: Vec<DefinitionInfo>,
}

impl DefinitionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition and return its id.
    pub fn register(&mut self, info: DefinitionInfo) -> DefId {
        self.definitions.push(info);
        let id = DefId(self.definitions.len() as u32);
        trace!(def_id = id.0, "registered definition");
        id
    }

    pub fn get(&self, id: DefId) -> Option<&DefinitionInfo> {
        if !id.is_valid() {
            return None;
        }
        self.definitions.get((id.0 - DefId::FIRST_VALID) as usize)
    }

    pub fn get_mut(&mut self, id: DefId) -> Option<&mut DefinitionInfo> {
        if !id.is_valid() {
            return None;
        }
        self.definitions
            .get_mut((id.0 - DefId::FIRST_VALID) as usize)
    }

    pub fn contains(&self, id: DefId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Find the first definition with a given name.
    pub fn find_by_name(&self, name: &str) -> Option<DefId> {
        self.definitions
            .iter()
            .position(|info| info.name == name)
            .map(|index| DefId(index as u32 + DefId::FIRST_VALID))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[path = "../tests/def_tests.rs"]
mod tests;
