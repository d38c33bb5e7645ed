//! Type Query Service.
//!
//! Binds syntax nodes to types and answers the type questions the rules ask.
//! All queries go through `rxlint_solver::type_queries`; nothing here matches
//! on `TypeData`.

use rustc_hash::FxHashMap;
use rxlint_parser::NodeIndex;
use rxlint_solver::type_queries::{self, UnionMatch};
use rxlint_solver::{TypeDatabase, TypeFlags, TypeId, TypeList, TypePattern};
use tracing::trace;

/// Host-provided binding from syntax nodes to types.
pub trait TypeEnvironment: Sync {
    /// The type snapshot the node types live in.
    fn type_database(&self) -> &dyn TypeDatabase;

    /// Static type recorded for `node`, if the host computed one.
    fn type_of_node(&self, node: NodeIndex) -> Option<TypeId>;
}

/// A precomputed node to type map over a shared type snapshot.
pub struct NodeTypeTable<'db> {
    db: &'db dyn TypeDatabase,
    types: FxHashMap<NodeIndex, TypeId>,
}

impl<'db> NodeTypeTable<'db> {
    pub fn new(db: &'db dyn TypeDatabase) -> Self {
        Self {
            db,
            types: FxHashMap::default(),
        }
    }

    /// Record the type of `node`, replacing any earlier entry.
    pub fn insert(&mut self, node: NodeIndex, type_id: TypeId) {
        self.types.insert(node, type_id);
    }

    #[must_use]
    pub fn with(mut self, node: NodeIndex, type_id: TypeId) -> Self {
        self.insert(node, type_id);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeEnvironment for NodeTypeTable<'_> {
    fn type_database(&self) -> &dyn TypeDatabase {
        self.db
    }

    fn type_of_node(&self, node: NodeIndex) -> Option<TypeId> {
        self.types.get(&node).copied()
    }
}

/// Read-only view over a `TypeEnvironment` used by the rules.
#[derive(Clone, Copy)]
pub struct TypeQuery<'a> {
    env: &'a dyn TypeEnvironment,
}

impl<'a> TypeQuery<'a> {
    pub fn new(env: &'a dyn TypeEnvironment) -> Self {
        Self { env }
    }

    #[inline]
    pub fn db(&self) -> &'a dyn TypeDatabase {
        self.env.type_database()
    }

    /// Static type of `node`. Nodes without a recorded type are the error
    /// type, which answers every flag query like `any`.
    pub fn type_of(&self, node: NodeIndex) -> TypeId {
        let type_id = self.env.type_of_node(node).unwrap_or(TypeId::ERROR);
        trace!(node = node.0, type_id = type_id.0, "type_of");
        type_id
    }

    /// Whether `type_id` could be a type matching `pattern`: aliases are
    /// resolved, any union or intersection member may match, and declared
    /// base types are searched.
    pub fn could_be_type(&self, type_id: TypeId, pattern: &TypePattern) -> bool {
        type_queries::could_be_type(self.db(), type_id, pattern)
    }

    /// Like [`could_be_type`](Self::could_be_type) but every union member
    /// has to match.
    pub fn could_be_type_everywhere(&self, type_id: TypeId, pattern: &TypePattern) -> bool {
        type_queries::could_be_type_with(self.db(), type_id, pattern, UnionMatch::All)
    }

    /// [`could_be_type`](Self::could_be_type) of the type of `node`.
    pub fn node_could_be_type(&self, node: NodeIndex, pattern: &TypePattern) -> bool {
        self.could_be_type(self.type_of(node), pattern)
    }

    pub fn is_reference(&self, type_id: TypeId) -> bool {
        type_queries::is_reference_type(self.db(), type_id)
    }

    /// Type arguments of a generic instantiation (after alias resolution);
    /// empty for everything else.
    pub fn type_arguments(&self, type_id: TypeId) -> TypeList {
        type_queries::type_arguments(self.db(), type_id)
    }

    pub fn has_flag(&self, type_id: TypeId, flags: TypeFlags) -> bool {
        type_queries::has_flag(self.db(), type_id, flags)
    }

    /// Whether `type_id` is a union with a member carrying `flags`.
    pub fn union_has_member_with_flag(&self, type_id: TypeId, flags: TypeFlags) -> bool {
        type_queries::union_has_member_with_flag(self.db(), type_id, flags)
    }

    pub fn display(&self, type_id: TypeId) -> String {
        self.db().display_type(type_id)
    }
}
