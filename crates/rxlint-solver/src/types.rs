//! Core type representation.

use crate::def::DefId;
use bitflags::bitflags;
use smallvec::SmallVec;

/// Interned type handle. Equality of `TypeId`s is equality of types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Unresolvable or erroneous type. Carries `TypeFlags::ANY`.
    pub const ERROR: TypeId = TypeId(0);
    pub const ANY: TypeId = TypeId(1);
    pub const UNKNOWN: TypeId = TypeId(2);
    pub const VOID: TypeId = TypeId(3);
    pub const UNDEFINED: TypeId = TypeId(4);
    pub const NULL: TypeId = TypeId(5);
    pub const NEVER: TypeId = TypeId(6);
    pub const STRING: TypeId = TypeId(7);
    pub const NUMBER: TypeId = TypeId(8);
    pub const BOOLEAN: TypeId = TypeId(9);
    pub const BIGINT: TypeId = TypeId(10);
    pub const SYMBOL: TypeId = TypeId(11);
    /// The non-primitive `object` type.
    pub const OBJECT: TypeId = TypeId(12);

    /// First id handed out for non-intrinsic types.
    pub const FIRST_USER: u32 = 13;

    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_USER
    }
}

/// Intrinsic (keyword) types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Error,
    Any,
    Unknown,
    Void,
    Undefined,
    Null,
    Never,
    String,
    Number,
    Boolean,
    Bigint,
    Symbol,
    Object,
}

impl IntrinsicKind {
    /// Intrinsics in `TypeId` order; the interner seeds itself from this.
    pub const ALL: [IntrinsicKind; 13] = [
        Self::Error,
        Self::Any,
        Self::Unknown,
        Self::Void,
        Self::Undefined,
        Self::Null,
        Self::Never,
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Bigint,
        Self::Symbol,
        Self::Object,
    ];

    pub const fn flags(self) -> TypeFlags {
        match self {
            // The error type behaves like `any` for every query.
            Self::Error | Self::Any => TypeFlags::ANY,
            Self::Unknown => TypeFlags::UNKNOWN,
            Self::Void => TypeFlags::VOID,
            Self::Undefined => TypeFlags::UNDEFINED,
            Self::Null => TypeFlags::NULL,
            Self::Never => TypeFlags::NEVER,
            Self::String => TypeFlags::STRING,
            Self::Number => TypeFlags::NUMBER,
            Self::Boolean => TypeFlags::BOOLEAN,
            Self::Bigint => TypeFlags::BIGINT,
            Self::Symbol => TypeFlags::ES_SYMBOL,
            Self::Object => TypeFlags::NON_PRIMITIVE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Void => "void",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Never => "never",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Bigint => "bigint",
            Self::Symbol => "symbol",
            Self::Object => "object",
        }
    }
}

/// Literal types. Numbers keep their source text so the value is hashable.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    String(String),
    Number(String),
    Boolean(bool),
}

bitflags! {
    /// Type flags, following the TypeScript `TypeFlags` names for the subset
    /// this crate models.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const BIGINT = 1 << 5;
        const STRING_LITERAL = 1 << 6;
        const NUMBER_LITERAL = 1 << 7;
        const BOOLEAN_LITERAL = 1 << 8;
        const ES_SYMBOL = 1 << 9;
        const VOID = 1 << 10;
        const UNDEFINED = 1 << 11;
        const NULL = 1 << 12;
        const NEVER = 1 << 13;
        const TYPE_PARAMETER = 1 << 14;
        const OBJECT = 1 << 15;
        const UNION = 1 << 16;
        const INTERSECTION = 1 << 17;
        const NON_PRIMITIVE = 1 << 18;
        /// Generic instantiation of a class or interface.
        const REFERENCE = 1 << 19;

        const LITERAL = Self::STRING_LITERAL.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::BOOLEAN_LITERAL.bits();
        const ANY_OR_UNKNOWN = Self::ANY.bits() | Self::UNKNOWN.bits();
    }
}

/// Type argument / member list.
pub type TypeList = SmallVec<[TypeId; 2]>;

/// Structural content of an interned type.
///
/// Construct these only through the `TypeInterner` builder methods, which
/// normalize unions and intersections.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeData {
    Intrinsic(IntrinsicKind),
    Literal(LiteralValue),
    /// Instance type of a non-generic class or interface.
    Object(DefId),
    /// Generic instantiation `Target<Args>` of a class or interface.
    Reference { target: DefId, args: TypeList },
    /// Flattened, de-duplicated union with at least two members.
    Union(TypeList),
    /// Flattened, de-duplicated intersection with at least two members.
    Intersection(TypeList),
    /// Reference to a type alias. `target` is the type the alias expands to
    /// for these arguments.
    Alias {
        def: DefId,
        args: TypeList,
        target: TypeId,
    },
    /// Unsubstituted type parameter (`T` inside a generic declaration).
    TypeParameter { name: String },
}

impl TypeData {
    /// Flags of this type node. Aliases report no flags of their own; use
    /// `TypeDatabase::type_flags`, which looks through them.
    pub fn own_flags(&self) -> TypeFlags {
        match self {
            Self::Intrinsic(kind) => kind.flags(),
            Self::Literal(LiteralValue::String(_)) => TypeFlags::STRING_LITERAL,
            Self::Literal(LiteralValue::Number(_)) => TypeFlags::NUMBER_LITERAL,
            Self::Literal(LiteralValue::Boolean(_)) => TypeFlags::BOOLEAN_LITERAL,
            Self::Object(_) => TypeFlags::OBJECT,
            Self::Reference { .. } => TypeFlags::OBJECT.union(TypeFlags::REFERENCE),
            Self::Union(_) => TypeFlags::UNION,
            Self::Intersection(_) => TypeFlags::INTERSECTION,
            Self::Alias { .. } => TypeFlags::empty(),
            Self::TypeParameter { .. } => TypeFlags::TYPE_PARAMETER,
        }
    }
}
