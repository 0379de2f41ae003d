//! Type graph node representation.
//!
//! Every type is a [`TypeNode`] stored in the [`TypeInterner`](crate::TypeInterner)
//! and addressed through a copyable [`TypeId`] handle. Two handles are
//! reference-equal exactly when they are the same `TypeId`.
//!
//! The node kinds form the closed sum type [`TypeData`]; every algebra
//! operation matches on it exhaustively.

use serde::Serialize;
use smallvec::SmallVec;
use std::sync::Arc;

/// Handle to a node in the type graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TypeId(pub u32);

impl TypeId {
    // Intrinsics are pre-registered at these indices by `TypeInterner::new()`.
    pub const UNKNOWN: TypeId = TypeId(0);
    pub const NEVER: TypeId = TypeId(1);
    pub const VOID: TypeId = TypeId(2);
    pub const UNDEFINED: TypeId = TypeId(3);
    pub const NULL: TypeId = TypeId(4);
    pub const BOOLEAN: TypeId = TypeId(5);
    pub const NUMBER: TypeId = TypeId(6);
    pub const STRING: TypeId = TypeId(7);
    pub const BIGINT: TypeId = TypeId(8);
    pub const SYMBOL: TypeId = TypeId(9);

    /// First index handed out for non-intrinsic nodes.
    pub const FIRST_DYNAMIC: u32 = 10;

    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_intrinsic(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Built-in scalar types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IntrinsicKind {
    Unknown,
    Never,
    Void,
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    BigInt,
    Symbol,
}

impl IntrinsicKind {
    /// All intrinsics in `TypeId` order.
    pub const ALL: [IntrinsicKind; 10] = [
        IntrinsicKind::Unknown,
        IntrinsicKind::Never,
        IntrinsicKind::Void,
        IntrinsicKind::Undefined,
        IntrinsicKind::Null,
        IntrinsicKind::Boolean,
        IntrinsicKind::Number,
        IntrinsicKind::String,
        IntrinsicKind::BigInt,
        IntrinsicKind::Symbol,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::Void => "void",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::BigInt => "bigint",
            Self::Symbol => "symbol",
        }
    }

    pub const fn type_id(self) -> TypeId {
        match self {
            Self::Unknown => TypeId::UNKNOWN,
            Self::Never => TypeId::NEVER,
            Self::Void => TypeId::VOID,
            Self::Undefined => TypeId::UNDEFINED,
            Self::Null => TypeId::NULL,
            Self::Boolean => TypeId::BOOLEAN,
            Self::Number => TypeId::NUMBER,
            Self::String => TypeId::STRING,
            Self::BigInt => TypeId::BIGINT,
            Self::Symbol => TypeId::SYMBOL,
        }
    }
}

/// Value carried by a literal type such as `'a'`, `2` or `true`.
#[derive(Clone, Debug)]
pub enum LiteralValue {
    String(Arc<str>),
    Number(f64),
    Boolean(bool),
}

/// Numbers compare by value, except that a NaN literal equals an identically
/// encoded NaN so it interns to a single node.
impl PartialEq for LiteralValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || a.to_bits() == b.to_bits(),
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            _ => false,
        }
    }
}

impl LiteralValue {
    /// The primitive every literal of this kind is a subtype of.
    pub const fn primitive(&self) -> TypeId {
        match self {
            Self::String(_) => TypeId::STRING,
            Self::Number(_) => TypeId::NUMBER,
            Self::Boolean(_) => TypeId::BOOLEAN,
        }
    }
}

/// Inline storage for child lists (covers most unions and tuples).
pub type TypeList = SmallVec<[TypeId; 4]>;

/// A named member of an object type.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyInfo {
    pub name: Arc<str>,
    pub type_id: TypeId,
}

impl PropertyInfo {
    pub fn new(name: impl Into<Arc<str>>, type_id: TypeId) -> Self {
        Self {
            name: name.into(),
            type_id,
        }
    }
}

/// The shape of a type node.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeData {
    /// Built-in scalar (`string`, `number`, `undefined`, ...).
    Intrinsic(IntrinsicKind),
    /// Literal value type; its nominal link is the matching primitive.
    Literal(LiteralValue),
    /// Mapping from a key type to a value type: `{ [key: K]: V }`, `Array<T>`.
    Collection { key: TypeId, value: TypeId },
    /// Fixed-length heterogeneous sequence.
    Tuple { items: TypeList },
    /// One of several variants. Flattened and deduplicated on construction.
    Union { variants: TypeList },
    /// Named properties, in declaration order.
    Object { properties: Vec<PropertyInfo> },
    /// Rigid type variable; compared by identity only.
    TypeVar { constraint: Option<TypeId> },
    /// Alias or generic-application wrapper around another node.
    ///
    /// `target` is `None` while a recursive alias is still being built.
    Alias { target: Option<TypeId> },
}

/// A node in the type graph.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeNode {
    /// Canonical rendering of the type's shape.
    pub name: Arc<str>,
    /// Nominal link to a named supertype.
    pub is_subtype_of: Option<TypeId>,
    /// Nominal nodes compare by identity only.
    pub nominal: bool,
    pub data: TypeData,
}

impl TypeNode {
    pub fn new(name: impl Into<Arc<str>>, data: TypeData) -> Self {
        Self {
            name: name.into(),
            is_subtype_of: None,
            nominal: false,
            data,
        }
    }

    /// Builder: set the nominal link.
    pub fn with_subtype_of(mut self, link: Option<TypeId>) -> Self {
        self.is_subtype_of = link;
        self
    }

    /// Collection types are only satisfiable through literal / index access
    /// patterns, never by arbitrary structural matching during inference.
    pub fn only_literal(&self) -> bool {
        matches!(self.data, TypeData::Collection { .. })
    }

    pub fn is_union(&self) -> bool {
        matches!(self.data, TypeData::Union { .. })
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.data, TypeData::Collection { .. })
    }
}

/// Identifier used to access a property or index of a value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyKey<'a> {
    /// `obj.name` or `obj["name"]`.
    String(&'a str),
    /// `obj[0]`.
    Number(f64),
}

/// What an index signature's key type admits.
///
/// Derived structurally from the key node instead of comparing display names,
/// so two unrelated kinds that render alike never match each other.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyKind {
    /// Any string-keyed access.
    String,
    /// Any numeric access.
    Number,
    /// Exactly this literal.
    Literal(LiteralValue),
    /// A key type that no property identifier can satisfy directly.
    Opaque,
}

impl KeyKind {
    pub fn of(data: &TypeData) -> Self {
        match data {
            TypeData::Intrinsic(IntrinsicKind::String) => KeyKind::String,
            TypeData::Intrinsic(IntrinsicKind::Number) => KeyKind::Number,
            TypeData::Literal(value) => KeyKind::Literal(value.clone()),
            _ => KeyKind::Opaque,
        }
    }

    pub fn admits(&self, key: PropertyKey<'_>) -> bool {
        match (self, key) {
            (KeyKind::String, PropertyKey::String(_)) => true,
            (KeyKind::Number, PropertyKey::Number(_)) => true,
            (KeyKind::Literal(LiteralValue::String(lit)), PropertyKey::String(name)) => {
                lit.as_ref() == name
            }
            (KeyKind::Literal(LiteralValue::Number(lit)), PropertyKey::Number(index)) => {
                *lit == index
            }
            _ => false,
        }
    }
}

/// One entry of a structural difference trail.
///
/// `root` is the node on the receiving side and `variable` the node found at
/// the same position on the compared side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TypeDifference {
    pub root: TypeId,
    pub variable: TypeId,
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
