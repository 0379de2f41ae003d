//! The type database seam.
//!
//! Algebra operations take `&dyn TypeDatabase` rather than a concrete store so
//! a checker session can inject its own interner (and tests can use an
//! isolated one per case). Required methods cover storage; the provided
//! methods are the node constructors every caller shares.

use crate::error::Result;
use crate::format;
use crate::types::{
    IntrinsicKind, LiteralValue, PropertyInfo, TypeData, TypeId, TypeList, TypeNode,
};
use hegel_common::SolverOptions;
use std::sync::Arc;

pub trait TypeDatabase {
    /// Node behind `id`, or `None` for a handle from another graph.
    fn lookup(&self, id: TypeId) -> Option<Arc<TypeNode>>;

    /// Get-or-insert keyed by the node's canonical name.
    ///
    /// Returns the existing handle when a node with the same name and the
    /// same shape is already registered.
    fn intern_node(&self, node: TypeNode) -> TypeId;

    /// Register `node` under a fresh handle, bypassing the name index.
    fn alloc(&self, node: TypeNode) -> TypeId;

    /// Point a previously allocated alias at its target.
    fn set_alias_target(&self, alias: TypeId, target: TypeId) -> Result<()>;

    fn options(&self) -> &SolverOptions;

    // =========================================================================
    // Constructors
    // =========================================================================

    fn intrinsic(&self, kind: IntrinsicKind) -> TypeId {
        kind.type_id()
    }

    fn literal(&self, value: LiteralValue) -> TypeId {
        let primitive = value.primitive();
        let node = TypeNode::new(format::literal_name(&value), TypeData::Literal(value))
            .with_subtype_of(Some(primitive));
        self.intern_node(node)
    }

    fn literal_string(&self, value: &str) -> TypeId {
        self.literal(LiteralValue::String(Arc::from(value)))
    }

    fn literal_number(&self, value: f64) -> TypeId {
        self.literal(LiteralValue::Number(value))
    }

    fn literal_boolean(&self, value: bool) -> TypeId {
        self.literal(LiteralValue::Boolean(value))
    }

    /// Anonymous index signature `{ [key: K]: V }`.
    fn collection(&self, key: TypeId, value: TypeId) -> TypeId {
        let name = format::collection_name(self.as_dyn(), key, value);
        self.intern_node(TypeNode::new(name, TypeData::Collection { key, value }))
    }

    /// Collection with a caller-supplied name such as `Array<number>`,
    /// optionally linked to its nominal supertype.
    fn collection_named(
        &self,
        name: &str,
        key: TypeId,
        value: TypeId,
        is_subtype_of: Option<TypeId>,
    ) -> TypeId {
        let node = TypeNode::new(name, TypeData::Collection { key, value })
            .with_subtype_of(is_subtype_of);
        self.intern_node(node)
    }

    fn tuple(&self, items: Vec<TypeId>) -> TypeId {
        let name = format::tuple_name(self.as_dyn(), &items);
        self.intern_node(TypeNode::new(
            name,
            TypeData::Tuple {
                items: TypeList::from_vec(items),
            },
        ))
    }

    fn tuple_named(&self, name: &str, items: Vec<TypeId>, is_subtype_of: Option<TypeId>) -> TypeId {
        let node = TypeNode::new(
            name,
            TypeData::Tuple {
                items: TypeList::from_vec(items),
            },
        )
        .with_subtype_of(is_subtype_of);
        self.intern_node(node)
    }

    /// Union of `members`, flattened, deduplicated and ordered by handle, so
    /// member order never yields a second node.
    ///
    /// `never` members are dropped, `unknown` absorbs everything, an empty
    /// union is `never` and a single member is returned as is.
    fn union(&self, members: Vec<TypeId>) -> TypeId {
        let mut variants = TypeList::new();
        let push = |variants: &mut TypeList, id: TypeId| {
            if id != TypeId::NEVER && !variants.contains(&id) {
                variants.push(id);
            }
        };
        for member in members {
            match self.lookup(member) {
                Some(node) if !node.nominal => match &node.data {
                    TypeData::Union { variants: nested } => {
                        for &id in nested {
                            push(&mut variants, id);
                        }
                    }
                    _ => push(&mut variants, member),
                },
                _ => push(&mut variants, member),
            }
        }

        if variants.contains(&TypeId::UNKNOWN) {
            return TypeId::UNKNOWN;
        }
        match variants.len() {
            0 => TypeId::NEVER,
            1 => variants[0],
            _ => {
                variants.sort_unstable();
                let name = format::union_name(self.as_dyn(), &variants);
                self.intern_node(TypeNode::new(name, TypeData::Union { variants }))
            }
        }
    }

    fn object(&self, properties: Vec<PropertyInfo>) -> TypeId {
        let name = format::object_name(self.as_dyn(), &properties);
        self.intern_node(TypeNode::new(name, TypeData::Object { properties }))
    }

    fn object_named(
        &self,
        name: &str,
        properties: Vec<PropertyInfo>,
        is_subtype_of: Option<TypeId>,
    ) -> TypeId {
        let node =
            TypeNode::new(name, TypeData::Object { properties }).with_subtype_of(is_subtype_of);
        self.intern_node(node)
    }

    /// Fresh type variable. Never interned: two `T`s are distinct variables.
    fn type_var(&self, name: &str, constraint: Option<TypeId>) -> TypeId {
        self.alloc(TypeNode::new(name, TypeData::TypeVar { constraint }))
    }

    /// Fresh alias. Pass `None` and call `set_alias_target` later to build
    /// a recursive alias.
    fn alias(&self, name: &str, target: Option<TypeId>) -> TypeId {
        self.alloc(TypeNode::new(name, TypeData::Alias { target }))
    }

    /// Upcast helper for provided methods.
    fn as_dyn(&self) -> &dyn TypeDatabase;
}
