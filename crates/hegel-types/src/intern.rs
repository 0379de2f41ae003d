//! Type interning.
//!
//! `TypeInterner` is the node store of one check session. Nodes are immutable
//! once registered; the only write after allocation is back-patching an
//! alias's target while a recursive type is being built.
//!
//! Storage uses `DashMap` so a single interner can be shared by concurrent
//! readers.

use crate::db::TypeDatabase;
use crate::error::{Result, TypeGraphError};
use crate::types::{IntrinsicKind, TypeData, TypeId, TypeNode};
use dashmap::DashMap;
use hegel_common::SolverOptions;
use smallvec::SmallVec;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

pub struct TypeInterner {
    /// `TypeId` -> node
    nodes: DashMap<TypeId, Arc<TypeNode>>,
    /// Canonical name -> every interned node rendered with that name
    by_name: DashMap<Arc<str>, SmallVec<[TypeId; 1]>>,
    next_id: AtomicU32,
    options: SolverOptions,
}

impl Default for TypeInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeInterner {
    /// Create an interner with default limits and all intrinsics registered.
    pub fn new() -> Self {
        Self::with_options(SolverOptions::default())
    }

    pub fn with_options(options: SolverOptions) -> Self {
        let interner = Self {
            nodes: DashMap::new(),
            by_name: DashMap::new(),
            next_id: AtomicU32::new(0),
            options,
        };
        for kind in IntrinsicKind::ALL {
            let link = (kind == IntrinsicKind::Undefined).then_some(TypeId::VOID);
            let node = TypeNode::new(kind.name(), TypeData::Intrinsic(kind)).with_subtype_of(link);
            let id = interner.intern_node(node);
            debug_assert_eq!(id, kind.type_id());
        }
        interner
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handles currently registered under `name`.
    pub fn find_by_name(&self, name: &str) -> Vec<TypeId> {
        self.by_name
            .get(name)
            .map(|bucket| bucket.to_vec())
            .unwrap_or_default()
    }
}

impl TypeDatabase for TypeInterner {
    fn lookup(&self, id: TypeId) -> Option<Arc<TypeNode>> {
        self.nodes.get(&id).map(|node| Arc::clone(node.value()))
    }

    fn intern_node(&self, node: TypeNode) -> TypeId {
        let mut bucket = self.by_name.entry(Arc::clone(&node.name)).or_default();
        let existing = bucket.iter().copied().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|registered| **registered == node)
        });
        if let Some(id) = existing {
            return id;
        }
        let id = self.alloc(node);
        bucket.push(id);
        id
    }

    fn alloc(&self, node: TypeNode) -> TypeId {
        let id = TypeId(self.next_id.fetch_add(1, Ordering::SeqCst));
        trace!(type_id = %id, name = %node.name, "TypeInterner::alloc");
        self.nodes.insert(id, Arc::new(node));
        id
    }

    fn set_alias_target(&self, alias: TypeId, target: TypeId) -> Result<()> {
        let mut entry = self
            .nodes
            .get_mut(&alias)
            .ok_or(TypeGraphError::UnknownType(alias))?;
        if !matches!(entry.data, TypeData::Alias { .. }) {
            return Err(TypeGraphError::NotAnAlias {
                name: entry.name.to_string(),
            });
        }
        trace!(alias = %alias, target = %target, "TypeInterner::set_alias_target");
        let mut patched = TypeNode::clone(&entry);
        patched.data = TypeData::Alias {
            target: Some(target),
        };
        *entry = Arc::new(patched);
        Ok(())
    }

    fn options(&self) -> &SolverOptions {
        &self.options
    }

    fn as_dyn(&self) -> &dyn TypeDatabase {
        self
    }
}

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod tests;
