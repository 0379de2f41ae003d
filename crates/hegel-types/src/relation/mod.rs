//! Equality and subtyping over the type graph.
//!
//! `TypeRelation` implements the base type-node contract for the two
//! relations every variant shares:
//!
//! - `equals_to`: identity fast path, then per-variant structural equality
//!   AND-ed with base equality (nominal flag and nominal link)
//! - `is_super_type_for`: per-variant rules, falling back to walking the
//!   compared node's nominal-link chain
//! - `is_principal_type_for`: "self is usable wherever other's values are
//!   expected", the covariant convenience form
//!
//! Both sides are normalized through [`get_opponent_type`] before any
//! comparison, so alias and generic-application wrappers are transparent.
//!
//! Cycles are answered coinductively: a pair already under comparison is
//! assumed to hold.

mod collections;
mod composites;

use crate::db::TypeDatabase;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::types::{TypeData, TypeId, TypeNode};
use rustc_hash::FxHashSet;
use tracing::trace;

/// Follow alias / generic-application wrappers to the node they stand for.
///
/// An alias without a target, or an alias cycle, normalizes to the last
/// alias reached.
pub fn get_opponent_type(db: &dyn TypeDatabase, id: TypeId) -> TypeId {
    let mut current = id;
    let mut seen = FxHashSet::default();
    for _ in 0..db.options().max_alias_chain {
        let Some(node) = db.lookup(current) else {
            return current;
        };
        let TypeData::Alias {
            target: Some(target),
        } = &node.data
        else {
            return current;
        };
        if !seen.insert(current) {
            return current;
        }
        current = *target;
    }
    current
}

/// Stateful checker for equality and subtyping.
///
/// Keep one instance per top-level query: the guards bound the total work of
/// that query.
pub struct TypeRelation<'a> {
    pub(crate) db: &'a dyn TypeDatabase,
    equality_guard: RecursionGuard<(TypeId, TypeId)>,
    subtype_guard: RecursionGuard<(TypeId, TypeId)>,
    structural_comparisons: u32,
}

impl<'a> TypeRelation<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        let options = db.options();
        Self {
            db,
            equality_guard: RecursionGuard::for_profile(RecursionProfile::Relation, options),
            subtype_guard: RecursionGuard::for_profile(RecursionProfile::Relation, options),
            structural_comparisons: 0,
        }
    }

    /// Number of equality checks that had to look past node identity.
    pub fn structural_comparisons(&self) -> u32 {
        self.structural_comparisons
    }

    /// Whether either relation hit a depth or iteration limit.
    pub fn is_exceeded(&self) -> bool {
        self.equality_guard.is_exceeded() || self.subtype_guard.is_exceeded()
    }

    #[inline]
    pub fn reference_equals_to(&self, this: TypeId, other: TypeId) -> bool {
        this == other
    }

    #[inline]
    pub fn get_opponent_type(&self, id: TypeId) -> TypeId {
        get_opponent_type(self.db, id)
    }

    // =========================================================================
    // Equality
    // =========================================================================

    pub fn equals_to(&mut self, this: TypeId, other: TypeId) -> bool {
        let this = self.get_opponent_type(this);
        let other = self.get_opponent_type(other);
        if self.reference_equals_to(this, other) {
            return true;
        }
        let (Some(this_node), Some(other_node)) = (self.db.lookup(this), self.db.lookup(other))
        else {
            return false;
        };

        let pair = (this, other);
        match self.equality_guard.enter(pair) {
            RecursionResult::Entered => {}
            RecursionResult::Cycle => return true,
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => return false,
        }
        self.structural_comparisons += 1;
        trace!(this = %this_node.name, other = %other_node.name, "equals_to");

        let result = match &this_node.data {
            TypeData::Collection { key, value } => {
                self.collection_equals_to(&this_node, *key, *value, &other_node)
            }
            TypeData::Tuple { items } => self.tuple_equals_to(&this_node, items, &other_node),
            TypeData::Union { variants } => self.union_equals_to(&this_node, variants, &other_node),
            TypeData::Object { properties } => {
                self.object_equals_to(&this_node, properties, &other_node)
            }
            TypeData::Literal(value) => {
                matches!(&other_node.data, TypeData::Literal(other_value) if other_value == value)
                    && self.base_equals_to(&this_node, &other_node)
            }
            // Intrinsics are registered once, type variables are rigid and an
            // alias reaching here has no target: identity only.
            TypeData::Intrinsic(_) | TypeData::TypeVar { .. } | TypeData::Alias { .. } => false,
        };

        self.equality_guard.leave(pair);
        result
    }

    /// Base-level equality of two distinct nodes: neither is nominal and
    /// their nominal links are both absent or equal. Never looks at children
    /// or names.
    pub(crate) fn base_equals_to(&mut self, this: &TypeNode, other: &TypeNode) -> bool {
        if this.nominal || other.nominal {
            return false;
        }
        match (this.is_subtype_of, other.is_subtype_of) {
            (None, None) => true,
            (Some(this_link), Some(other_link)) => self.equals_to(this_link, other_link),
            _ => false,
        }
    }

    // =========================================================================
    // Subtyping
    // =========================================================================

    pub fn is_super_type_for(&mut self, this: TypeId, other: TypeId) -> bool {
        let this = self.get_opponent_type(this);
        let other = self.get_opponent_type(other);
        if self.reference_equals_to(this, other) || this == TypeId::UNKNOWN || other == TypeId::NEVER
        {
            return true;
        }
        let (Some(this_node), Some(other_node)) = (self.db.lookup(this), self.db.lookup(other))
        else {
            return false;
        };

        let pair = (this, other);
        match self.subtype_guard.enter(pair) {
            RecursionResult::Entered => {}
            RecursionResult::Cycle => return true,
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => return false,
        }
        trace!(this = %this_node.name, other = %other_node.name, "is_super_type_for");

        let result = match &this_node.data {
            TypeData::Collection { key, value } => {
                self.collection_is_super_type_for(&this_node, *key, *value, &other_node)
            }
            TypeData::Union { variants } => self.union_is_super_type_for(variants, other, &other_node),
            TypeData::Tuple { items } => {
                self.tuple_is_super_type_for(items, &other_node)
                    || self.base_is_super_type_for(this, &other_node)
            }
            TypeData::Object { properties } => {
                self.object_is_super_type_for(properties, &other_node)
                    || self.base_is_super_type_for(this, &other_node)
            }
            TypeData::Intrinsic(_)
            | TypeData::Literal(_)
            | TypeData::TypeVar { .. }
            | TypeData::Alias { .. } => self.base_is_super_type_for(this, &other_node),
        };

        self.subtype_guard.leave(pair);
        result
    }

    /// Default subtyping: a constrained type variable is covered when its
    /// constraint is, otherwise walk `other`'s nominal-link chain looking for
    /// a link equal to `this`.
    pub(crate) fn base_is_super_type_for(&mut self, this: TypeId, other: &TypeNode) -> bool {
        if let TypeData::TypeVar {
            constraint: Some(constraint),
        } = &other.data
        {
            if self.is_principal_type_for(this, *constraint) {
                return true;
            }
        }

        let mut link = other.is_subtype_of;
        for _ in 0..self.db.options().max_relation_depth {
            let Some(parent) = link else {
                return false;
            };
            if self.equals_to(this, parent) {
                return true;
            }
            link = self.db.lookup(parent).and_then(|node| node.is_subtype_of);
        }
        false
    }

    /// `this` can stand in for `other` in a covariant (value) position.
    pub fn is_principal_type_for(&mut self, this: TypeId, other: TypeId) -> bool {
        let other = self.get_opponent_type(other);
        let this_is_union = self
            .db
            .lookup(self.get_opponent_type(this))
            .is_some_and(|node| node.is_union());
        if !this_is_union {
            if let Some(other_node) = self.db.lookup(other) {
                if let TypeData::Union { variants } = &other_node.data {
                    return variants
                        .iter()
                        .all(|&variant| self.is_principal_type_for(this, variant));
                }
            }
        }
        self.equals_to(this, other) || self.is_super_type_for(this, other)
    }
}

/// `this ≡ other` with a fresh relation.
pub fn equals_to(db: &dyn TypeDatabase, this: TypeId, other: TypeId) -> bool {
    TypeRelation::new(db).equals_to(this, other)
}

/// `other <: this` with a fresh relation.
pub fn is_super_type_for(db: &dyn TypeDatabase, this: TypeId, other: TypeId) -> bool {
    TypeRelation::new(db).is_super_type_for(this, other)
}

pub fn is_principal_type_for(db: &dyn TypeDatabase, this: TypeId, other: TypeId) -> bool {
    TypeRelation::new(db).is_principal_type_for(this, other)
}

#[cfg(test)]
#[path = "../tests/relation_tests.rs"]
mod tests;
