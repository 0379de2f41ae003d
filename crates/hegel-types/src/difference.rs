//! Structural difference trails for diagnostics.
//!
//! `get_difference(root, other)` walks both types in lock-step and records the
//! positions where they stop matching. Entries are ordered by traversal
//! (key before value, left to right in tuples) so a formatter can render them
//! as a path. An empty trail means no mismatch was found at this level.

use crate::db::TypeDatabase;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::relation::{TypeRelation, get_opponent_type};
use crate::types::{TypeData, TypeDifference, TypeId};
use tracing::trace;

pub struct DifferenceCollector<'a> {
    db: &'a dyn TypeDatabase,
    relation: TypeRelation<'a>,
    guard: RecursionGuard<(TypeId, TypeId)>,
}

impl<'a> DifferenceCollector<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self {
            db,
            relation: TypeRelation::new(db),
            guard: RecursionGuard::for_profile(RecursionProfile::Traversal, db.options()),
        }
    }

    pub fn get_difference(&mut self, root: TypeId, other: TypeId) -> Vec<TypeDifference> {
        let other = get_opponent_type(self.db, other);
        let (Some(root_node), Some(other_node)) = (self.db.lookup(root), self.db.lookup(other))
        else {
            return self.base_difference(root, other);
        };
        let pair = (root, other);
        match self.guard.enter(pair) {
            RecursionResult::Entered => {}
            _ => return Vec::new(),
        }

        let result = match (&root_node.data, &other_node.data) {
            (
                TypeData::Collection { key, value },
                TypeData::Collection {
                    key: other_key,
                    value: other_value,
                },
            ) => {
                trace!(root = %root_node.name, other = %other_node.name, "get_difference: collections");
                let mut trail = self.get_difference(*key, *other_key);
                trail.extend(self.get_difference(*value, *other_value));
                trail
            }
            (TypeData::Tuple { items }, TypeData::Tuple { items: other_items })
                if items.len() == other_items.len() =>
            {
                items
                    .iter()
                    .zip(other_items)
                    .flat_map(|(&item, &other_item)| self.get_difference(item, other_item))
                    .collect()
            }
            _ => self.base_difference(root, other),
        };

        self.guard.leave(pair);
        result
    }

    /// Default: nothing when the two types are equal, otherwise a single
    /// incompatibility entry.
    fn base_difference(&mut self, root: TypeId, other: TypeId) -> Vec<TypeDifference> {
        if self.relation.equals_to(root, other) {
            return Vec::new();
        }
        vec![TypeDifference {
            root,
            variable: other,
        }]
    }
}

/// Difference trail between `root` and `other`, with a fresh collector.
pub fn get_difference(db: &dyn TypeDatabase, root: TypeId, other: TypeId) -> Vec<TypeDifference> {
    DifferenceCollector::new(db).get_difference(root, other)
}

#[cfg(test)]
#[path = "tests/difference_tests.rs"]
mod tests;
