//! Containment: does a type occur anywhere inside another?
//!
//! Two strictnesses:
//! - `contains` recurses through structural children only; an alias or
//!   generic-application wrapper is an opaque leaf.
//! - `weak_contains` also looks through wrappers, which is what finding a
//!   type variable's occurrence under an alias needs.
//!
//! Both start with the same self-match: node identity.

use crate::db::TypeDatabase;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::types::{TypeData, TypeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Containment {
    Strict,
    Weak,
}

pub struct ContainsChecker<'a> {
    db: &'a dyn TypeDatabase,
    mode: Containment,
    guard: RecursionGuard<TypeId>,
}

impl<'a> ContainsChecker<'a> {
    pub fn new(db: &'a dyn TypeDatabase, mode: Containment) -> Self {
        Self {
            db,
            mode,
            guard: RecursionGuard::for_profile(RecursionProfile::Traversal, db.options()),
        }
    }

    pub fn contains(&mut self, haystack: TypeId, needle: TypeId) -> bool {
        if haystack == needle {
            return true;
        }
        let Some(node) = self.db.lookup(haystack) else {
            return false;
        };
        match self.guard.enter(haystack) {
            RecursionResult::Entered => {}
            _ => return false,
        }

        let result = match &node.data {
            TypeData::Collection { key, value } => {
                self.contains(*key, needle) || self.contains(*value, needle)
            }
            TypeData::Tuple { items } => items.iter().any(|&item| self.contains(item, needle)),
            TypeData::Union { variants } => variants
                .iter()
                .any(|&variant| self.contains(variant, needle)),
            TypeData::Object { properties } => properties
                .iter()
                .any(|prop| self.contains(prop.type_id, needle)),
            TypeData::Alias {
                target: Some(target),
            } if self.mode == Containment::Weak => self.contains(*target, needle),
            TypeData::Alias { .. }
            | TypeData::Intrinsic(_)
            | TypeData::Literal(_)
            | TypeData::TypeVar { .. } => false,
        };

        self.guard.leave(haystack);
        result
    }
}

/// Strict containment of `needle` in `haystack`.
pub fn contains(db: &dyn TypeDatabase, haystack: TypeId, needle: TypeId) -> bool {
    ContainsChecker::new(db, Containment::Strict).contains(haystack, needle)
}

/// Containment that also looks through alias wrappers.
pub fn weak_contains(db: &dyn TypeDatabase, haystack: TypeId, needle: TypeId) -> bool {
    ContainsChecker::new(db, Containment::Weak).contains(haystack, needle)
}

#[cfg(test)]
#[path = "tests/contains_tests.rs"]
mod tests;
