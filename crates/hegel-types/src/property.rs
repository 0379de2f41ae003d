//! Property-type resolution.
//!
//! Answers "what type does `value[key]` (or `value.key`) have?". Each variant
//! has its own rule; when it does not apply, resolution falls back to the
//! nominal link chain, which is where built-in members such as `length` on
//! `Array` live.
//!
//! `None` means the property does not exist; the caller reports it.

use crate::db::TypeDatabase;
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::relation::get_opponent_type;
use crate::types::{IntrinsicKind, KeyKind, PropertyKey, TypeData, TypeId, TypeNode};
use tracing::trace;

pub struct PropertyResolver<'a> {
    db: &'a dyn TypeDatabase,
    guard: RecursionGuard<TypeId>,
}

impl<'a> PropertyResolver<'a> {
    pub fn new(db: &'a dyn TypeDatabase) -> Self {
        Self {
            db,
            guard: RecursionGuard::for_profile(RecursionProfile::PropertyAccess, db.options()),
        }
    }

    /// Type of `key` accessed on `object`.
    ///
    /// `for_assign` selects the write view: writing through an index never
    /// introduces the absent case, reading does.
    pub fn get_property_type(
        &mut self,
        object: TypeId,
        key: PropertyKey<'_>,
        for_assign: bool,
    ) -> Option<TypeId> {
        let object = get_opponent_type(self.db, object);
        let node = self.db.lookup(object)?;
        match self.guard.enter(object) {
            RecursionResult::Entered => {}
            _ => return None,
        }
        trace!(object = %node.name, ?key, for_assign, "get_property_type");

        let result = match &node.data {
            TypeData::Collection {
                key: key_type,
                value,
            } => match self.collection_property_type(*key_type, *value, key, for_assign) {
                Some(found) => Some(found),
                None => self.base_property_type(&node, key, for_assign),
            },
            TypeData::Object { properties } => {
                let own = match key {
                    PropertyKey::String(name) => properties
                        .iter()
                        .find(|prop| prop.name.as_ref() == name)
                        .map(|prop| prop.type_id),
                    PropertyKey::Number(_) => None,
                };
                own.or_else(|| self.base_property_type(&node, key, for_assign))
            }
            TypeData::Tuple { items } => {
                let own = match key {
                    PropertyKey::Number(index) if index >= 0.0 && index.fract() == 0.0 => {
                        items.get(index as usize).copied()
                    }
                    _ => None,
                };
                own.or_else(|| self.base_property_type(&node, key, for_assign))
            }
            TypeData::Intrinsic(_)
            | TypeData::Literal(_)
            | TypeData::Union { .. }
            | TypeData::TypeVar { .. }
            | TypeData::Alias { .. } => self.base_property_type(&node, key, for_assign),
        };

        self.guard.leave(object);
        result
    }

    /// Index-signature lookup on a collection, `None` when `key` is not
    /// admitted by the key type.
    fn collection_property_type(
        &mut self,
        key_type: TypeId,
        value: TypeId,
        key: PropertyKey<'_>,
        for_assign: bool,
    ) -> Option<TypeId> {
        let key_node = self.db.lookup(get_opponent_type(self.db, key_type))?;
        if !KeyKind::of(&key_node.data).admits(key) {
            return None;
        }
        if for_assign {
            return Some(value);
        }
        Some(self.with_absent_case(value))
    }

    /// `value | undefined`, or `value` itself when it is already a union
    /// containing `undefined`.
    fn with_absent_case(&self, value: TypeId) -> TypeId {
        let includes_undefined = self.db.lookup(value).is_some_and(|node| match &node.data {
            TypeData::Union { variants } => variants.iter().any(|&variant| {
                self.db.lookup(variant).is_some_and(|variant| {
                    matches!(variant.data, TypeData::Intrinsic(IntrinsicKind::Undefined))
                })
            }),
            _ => false,
        });
        if includes_undefined {
            return value;
        }
        self.db.union(vec![value, TypeId::UNDEFINED])
    }

    /// Default lookup: resolve on the nominal supertype.
    fn base_property_type(
        &mut self,
        node: &TypeNode,
        key: PropertyKey<'_>,
        for_assign: bool,
    ) -> Option<TypeId> {
        let link = node.is_subtype_of?;
        self.get_property_type(link, key, for_assign)
    }
}

/// Type of `key` accessed on `object`, with a fresh resolver.
pub fn get_property_type(
    db: &dyn TypeDatabase,
    object: TypeId,
    key: PropertyKey<'_>,
    for_assign: bool,
) -> Option<TypeId> {
    PropertyResolver::new(db).get_property_type(object, key, for_assign)
}

#[cfg(test)]
#[path = "tests/property_tests.rs"]
mod tests;
