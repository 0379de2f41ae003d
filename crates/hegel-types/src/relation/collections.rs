//! Equality and subtyping rules for collection types.
//!
//! A collection `{ [key: K]: V }` (or a named instantiation such as
//! `Array<V>`) relates to:
//! - another collection with the same generic identity: keys are invariant,
//!   values are covariant
//! - a tuple, when the collection is numerically indexed and every element
//!   fits its value type

use super::TypeRelation;
use crate::format::generic_identity;
use crate::types::{TypeData, TypeId, TypeNode};

impl<'a> TypeRelation<'a> {
    /// Same generic shape, both nodes base-equal, keys and values equal.
    pub(crate) fn collection_equals_to(
        &mut self,
        this: &TypeNode,
        key: TypeId,
        value: TypeId,
        other: &TypeNode,
    ) -> bool {
        let TypeData::Collection {
            key: other_key,
            value: other_value,
        } = &other.data
        else {
            return false;
        };
        self.base_equals_to(this, other)
            && self.equals_to(key, *other_key)
            && self.equals_to(value, *other_value)
    }

    /// ## Rules
    /// - `Array<'a'>` <: `Array<string>`: same identity, equal keys, covariant values
    /// - `{ [key: number]: V }` is NOT a supertype of `{ [key: string]: V }`: keys
    ///   are invariant
    /// - `['a', 'b']` <: `Array<string>` when the tuple's nominal link is absent
    ///   or is also an `Array`
    pub(crate) fn collection_is_super_type_for(
        &mut self,
        this: &TypeNode,
        key: TypeId,
        value: TypeId,
        other: &TypeNode,
    ) -> bool {
        let this_identity = generic_identity(&this.name);
        match &other.data {
            TypeData::Collection {
                key: other_key,
                value: other_value,
            } => {
                this_identity == generic_identity(&other.name)
                    && self.equals_to(key, *other_key)
                    && self.is_principal_type_for(value, *other_value)
            }
            TypeData::Tuple { items } => {
                let same_shape = match other.is_subtype_of {
                    None => true,
                    Some(link) => self
                        .db
                        .lookup(link)
                        .is_some_and(|link| generic_identity(&link.name) == this_identity),
                };
                same_shape
                    && self.equals_to(key, TypeId::NUMBER)
                    && items
                        .iter()
                        .all(|&item| self.is_principal_type_for(value, item))
            }
            _ => false,
        }
    }
}
