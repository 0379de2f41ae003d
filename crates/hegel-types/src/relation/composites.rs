//! Equality and subtyping rules for tuples, unions and objects.

use super::TypeRelation;
use crate::types::{PropertyInfo, TypeData, TypeId, TypeList, TypeNode};

impl<'a> TypeRelation<'a> {
    pub(crate) fn tuple_equals_to(
        &mut self,
        this: &TypeNode,
        items: &TypeList,
        other: &TypeNode,
    ) -> bool {
        let TypeData::Tuple { items: other_items } = &other.data else {
            return false;
        };
        items.len() == other_items.len()
            && self.base_equals_to(this, other)
            && items
                .iter()
                .zip(other_items)
                .all(|(&item, &other_item)| self.equals_to(item, other_item))
    }

    /// Same arity, every element covariant.
    pub(crate) fn tuple_is_super_type_for(&mut self, items: &TypeList, other: &TypeNode) -> bool {
        let TypeData::Tuple { items: other_items } = &other.data else {
            return false;
        };
        items.len() == other_items.len()
            && items
                .iter()
                .zip(other_items)
                .all(|(&item, &other_item)| self.is_principal_type_for(item, other_item))
    }

    /// Set equality of variants, independent of order.
    pub(crate) fn union_equals_to(
        &mut self,
        this: &TypeNode,
        variants: &TypeList,
        other: &TypeNode,
    ) -> bool {
        let TypeData::Union {
            variants: other_variants,
        } = &other.data
        else {
            return false;
        };
        if variants.len() != other_variants.len() || !self.base_equals_to(this, other) {
            return false;
        }
        variants.iter().all(|&variant| {
            other_variants
                .iter()
                .any(|&other_variant| self.equals_to(variant, other_variant))
        }) && other_variants.iter().all(|&other_variant| {
            variants
                .iter()
                .any(|&variant| self.equals_to(variant, other_variant))
        })
    }

    /// A union covers `other` when some variant covers it, or, for a union
    /// `other`, when each of its variants is covered by some variant.
    pub(crate) fn union_is_super_type_for(
        &mut self,
        variants: &TypeList,
        other: TypeId,
        other_node: &TypeNode,
    ) -> bool {
        if let TypeData::Union {
            variants: other_variants,
        } = &other_node.data
        {
            return other_variants.iter().all(|&other_variant| {
                variants
                    .iter()
                    .any(|&variant| self.is_principal_type_for(variant, other_variant))
            });
        }
        variants
            .iter()
            .any(|&variant| self.is_principal_type_for(variant, other))
    }

    pub(crate) fn object_equals_to(
        &mut self,
        this: &TypeNode,
        properties: &[PropertyInfo],
        other: &TypeNode,
    ) -> bool {
        let TypeData::Object {
            properties: other_properties,
        } = &other.data
        else {
            return false;
        };
        properties.len() == other_properties.len()
            && self.base_equals_to(this, other)
            && properties.iter().all(|prop| {
                other_properties
                    .iter()
                    .find(|other_prop| other_prop.name == prop.name)
                    .is_some_and(|other_prop| self.equals_to(prop.type_id, other_prop.type_id))
            })
    }

    /// Width and depth subtyping: `other` has every property of `this` with
    /// a covered type, and may have more.
    pub(crate) fn object_is_super_type_for(
        &mut self,
        properties: &[PropertyInfo],
        other: &TypeNode,
    ) -> bool {
        let TypeData::Object {
            properties: other_properties,
        } = &other.data
        else {
            return false;
        };
        properties.iter().all(|prop| {
            other_properties
                .iter()
                .find(|other_prop| other_prop.name == prop.name)
                .is_some_and(|other_prop| {
                    self.is_principal_type_for(prop.type_id, other_prop.type_id)
                })
        })
    }
}
