//! Substitution of types inside the type graph (`change_all`).
//!
//! Replaces every occurrence of `sources[i]` with `targets[i]`. The receiver is
//! never mutated: an unchanged subtree comes back as the identical `TypeId`
//! (structural sharing), so callers can compare handles to detect a no-op.
//!
//! Rebuilt nodes are registered through the interner under the name produced
//! by [`changed_name`](crate::format::changed_name).
//!
//! Recursive types are rebuilt through placeholders: when a cycle reaches a
//! node that is still being rewritten and a source occurs inside it, the
//! back-reference becomes a fresh alias that is pointed at the rewritten
//! node once it exists.

use crate::contains::{Containment, ContainsChecker};
use crate::db::TypeDatabase;
use crate::error::{Result, TypeGraphError};
use crate::format::{self, type_name};
use crate::recursion::{RecursionGuard, RecursionProfile, RecursionResult};
use crate::relation::TypeRelation;
use crate::scope::TypeScope;
use crate::types::{PropertyInfo, TypeData, TypeId, TypeList, TypeNode};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tracing::{trace, warn};

/// Parallel source / target lists.
#[derive(Clone, Debug, Default)]
pub struct TypeSubstitution {
    sources: Vec<TypeId>,
    targets: Vec<TypeId>,
}

impl TypeSubstitution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair up `sources` and `targets`, rejecting lists of different lengths.
    pub fn from_lists(sources: &[TypeId], targets: &[TypeId]) -> Result<Self> {
        if sources.len() != targets.len() {
            return Err(TypeGraphError::SubstitutionArity {
                sources: sources.len(),
                targets: targets.len(),
            });
        }
        Ok(Self {
            sources: sources.to_vec(),
            targets: targets.to_vec(),
        })
    }

    pub fn insert(&mut self, source: TypeId, target: TypeId) {
        self.sources.push(source);
        self.targets.push(target);
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn sources(&self) -> &[TypeId] {
        &self.sources
    }

    pub fn targets(&self) -> &[TypeId] {
        &self.targets
    }
}

pub struct TypeInstantiator<'a> {
    db: &'a dyn TypeDatabase,
    substitution: &'a TypeSubstitution,
    scope: &'a TypeScope,
    relation: TypeRelation<'a>,
    guard: RecursionGuard<TypeId>,
    /// Nodes being rewritten -> placeholder handed out to back-references
    pending: FxHashMap<TypeId, Option<TypeId>>,
}

impl<'a> TypeInstantiator<'a> {
    pub fn new(
        db: &'a dyn TypeDatabase,
        substitution: &'a TypeSubstitution,
        scope: &'a TypeScope,
    ) -> Self {
        Self {
            db,
            substitution,
            scope,
            relation: TypeRelation::new(db),
            guard: RecursionGuard::for_profile(RecursionProfile::Substitution, db.options()),
            pending: FxHashMap::default(),
        }
    }

    /// The scope this substitution runs in, forwarded unchanged.
    pub fn scope(&self) -> &'a TypeScope {
        self.scope
    }

    pub fn change_all(&mut self, ty: TypeId) -> TypeId {
        if self.substitution.is_empty() {
            return ty;
        }
        if let Some(target) = self.replacement_for(ty) {
            return target;
        }
        let Some(node) = self.db.lookup(ty) else {
            return ty;
        };
        match self.guard.enter(ty) {
            RecursionResult::Entered => {}
            RecursionResult::Cycle => return self.placeholder_for(ty, &node),
            RecursionResult::DepthExceeded | RecursionResult::IterationExceeded => return ty,
        }
        self.pending.insert(ty, None);

        let result = match &node.data {
            TypeData::Collection { key, value } => self.change_collection(ty, &node, *key, *value),
            TypeData::Tuple { items } => {
                let new_items = self.change_list(items);
                let new_link = self.change_link(&node);
                if new_items.is_none() && new_link == node.is_subtype_of {
                    ty
                } else {
                    let items = new_items.unwrap_or_else(|| items.clone());
                    self.rebuild(&node, new_link, TypeData::Tuple { items })
                }
            }
            TypeData::Union { variants } => match self.change_list(variants) {
                Some(new_variants) => self.db.union(new_variants.into_vec()),
                None => ty,
            },
            TypeData::Object { properties } => {
                let new_properties = self.change_properties(properties);
                let new_link = self.change_link(&node);
                if new_properties.is_none() && new_link == node.is_subtype_of {
                    ty
                } else {
                    let properties = new_properties.unwrap_or_else(|| properties.clone());
                    self.rebuild(&node, new_link, TypeData::Object { properties })
                }
            }
            TypeData::Alias {
                target: Some(target),
            } => {
                let new_target = self.change_all(*target);
                if new_target == *target {
                    ty
                } else {
                    self.rebuild(
                        &node,
                        node.is_subtype_of,
                        TypeData::Alias {
                            target: Some(new_target),
                        },
                    )
                }
            }
            TypeData::Intrinsic(_)
            | TypeData::Literal(_)
            | TypeData::TypeVar { .. }
            | TypeData::Alias { target: None } => ty,
        };

        self.guard.leave(ty);
        if let Some(Some(placeholder)) = self.pending.remove(&ty) {
            if let Err(err) = self.db.set_alias_target(placeholder, result) {
                warn!(%err, "change_all: placeholder could not be resolved");
            }
        }
        result
    }

    /// Handle for a back-reference to `ty` while `ty` is being rewritten.
    ///
    /// `ty` itself when no source occurs inside it, so unaffected cycles keep
    /// their identity.
    fn placeholder_for(&mut self, ty: TypeId, node: &TypeNode) -> TypeId {
        let Some(&slot) = self.pending.get(&ty) else {
            return ty;
        };
        if let Some(placeholder) = slot {
            return placeholder;
        }
        let mut checker = ContainsChecker::new(self.db, Containment::Weak);
        let affected = self
            .substitution
            .sources
            .iter()
            .any(|&source| checker.contains(ty, source));
        if !affected {
            return ty;
        }
        let name = self.get_changed_name(node);
        trace!(node = %node.name, placeholder = %name, "change_all: cycle placeholder");
        let placeholder = self.db.alias(&name, None);
        self.pending.insert(ty, Some(placeholder));
        placeholder
    }

    /// Only the value type and the nominal link are substituted: key types
    /// are fixed scalar shapes.
    fn change_collection(&mut self, ty: TypeId, node: &TypeNode, key: TypeId, value: TypeId) -> TypeId {
        let new_value = self.change_all(value);
        let new_link = self.change_link(node);
        if new_value == value && new_link == node.is_subtype_of {
            return ty;
        }
        trace!(collection = %node.name, "change_all: rebuilding collection");
        self.rebuild(
            node,
            new_link,
            TypeData::Collection {
                key,
                value: new_value,
            },
        )
    }

    /// Base rule: `ty` is replaced by the target of the first source it
    /// equals.
    fn replacement_for(&mut self, ty: TypeId) -> Option<TypeId> {
        let index = self
            .substitution
            .sources
            .iter()
            .position(|&source| self.relation.equals_to(source, ty))?;
        self.substitution.targets.get(index).copied()
    }

    fn change_link(&mut self, node: &TypeNode) -> Option<TypeId> {
        node.is_subtype_of.map(|link| self.change_all(link))
    }

    /// `None` when no element changed.
    fn change_list(&mut self, list: &TypeList) -> Option<TypeList> {
        let changed: TypeList = list.iter().map(|&item| self.change_all(item)).collect();
        (changed != *list).then_some(changed)
    }

    fn change_properties(&mut self, properties: &[PropertyInfo]) -> Option<Vec<PropertyInfo>> {
        let changed: Vec<_> = properties
            .iter()
            .map(|prop| PropertyInfo {
                name: Arc::clone(&prop.name),
                type_id: self.change_all(prop.type_id),
            })
            .collect();
        (changed != properties).then_some(changed)
    }

    fn rebuild(&self, node: &TypeNode, is_subtype_of: Option<TypeId>, data: TypeData) -> TypeId {
        let name = self.get_changed_name(node);
        self.db.intern_node(TypeNode {
            name: name.into(),
            is_subtype_of,
            nominal: node.nominal,
            data,
        })
    }

    /// `node`'s name with every source name replaced by its target name.
    pub fn get_changed_name(&self, node: &TypeNode) -> String {
        let sources: Vec<_> = self
            .substitution
            .sources
            .iter()
            .map(|&id| type_name(self.db, id))
            .collect();
        let targets: Vec<_> = self
            .substitution
            .targets
            .iter()
            .map(|&id| type_name(self.db, id))
            .collect();
        format::changed_name(&node.name, &sources, &targets)
    }
}

/// Substitute `targets` for `sources` inside `ty`.
///
/// Returns `ty` itself when nothing changed.
pub fn change_all(
    db: &dyn TypeDatabase,
    ty: TypeId,
    sources: &[TypeId],
    targets: &[TypeId],
    scope: &TypeScope,
) -> Result<TypeId> {
    let substitution = TypeSubstitution::from_lists(sources, targets)?;
    Ok(TypeInstantiator::new(db, &substitution, scope).change_all(ty))
}

#[cfg(test)]
#[path = "tests/instantiate_tests.rs"]
mod tests;
