//! Substitution scope.
//!
//! A `TypeScope` maps type names visible at a point in the program to their
//! nodes. Substitution threads the scope through every recursive call
//! unchanged; the algebra itself never reads it.

use crate::types::TypeId;
use rustc_hash::FxHashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct TypeScope {
    parent: Option<Arc<TypeScope>>,
    types: FxHashMap<Arc<str>, TypeId>,
}

impl TypeScope {
    /// Create a root scope with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope nested inside `parent`.
    pub fn child(parent: Arc<TypeScope>) -> Self {
        Self {
            parent: Some(parent),
            types: FxHashMap::default(),
        }
    }

    /// Declare `name` in this scope, shadowing any outer declaration.
    pub fn declare(&mut self, name: impl Into<Arc<str>>, type_id: TypeId) {
        self.types.insert(name.into(), type_id);
    }

    /// Find `name` in this scope or the nearest enclosing one.
    pub fn find_type(&self, name: &str) -> Option<TypeId> {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if let Some(&id) = current.types.get(name) {
                return Some(id);
            }
            scope = current.parent.as_deref();
        }
        None
    }

    pub fn parent(&self) -> Option<&TypeScope> {
        self.parent.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_type_walks_parents() {
        let mut root = TypeScope::new();
        root.declare("T", TypeId(20));
        let root = Arc::new(root);

        let mut inner = TypeScope::child(Arc::clone(&root));
        inner.declare("U", TypeId(21));

        assert_eq!(inner.find_type("U"), Some(TypeId(21)));
        assert_eq!(inner.find_type("T"), Some(TypeId(20)));
        assert_eq!(root.find_type("U"), None);
    }

    #[test]
    fn test_inner_declaration_shadows_outer() {
        let mut root = TypeScope::new();
        root.declare("T", TypeId(20));
        let mut inner = TypeScope::child(Arc::new(root));
        inner.declare("T", TypeId(30));

        assert_eq!(inner.find_type("T"), Some(TypeId(30)));
        assert_eq!(inner.parent().and_then(|p| p.find_type("T")), Some(TypeId(20)));
    }
}
