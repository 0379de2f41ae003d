//! Nominal marking.
//!
//! Marking is copy-on-write: instead of flipping a flag on a node other
//! holders may share, it registers a nominal copy and returns a handle to it.
//! Every existing handle keeps its structural meaning.
//!
//! A collection delegates marking to its nominal link (`Array<T>` becomes
//! nominal through `Array`); every other node marks itself.

use crate::db::TypeDatabase;
use crate::error::{Result, TypeGraphError};
use crate::types::{TypeId, TypeNode};
use tracing::debug;

pub fn make_nominal(db: &dyn TypeDatabase, ty: TypeId) -> Result<TypeId> {
    let node = db.lookup(ty).ok_or(TypeGraphError::UnknownType(ty))?;
    if !node.is_collection() {
        return Ok(mark_self(db, ty, &node));
    }

    let link = node
        .is_subtype_of
        .ok_or_else(|| TypeGraphError::MissingNominalLink {
            name: node.name.to_string(),
        })?;
    let link_node = db.lookup(link).ok_or(TypeGraphError::UnknownType(link))?;
    let nominal_link = mark_self(db, link, &link_node);
    if nominal_link == link {
        return Ok(ty);
    }

    debug!(collection = %node.name, link = %link_node.name, "make_nominal: relinking collection");
    let mut relinked = TypeNode::clone(&node);
    relinked.is_subtype_of = Some(nominal_link);
    Ok(db.alloc(relinked))
}

/// Nominal copy of `node`, or `ty` itself when it is already nominal.
fn mark_self(db: &dyn TypeDatabase, ty: TypeId, node: &TypeNode) -> TypeId {
    if node.nominal {
        return ty;
    }
    let mut marked = node.clone();
    marked.nominal = true;
    db.alloc(marked)
}

#[cfg(test)]
#[path = "tests/nominal_tests.rs"]
mod tests;
