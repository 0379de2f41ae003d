//! Caller errors raised by type-graph operations.
//!
//! Relations never fail: incompatibility is reported as `false`, a missing
//! property as `None` and a mismatch trail as a `Vec`. These errors cover
//! contract violations by the caller.

use crate::types::TypeId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeGraphError {
    /// `make_nominal` was called on a collection without a nominal link.
    #[error("cannot make `{name}` nominal: it has no nominal supertype link")]
    MissingNominalLink { name: String },

    /// Substitution lists of different lengths.
    #[error("substitution expects one target per source, got {sources} sources and {targets} targets")]
    SubstitutionArity { sources: usize, targets: usize },

    /// The handle does not belong to this interner.
    #[error("type {0} is not registered in this type graph")]
    UnknownType(TypeId),

    /// `set_alias_target` on a node that is not an alias.
    #[error("`{name}` is not an alias and cannot be retargeted")]
    NotAnAlias { name: String },
}

pub type Result<T, E = TypeGraphError> = std::result::Result<T, E>;
