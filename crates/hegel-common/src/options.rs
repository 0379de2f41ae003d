//! Solver configuration.
//!
//! `SolverOptions` is deserialized from the `solver` section of the checker
//! settings. Every field is optional; missing fields fall back to the
//! defaults in [`crate::limits`].

use crate::limits;
use serde::{Deserialize, Serialize};

/// Limits applied by the type algebra during a check session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolverOptions {
    /// Nesting depth for equality and subtyping.
    pub max_relation_depth: u32,
    /// Nesting depth for type-variable substitution.
    pub max_substitution_depth: u32,
    /// Nesting depth for property lookups through nominal links.
    pub max_property_access_depth: u32,
    /// Nesting depth for containment and difference traversals.
    pub max_traversal_depth: u32,
    /// Alias hops followed when normalizing an opponent type.
    pub max_alias_chain: u32,
    /// Total work budget for a single traversal.
    pub max_iterations: u32,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            max_relation_depth: limits::MAX_RELATION_DEPTH,
            max_substitution_depth: limits::MAX_SUBSTITUTION_DEPTH,
            max_property_access_depth: limits::MAX_PROPERTY_ACCESS_DEPTH,
            max_traversal_depth: limits::MAX_TRAVERSAL_DEPTH,
            max_alias_chain: limits::MAX_ALIAS_CHAIN,
            max_iterations: limits::MAX_TRAVERSAL_ITERATIONS,
        }
    }
}
