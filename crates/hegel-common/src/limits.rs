//! Centralized limits and thresholds for the type graph.
//!
//! Every traversal over the type graph is bounded. Type nodes are shared and
//! aliases can be back-patched to refer to themselves, so without these limits
//! a recursive alias such as
//!
//! ```text
//! type List<T> = { [key: number]: List<T> };
//! ```
//!
//! would make equality, subtyping or substitution recurse forever.
//!
//! The values here are the defaults for [`SolverOptions`](crate::SolverOptions);
//! checker settings may override them per session.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth for equality and subtyping checks.
///
/// Relations compare both sides in lock-step, so each level consumes a frame
/// for the pair. Structural comparison of recursive types can legitimately
/// nest deeply before a cycle is found.
pub const MAX_RELATION_DEPTH: u32 = 100;

/// Maximum nesting depth for substitution of type variables.
///
/// Matches the instantiation depth at which generic expansion is considered
/// excessively deep and possibly infinite.
pub const MAX_SUBSTITUTION_DEPTH: u32 = 50;

/// Maximum nesting depth for property-type resolution through nominal links.
pub const MAX_PROPERTY_ACCESS_DEPTH: u32 = 50;

/// Maximum nesting depth for containment and difference traversals.
pub const MAX_TRAVERSAL_DEPTH: u32 = 50;

/// Maximum number of alias hops followed when normalizing an opponent type.
pub const MAX_ALIAS_CHAIN: u32 = 64;

// =============================================================================
// Operation Counts
// =============================================================================

/// Total enter attempts allowed for a single traversal before giving up.
pub const MAX_TRAVERSAL_ITERATIONS: u32 = 100_000;

/// Upper bound on distinct nodes tracked in a visiting set.
pub const MAX_VISITING_SET: u32 = 10_000;
