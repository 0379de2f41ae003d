//! Recursion guard shared by every traversal over the type graph.
//!
//! Type nodes are shared and aliases may be back-patched into cycles, so each
//! traversal (equality, subtyping, substitution, property access, containment,
//! difference) runs under a `RecursionGuard` that combines:
//! 1. **Cycle detection** via a visiting set (`FxHashSet<K>`)
//! 2. **Depth limiting** to prevent stack overflow
//! 3. **Iteration bounding** to cap total work
//!
//! Limits come from the session's [`SolverOptions`] through a
//! [`RecursionProfile`], so call sites never carry magic numbers.
//!
//! In debug builds, dropping a guard with active entries panics, which catches
//! a forgotten `leave()`.

use hegel_common::SolverOptions;
use hegel_common::limits::MAX_VISITING_SET;
use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Which limit set a traversal uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionProfile {
    /// Equality and subtyping.
    Relation,
    /// Type-variable substitution.
    Substitution,
    /// Property-type resolution through nominal links.
    PropertyAccess,
    /// Containment checks and difference trails.
    Traversal,
    /// Explicit limits, for tests and one-off walks.
    Custom { max_depth: u32, max_iterations: u32 },
}

impl RecursionProfile {
    /// Maximum recursion depth for this profile under `options`.
    pub const fn max_depth(self, options: &SolverOptions) -> u32 {
        match self {
            Self::Relation => options.max_relation_depth,
            Self::Substitution => options.max_substitution_depth,
            Self::PropertyAccess => options.max_property_access_depth,
            Self::Traversal => options.max_traversal_depth,
            Self::Custom { max_depth, .. } => max_depth,
        }
    }

    /// Maximum iteration count for this profile under `options`.
    pub const fn max_iterations(self, options: &SolverOptions) -> u32 {
        match self {
            Self::Custom { max_iterations, .. } => max_iterations,
            _ => options.max_iterations,
        }
    }
}

/// Result of attempting to enter a recursive computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    /// Proceed with the computation.
    Entered,
    /// This key is already being visited.
    Cycle,
    /// Maximum recursion depth exceeded.
    DepthExceeded,
    /// Maximum iteration count exceeded.
    IterationExceeded,
}

/// Tracks recursion state for cycle detection, depth limiting and iteration
/// bounding.
///
/// ```ignore
/// let mut guard = RecursionGuard::for_profile(RecursionProfile::Relation, db.options());
/// match guard.enter((source, target)) {
///     RecursionResult::Entered => {
///         let result = compare(source, target);
///         guard.leave((source, target));
///         result
///     }
///     RecursionResult::Cycle => true,
///     _ => false,
/// }
/// ```
pub struct RecursionGuard<K: Hash + Eq + Copy> {
    visiting: FxHashSet<K>,
    depth: u32,
    iterations: u32,
    max_depth: u32,
    max_iterations: u32,
    exceeded: bool,
}

impl<K: Hash + Eq + Copy> RecursionGuard<K> {
    /// Create a guard with explicit limits.
    pub fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            visiting: FxHashSet::default(),
            depth: 0,
            iterations: 0,
            max_depth,
            max_iterations,
            exceeded: false,
        }
    }

    /// Create a guard from a profile and the session options.
    pub fn for_profile(profile: RecursionProfile, options: &SolverOptions) -> Self {
        Self::new(profile.max_depth(options), profile.max_iterations(options))
    }

    /// Try to enter a recursive computation for `key`.
    ///
    /// On [`RecursionResult::Entered`] the caller must call
    /// [`leave`](Self::leave) with the same key when done.
    pub fn enter(&mut self, key: K) -> RecursionResult {
        self.iterations = self.iterations.saturating_add(1);

        if self.iterations > self.max_iterations {
            self.exceeded = true;
            return RecursionResult::IterationExceeded;
        }
        if self.depth >= self.max_depth {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }
        if self.visiting.contains(&key) {
            return RecursionResult::Cycle;
        }
        if self.visiting.len() as u32 >= MAX_VISITING_SET {
            self.exceeded = true;
            return RecursionResult::DepthExceeded;
        }

        self.visiting.insert(key);
        self.depth += 1;
        RecursionResult::Entered
    }

    /// Leave a recursive computation for `key`.
    pub fn leave(&mut self, key: K) {
        let was_present = self.visiting.remove(&key);
        debug_assert!(
            was_present,
            "RecursionGuard::leave() called with a key that is not in the visiting set"
        );
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Sticky: stays `true` until [`reset`](Self::reset).
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }

    /// Reset all state while preserving configured limits.
    pub fn reset(&mut self) {
        self.visiting.clear();
        self.depth = 0;
        self.iterations = 0;
        self.exceeded = false;
    }
}

#[cfg(debug_assertions)]
impl<K: Hash + Eq + Copy> Drop for RecursionGuard<K> {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.visiting.is_empty() {
            panic!(
                "RecursionGuard dropped with {} active entries still in the visiting set",
                self.visiting.len(),
            );
        }
    }
}
