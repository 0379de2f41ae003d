//! Type graph and type algebra
//!
//! Inferred and annotated types are nodes in a shared, interned type graph.
//! This crate implements the operations a checker runs over those nodes:
//!
//! - **Equality / subtyping**: [`TypeRelation`] (structural, with nominal
//!   links and generic-identity comparison for collections)
//! - **Property access**: [`PropertyResolver`] (index signatures, tuple
//!   positions, object members, nominal supertypes)
//! - **Substitution**: [`TypeInstantiator`] / [`change_all`] with structural
//!   sharing
//! - **Difference trails**: [`DifferenceCollector`] for diagnostics
//! - **Containment**: [`contains`] / [`weak_contains`]
//! - **Nominal marking**: [`make_nominal`], copy-on-write
//!
//! Key properties:
//! - O(1) reference equality via `TypeId` comparison
//! - Immutable nodes: every transform returns a handle, never mutates one
//! - Every traversal bounded by a [`RecursionGuard`] configured from
//!   [`SolverOptions`](hegel_common::SolverOptions)
mod contains;
mod db;
mod difference;
pub mod error;
pub mod format;
mod instantiate;
mod intern;
mod nominal;
mod property;
pub mod recursion;
mod relation;
mod scope;
pub mod types;

pub use contains::{Containment, ContainsChecker, contains, weak_contains};
pub use db::TypeDatabase;
pub use difference::{DifferenceCollector, get_difference};
pub use error::TypeGraphError;
pub use instantiate::{TypeInstantiator, TypeSubstitution, change_all};
pub use intern::TypeInterner;
pub use nominal::make_nominal;
pub use property::{PropertyResolver, get_property_type};
pub use recursion::{RecursionGuard, RecursionProfile, RecursionResult};
pub use relation::{
    TypeRelation, equals_to, get_opponent_type, is_principal_type_for, is_super_type_for,
};
pub use scope::TypeScope;
pub use types::{
    IntrinsicKind, KeyKind, LiteralValue, PropertyInfo, PropertyKey, TypeData, TypeDifference,
    TypeId, TypeList, TypeNode,
};

// Test modules: most are loaded by their source files via #[path = "tests/..."]
// declarations. Only cross-cutting suites live here.
#[cfg(test)]
#[path = "../tests/collection_algebra_tests.rs"]
mod collection_algebra_tests;
#[cfg(test)]
#[path = "../tests/recursive_type_tests.rs"]
mod recursive_type_tests;
