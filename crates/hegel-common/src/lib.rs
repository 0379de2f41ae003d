//! Common types and utilities for the hegel type checker.
//!
//! This crate provides the pieces shared by every hegel crate:
//! - Centralized recursion limits (`limits`)
//! - Solver configuration loaded from checker settings (`options`)
//! - Tracing subscriber setup for debugging (`tracing_config`)

// Centralized limits and thresholds
pub mod limits;

// Solver configuration
pub mod options;
pub use options::SolverOptions;

// Tracing setup driven by HEGEL_LOG / HEGEL_LOG_FORMAT
pub mod tracing_config;
pub use tracing_config::init_tracing;
