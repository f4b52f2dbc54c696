//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim evaluation test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built dates, amounts and raw claim records
//! - `builders`: Builder for claim inputs with approvable defaults
//! - `assertions`: Custom assertion helpers for evaluation results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
