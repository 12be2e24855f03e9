//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! charity ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built ledgers and amounts, including the demo scenario
//! - `builders`: Builder for ledgers described by participant names
//! - `assertions`: Custom assertion helpers for ledger invariants
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
