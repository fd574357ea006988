//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! bill split test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built receipts, payloads and recognised text
//! - `builders`: Builder for ledgers in a known state
//! - `assertions`: Assertion helpers for money and ledger invariants
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
