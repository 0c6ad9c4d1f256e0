//! Test Utilities Crate
//!
//! Shared test infrastructure for the ledger test suite.
//!
//! # Modules
//!
//! - `fixtures`: pre-built charts of accounts and period calendars
//! - `builders`: builder helpers for entries and drafts
//! - `assertions`: assertion helpers with meaningful failure messages
//! - `generators`: property-based test data strategies

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;
