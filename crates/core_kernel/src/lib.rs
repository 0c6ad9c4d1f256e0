//! Core Kernel - Foundational types for the Meezan accounting system
//!
//! This crate provides the building blocks shared by all domain modules:
//! - Money types with precise decimal arithmetic
//! - Ledger date ranges and organization timezone handling
//! - Strongly-typed identifiers

pub mod error;
pub mod identifiers;
pub mod money;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{AccountId, JournalEntryId, JournalLineId, OrganizationId, PeriodId};
pub use money::{Currency, Money, MoneyError};
pub use temporal::{DateRange, TemporalError, Timezone};
