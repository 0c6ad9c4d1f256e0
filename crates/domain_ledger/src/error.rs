//! Ledger domain errors
//!
//! Validation failures are reported as values (`ValidationReport`), never
//! as errors. `LedgerError` exists for callers that prefer `?`-style
//! handling once a report has been inspected, and for the genuinely
//! exceptional cases (unknown accounts, bad periods).

use core_kernel::{MoneyError, TemporalError};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Account not found
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Journal entry not found
    #[error("Journal entry not found: {0}")]
    EntryNotFound(String),

    /// Entry failed double-entry validation
    #[error("Invalid journal entry: {0}")]
    InvalidEntry(String),

    /// Entry is not balanced
    #[error("Unbalanced entry: debits={debits}, credits={credits}")]
    UnbalancedEntry { debits: Decimal, credits: Decimal },

    /// No accounting period covers the entry date
    #[error("No accounting period contains {0}")]
    PeriodNotFound(chrono::NaiveDate),

    /// Money arithmetic failed
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Date range construction failed
    #[error("Temporal error: {0}")]
    Temporal(#[from] TemporalError),
}
