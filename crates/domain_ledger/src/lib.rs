//! Ledger Domain - Double-Entry Bookkeeping Engine
//!
//! This crate implements the arithmetic and validation rules of a
//! double-entry general ledger for multi-tenant SME accounting.
//!
//! # Double-Entry Principles
//!
//! Every journal entry records balanced debits and credits:
//! - Debits increase asset/expense accounts
//! - Credits increase liability/equity/revenue accounts
//! - The sum of all debits must equal the sum of all credits,
//!   compared after rounding to 2 decimal places
//!
//! # Scope
//!
//! Everything here is a synchronous, pure computation over caller-supplied
//! records. Persistence, sequencing, and state transitions (posting,
//! reversal approval, period close) belong to the surrounding application;
//! this crate validates drafts, computes totals and balances, formats entry
//! numbers, resolves periods, and builds the trial balance.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_ledger::{validate, DraftEntry, JournalEntry};
//!
//! let entry = JournalEntry::new(org_id, entry_date, "Office rent, March")
//!     .debit(rent_expense, dec!(5000))
//!     .credit(bank, dec!(5000));
//!
//! let report = validate(&DraftEntry::from(&entry));
//! assert!(report.is_valid());
//! ```

pub mod account;
pub mod balance;
pub mod draft;
pub mod entry;
pub mod error;
pub mod format;
pub mod numbering;
pub mod period;
pub mod totals;
pub mod validate;

pub use account::{Account, AccountCategory, NormalBalance, SmeChartOfAccounts};
pub use balance::{account_balance, AccountActivity, TrialBalance, TrialBalanceRow};
pub use draft::{DraftEntry, DraftLine};
pub use entry::{EntrySource, EntryStatus, JournalEntry, JournalEntryLine};
pub use error::LedgerError;
pub use format::{format_amount, format_money};
pub use numbering::entry_number;
pub use period::{find_period, AccountingPeriod, PeriodStatus};
pub use totals::{round2, LineTotals};
pub use validate::{validate, validate_with, ValidationPolicy, ValidationReport};
