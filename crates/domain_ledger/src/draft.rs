//! Draft entry representation for validation
//!
//! Upstream producers (manual forms, invoice posting, the document
//! extraction pipeline) hand over partially-filled records: amounts,
//! accounts, and dates may all be absent. Drafts make that absence
//! representable so the validator can report every problem instead of
//! panicking on the first missing field.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::AccountId;

use crate::entry::JournalEntry;

/// One proposed posting line, fields optional as received
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftLine {
    /// Account to post to, if known
    #[serde(default)]
    pub account_id: Option<AccountId>,
    /// Debit amount, if provided
    #[serde(default)]
    pub debit: Option<Decimal>,
    /// Credit amount, if provided
    #[serde(default)]
    pub credit: Option<Decimal>,
}

impl DraftLine {
    /// A line with a debit amount only
    pub fn debit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id: Some(account_id),
            debit: Some(amount),
            credit: Some(Decimal::ZERO),
        }
    }

    /// A line with a credit amount only
    pub fn credit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            account_id: Some(account_id),
            debit: Some(Decimal::ZERO),
            credit: Some(amount),
        }
    }

    /// Returns the (debit, credit) pair with absent amounts coerced to zero
    pub fn coerced_amounts(&self) -> (Decimal, Decimal) {
        (
            self.debit.unwrap_or(Decimal::ZERO),
            self.credit.unwrap_or(Decimal::ZERO),
        )
    }
}

/// A proposed journal entry as handed to the validator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftEntry {
    /// Description of the transaction
    #[serde(default)]
    pub description: Option<String>,
    /// Business date of the entry
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    /// Proposed lines
    #[serde(default)]
    pub lines: Vec<DraftLine>,
}

impl From<&JournalEntry> for DraftEntry {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            description: Some(entry.description.clone()),
            entry_date: Some(entry.entry_date),
            lines: entry
                .lines
                .iter()
                .map(|line| DraftLine {
                    account_id: Some(line.account_id),
                    debit: Some(line.debit),
                    credit: Some(line.credit),
                })
                .collect(),
        }
    }
}
