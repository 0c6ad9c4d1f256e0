//! Builders for test data construction
//!
//! Thin wrappers over the domain builders that fill in sensible defaults
//! so tests only state what they care about.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use core_kernel::{AccountId, OrganizationId};
use domain_ledger::{DraftEntry, DraftLine, JournalEntry};

/// Builds journal entries with test defaults
pub struct EntryBuilder {
    organization_id: OrganizationId,
    entry_date: NaiveDate,
    description: String,
    lines: Vec<(AccountId, Decimal, Decimal)>,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            organization_id: OrganizationId::new(),
            entry_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            description: "Test entry".to_string(),
            lines: Vec::new(),
        }
    }

    pub fn for_organization(mut self, organization_id: OrganizationId) -> Self {
        self.organization_id = organization_id;
        self
    }

    pub fn on(mut self, entry_date: NaiveDate) -> Self {
        self.entry_date = entry_date;
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn debit(mut self, account_id: AccountId, amount: Decimal) -> Self {
        self.lines.push((account_id, amount, Decimal::ZERO));
        self
    }

    pub fn credit(mut self, account_id: AccountId, amount: Decimal) -> Self {
        self.lines.push((account_id, Decimal::ZERO, amount));
        self
    }

    /// A balanced two-line entry between two fresh accounts
    pub fn balanced_pair(self, amount: Decimal) -> Self {
        self.debit(AccountId::new(), amount)
            .credit(AccountId::new(), amount)
    }

    pub fn build(self) -> JournalEntry {
        let mut entry =
            JournalEntry::new(self.organization_id, self.entry_date, self.description);
        for (account_id, debit, credit) in self.lines {
            entry = if credit.is_zero() {
                entry.debit(account_id, debit)
            } else {
                entry.credit(account_id, credit)
            };
        }
        entry
    }

    /// Builds the draft form directly, for validator tests
    pub fn build_draft(self) -> DraftEntry {
        DraftEntry::from(&self.build())
    }
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds partially-filled drafts, the shape the validator sees from
/// upstream extraction
pub struct DraftBuilder {
    draft: DraftEntry,
}

impl DraftBuilder {
    pub fn new() -> Self {
        Self {
            draft: DraftEntry::default(),
        }
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.draft.description = Some(description.into());
        self
    }

    pub fn on(mut self, entry_date: NaiveDate) -> Self {
        self.draft.entry_date = Some(entry_date);
        self
    }

    pub fn line(mut self, line: DraftLine) -> Self {
        self.draft.lines.push(line);
        self
    }

    pub fn build(self) -> DraftEntry {
        self.draft
    }
}

impl Default for DraftBuilder {
    fn default() -> Self {
        Self::new()
    }
}
