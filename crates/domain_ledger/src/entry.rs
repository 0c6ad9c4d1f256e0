//! Journal entries and lines
//!
//! An entry is a dated, described group of debit/credit lines recording
//! one business transaction. Entries are built as drafts; the surrounding
//! application validates them (see [`crate::validate`]) before persisting
//! and manages the draft → posted → reversed lifecycle.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Currency, JournalEntryId, JournalLineId, OrganizationId, PeriodId};

use crate::totals::LineTotals;

/// Where an entry originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntrySource {
    Manual,
    Invoice,
    Bill,
    Payment,
    Transfer,
    Adjustment,
}

/// Lifecycle status of an entry
///
/// Transitions are managed by the surrounding application: an entry is
/// constructed as `Draft`, becomes `Posted` once persisted (debits and
/// credits are immutable from then on), and `Reversed` when a reversing
/// entry has been posted against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    Draft,
    Posted,
    Reversed,
}

/// One posting line of a journal entry
///
/// Exactly one of `debit`/`credit` is positive, the other is zero. Both
/// are always non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntryLine {
    /// Unique line identifier
    pub id: JournalLineId,
    /// Account posted to
    pub account_id: AccountId,
    /// Debit amount (>= 0)
    pub debit: Decimal,
    /// Credit amount (>= 0)
    pub credit: Decimal,
    /// Display order within the entry, 1-based
    pub line_order: u32,
    /// Optional line memo
    pub description: Option<String>,
    /// Tax treatment for VAT reporting (e.g., "SR" standard rated)
    pub tax_code: Option<String>,
}

impl JournalEntryLine {
    /// Creates a debit line
    pub fn debit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            id: JournalLineId::new(),
            account_id,
            debit: amount,
            credit: Decimal::ZERO,
            line_order: 0,
            description: None,
            tax_code: None,
        }
    }

    /// Creates a credit line
    pub fn credit(account_id: AccountId, amount: Decimal) -> Self {
        Self {
            id: JournalLineId::new(),
            account_id,
            debit: Decimal::ZERO,
            credit: amount,
            line_order: 0,
            description: None,
            tax_code: None,
        }
    }

    /// Sets the line memo
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the tax code
    pub fn with_tax_code(mut self, tax_code: impl Into<String>) -> Self {
        self.tax_code = Some(tax_code.into());
        self
    }

    /// Returns the (debit, credit) amount pair
    pub fn amounts(&self) -> (Decimal, Decimal) {
        (self.debit, self.credit)
    }

    /// Returns a copy with debit and credit swapped, for reversals
    fn swapped(&self) -> Self {
        Self {
            id: JournalLineId::new(),
            account_id: self.account_id,
            debit: self.credit,
            credit: self.debit,
            line_order: self.line_order,
            description: self.description.clone(),
            tax_code: self.tax_code.clone(),
        }
    }
}

/// A journal entry: header plus ordered lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Unique identifier
    pub id: JournalEntryId,
    /// Owning organization (tenant context is always explicit)
    pub organization_id: OrganizationId,
    /// Accounting period the entry is assigned to
    pub period_id: Option<PeriodId>,
    /// Human-readable sequential number, assigned by the persistence layer
    pub entry_number: Option<String>,
    /// Business date of the entry
    pub entry_date: NaiveDate,
    /// Required description of the transaction
    pub description: String,
    /// Where the entry originated
    pub source: EntrySource,
    /// Lifecycle status
    pub status: EntryStatus,
    /// Entry currency
    pub currency: Currency,
    /// Exchange rate to the organization's functional currency
    pub exchange_rate: Decimal,
    /// Posting lines, in display order
    pub lines: Vec<JournalEntryLine>,
    /// Derived: sum of debit amounts, rounded to 2 dp
    pub total_debit: Decimal,
    /// Derived: sum of credit amounts, rounded to 2 dp
    pub total_credit: Decimal,
    /// Audit timestamp
    pub created_at: DateTime<Utc>,
}

impl JournalEntry {
    /// Creates a draft entry with no lines
    pub fn new(
        organization_id: OrganizationId,
        entry_date: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: JournalEntryId::new(),
            organization_id,
            period_id: None,
            entry_number: None,
            entry_date,
            description: description.into(),
            source: EntrySource::Manual,
            status: EntryStatus::Draft,
            currency: Currency::Aed,
            exchange_rate: Decimal::ONE,
            lines: Vec::new(),
            total_debit: Decimal::ZERO,
            total_credit: Decimal::ZERO,
            created_at: Utc::now(),
        }
    }

    /// Sets the source
    pub fn from_source(mut self, source: EntrySource) -> Self {
        self.source = source;
        self
    }

    /// Sets currency and exchange rate to the functional currency
    pub fn in_currency(mut self, currency: Currency, exchange_rate: Decimal) -> Self {
        self.currency = currency;
        self.exchange_rate = exchange_rate;
        self
    }

    /// Assigns the entry to a period
    pub fn in_period(mut self, period_id: PeriodId) -> Self {
        self.period_id = Some(period_id);
        self
    }

    /// Adds a debit line
    pub fn debit(self, account_id: AccountId, amount: Decimal) -> Self {
        self.line(JournalEntryLine::debit(account_id, amount))
    }

    /// Adds a credit line
    pub fn credit(self, account_id: AccountId, amount: Decimal) -> Self {
        self.line(JournalEntryLine::credit(account_id, amount))
    }

    /// Adds a prepared line, assigning its display order
    pub fn line(mut self, mut line: JournalEntryLine) -> Self {
        line.line_order = self.lines.len() as u32 + 1;
        self.lines.push(line);
        let totals = self.totals();
        self.total_debit = totals.total_debit;
        self.total_credit = totals.total_credit;
        self
    }

    /// Computes aggregate totals over the lines
    pub fn totals(&self) -> LineTotals {
        LineTotals::of(self.lines.iter().map(JournalEntryLine::amounts))
    }

    /// Returns true if rounded debits equal rounded credits
    pub fn is_balanced(&self) -> bool {
        self.totals().is_balanced
    }

    /// Builds the reversing draft for this entry
    ///
    /// Every line is mirrored with debit and credit swapped, so posting
    /// the reversal cancels this entry's effect on every account. The
    /// caller posts the draft and marks this entry `Reversed`.
    pub fn reversal(&self, reversal_date: NaiveDate, reason: &str) -> JournalEntry {
        let mut reversal = JournalEntry::new(
            self.organization_id,
            reversal_date,
            format!("Reversal of {}: {}", self.reference(), reason),
        )
        .from_source(EntrySource::Adjustment)
        .in_currency(self.currency, self.exchange_rate);

        for line in &self.lines {
            reversal = reversal.line(line.swapped());
        }

        reversal
    }

    /// The number if assigned, otherwise the id
    fn reference(&self) -> String {
        self.entry_number
            .clone()
            .unwrap_or_else(|| self.id.to_string())
    }
}
