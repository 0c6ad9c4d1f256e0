//! Journal entry validation
//!
//! The validator accumulates every applicable problem instead of stopping
//! at the first one, so a caller can surface the whole list to the user at
//! once. It never fails: the outcome is a [`ValidationReport`] value.

use rust_decimal::Decimal;

use crate::draft::{DraftEntry, DraftLine};
use crate::error::LedgerError;
use crate::totals::LineTotals;

/// How absent amounts are treated
///
/// The extraction pipeline sometimes delivers lines with no amount at all.
/// Lenient mode coerces those to zero, which matches the historical
/// behavior but can mask upstream data-quality bugs; strict mode reports
/// them as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Absent amounts are errors
    Strict,
    /// Absent amounts are coerced to zero
    #[default]
    Lenient,
}

/// Outcome of validating a draft entry
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Human-readable problems, in the order they were found
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// True iff no errors were found
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the report into a `Result` for callers that prefer `?`
    pub fn into_result(self) -> Result<(), LedgerError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(LedgerError::InvalidEntry(self.errors.join("; ")))
        }
    }
}

/// Validates a draft with the default (lenient) policy
pub fn validate(entry: &DraftEntry) -> ValidationReport {
    validate_with(entry, ValidationPolicy::default())
}

/// Validates a draft entry against the double-entry rules
///
/// Checks, in order: description present, entry date present, at least two
/// lines, per-line amount rules (1-indexed in messages), and finally that
/// debits equal credits after rounding both totals to 2 decimal places.
pub fn validate_with(entry: &DraftEntry, policy: ValidationPolicy) -> ValidationReport {
    let mut errors = Vec::new();

    if entry
        .description
        .as_deref()
        .map_or(true, |d| d.trim().is_empty())
    {
        errors.push("Description is required".to_string());
    }

    if entry.entry_date.is_none() {
        errors.push("Entry date is required".to_string());
    }

    if entry.lines.len() < 2 {
        errors.push("A journal entry requires at least two lines".to_string());
    }

    for (index, line) in entry.lines.iter().enumerate() {
        check_line(index + 1, line, policy, &mut errors);
    }

    let totals = LineTotals::of(entry.lines.iter().map(DraftLine::coerced_amounts));
    if !totals.is_balanced {
        errors.push(format!(
            "Entry is not balanced: total debits {:.2} != total credits {:.2}",
            totals.total_debit, totals.total_credit
        ));
    }

    ValidationReport { errors }
}

fn check_line(number: usize, line: &DraftLine, policy: ValidationPolicy, errors: &mut Vec<String>) {
    if line.account_id.is_none() {
        errors.push(format!("Line {number}: account is required"));
    }

    if policy == ValidationPolicy::Strict {
        if line.debit.is_none() {
            errors.push(format!("Line {number}: debit amount is missing"));
        }
        if line.credit.is_none() {
            errors.push(format!("Line {number}: credit amount is missing"));
        }
    } else if line.debit.is_none() || line.credit.is_none() {
        tracing::debug!(line = number, "coercing absent amount to zero");
    }

    let (debit, credit) = line.coerced_amounts();

    if debit < Decimal::ZERO {
        errors.push(format!("Line {number}: debit amount cannot be negative"));
    }
    if credit < Decimal::ZERO {
        errors.push(format!("Line {number}: credit amount cannot be negative"));
    }

    let has_debit = debit > Decimal::ZERO;
    let has_credit = credit > Decimal::ZERO;

    if has_debit && has_credit {
        errors.push(format!(
            "Line {number}: cannot have both a debit and a credit"
        ));
    }
    if !has_debit && !has_credit && debit >= Decimal::ZERO && credit >= Decimal::ZERO {
        errors.push(format!(
            "Line {number}: must have either a debit or a credit"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::AccountId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_two_line_entry() {
        let draft = DraftEntry {
            description: Some("Cash sale".to_string()),
            entry_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 15),
            lines: vec![
                DraftLine::debit(AccountId::new(), dec!(100)),
                DraftLine::credit(AccountId::new(), dec!(100)),
            ],
        };

        let report = validate(&draft);
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_whitespace_description_is_blank() {
        let draft = DraftEntry {
            description: Some("   ".to_string()),
            entry_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 15),
            lines: vec![
                DraftLine::debit(AccountId::new(), dec!(100)),
                DraftLine::credit(AccountId::new(), dec!(100)),
            ],
        };

        let report = validate(&draft);
        assert_eq!(report.errors, vec!["Description is required".to_string()]);
    }

    #[test]
    fn test_into_result_maps_to_error() {
        let report = validate(&DraftEntry::default());
        let err = report.into_result().unwrap_err();
        assert!(matches!(err, LedgerError::InvalidEntry(_)));
    }
}
