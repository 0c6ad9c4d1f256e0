//! Custom test assertions
//!
//! Assertion helpers for domain types that give more meaningful failure
//! messages than bare `assert!`.

use domain_ledger::{TrialBalance, ValidationReport};

/// Asserts that a validation report found no problems
pub fn assert_valid(report: &ValidationReport) {
    assert!(
        report.is_valid(),
        "expected a valid entry, got errors: {:?}",
        report.errors
    );
}

/// Asserts that the report contains an error mentioning the fragment
pub fn assert_has_error(report: &ValidationReport, fragment: &str) {
    assert!(
        report.errors.iter().any(|e| e.contains(fragment)),
        "no error containing {:?} in {:?}",
        fragment,
        report.errors
    );
}

/// Asserts the report found exactly the given number of errors
pub fn assert_error_count(report: &ValidationReport, expected: usize) {
    assert_eq!(
        report.errors.len(),
        expected,
        "expected {} errors, got {:?}",
        expected,
        report.errors
    );
}

/// Asserts that a trial balance balances, with both totals in the message
pub fn assert_trial_balanced(trial_balance: &TrialBalance) {
    assert!(
        trial_balance.is_balanced,
        "trial balance out of balance: debits={}, credits={}",
        trial_balance.total_debits, trial_balance.total_credits
    );
}
