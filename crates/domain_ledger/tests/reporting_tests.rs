//! Tests for balance computation, the trial balance, and display formatting

use rust_decimal_macros::dec;

use core_kernel::{Currency, Money};
use domain_ledger::{
    account_balance, format_amount, format_money, AccountActivity, NormalBalance, TrialBalance,
};
use test_utils::{account_by_code, assert_trial_balanced, standard_chart};

// ============================================================================
// Balance sign convention
// ============================================================================

#[test]
fn test_debit_normal_account_sits_positive_on_its_side() {
    assert_eq!(account_balance(dec!(100), dec!(40), NormalBalance::Debit), dec!(60));
    assert_eq!(account_balance(dec!(40), dec!(100), NormalBalance::Debit), dec!(-60));
}

#[test]
fn test_credit_normal_account_mirrors_the_sign() {
    assert_eq!(account_balance(dec!(100), dec!(40), NormalBalance::Credit), dec!(-60));
    assert_eq!(account_balance(dec!(40), dec!(100), NormalBalance::Credit), dec!(60));
}

#[test]
fn test_untouched_account_balances_at_zero() {
    assert_eq!(
        account_balance(dec!(0), dec!(0), NormalBalance::Debit),
        dec!(0)
    );
}

// ============================================================================
// Trial balance
// ============================================================================

#[test]
fn test_trial_balance_over_a_simple_sale() {
    // AED 105 cash sale: 100 revenue + 5 VAT output
    let chart = standard_chart();
    let activity = vec![
        AccountActivity::new(account_by_code(&chart, "1010").clone(), dec!(105), dec!(0)),
        AccountActivity::new(account_by_code(&chart, "4000").clone(), dec!(0), dec!(100)),
        AccountActivity::new(account_by_code(&chart, "2100").clone(), dec!(0), dec!(5)),
    ];

    let tb = TrialBalance::build(&activity, Currency::Aed);

    assert_trial_balanced(&tb);
    assert_eq!(tb.total_debits.amount(), dec!(105.00));
    assert_eq!(tb.total_credits.amount(), dec!(105.00));
    assert_eq!(tb.rows.len(), 3);
}

#[test]
fn test_rows_are_sorted_by_account_code() {
    let chart = standard_chart();
    let activity = vec![
        AccountActivity::new(account_by_code(&chart, "4000").clone(), dec!(0), dec!(100)),
        AccountActivity::new(account_by_code(&chart, "1010").clone(), dec!(100), dec!(0)),
    ];

    let tb = TrialBalance::build(&activity, Currency::Aed);

    let codes: Vec<&str> = tb.rows.iter().map(|r| r.account_code.as_str()).collect();
    assert_eq!(codes, vec!["1010", "4000"]);
}

#[test]
fn test_zero_balance_accounts_are_omitted() {
    let chart = standard_chart();
    let activity = vec![
        AccountActivity::new(account_by_code(&chart, "1010").clone(), dec!(50), dec!(50)),
        AccountActivity::new(account_by_code(&chart, "1000").clone(), dec!(75), dec!(0)),
        AccountActivity::new(account_by_code(&chart, "3000").clone(), dec!(0), dec!(75)),
    ];

    let tb = TrialBalance::build(&activity, Currency::Aed);

    assert_eq!(tb.rows.len(), 2);
    assert_trial_balanced(&tb);
}

#[test]
fn test_contra_balances_keep_the_report_balanced() {
    // Overdrawn bank (asset with credit balance) against owner's capital
    // drawdown keeps debits == credits
    let chart = standard_chart();
    let activity = vec![
        AccountActivity::new(account_by_code(&chart, "1010").clone(), dec!(100), dec!(300)),
        AccountActivity::new(account_by_code(&chart, "3000").clone(), dec!(200), dec!(0)),
    ];

    let tb = TrialBalance::build(&activity, Currency::Aed);

    assert_trial_balanced(&tb);
    // The overdraft shows in the credit column
    let bank_row = tb.rows.iter().find(|r| r.account_code == "1010").unwrap();
    assert_eq!(bank_row.credit.amount(), dec!(200.00));
    assert!(bank_row.debit.is_zero());
}

// ============================================================================
// Display formatting
// ============================================================================

#[test]
fn test_amounts_format_with_grouping() {
    assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
    assert_eq!(format_amount(dec!(-42)), "-42.00");
}

#[test]
fn test_money_formats_with_currency_code() {
    assert_eq!(
        format_money(&Money::new(dec!(18500), Currency::Aed)),
        "AED 18,500.00"
    );
}
