//! Pre-built test data
//!
//! Fixtures mirror what a freshly-seeded organization looks like: the
//! standard chart of accounts and a calendar year of monthly periods.

use chrono::NaiveDate;

use core_kernel::OrganizationId;
use domain_ledger::{Account, AccountingPeriod, SmeChartOfAccounts};

/// Returns the standard seeded chart of accounts
pub fn standard_chart() -> Vec<Account> {
    SmeChartOfAccounts::standard_accounts()
}

/// Looks up an account by code, panicking with a useful message if absent
pub fn account_by_code<'a>(chart: &'a [Account], code: &str) -> &'a Account {
    chart
        .iter()
        .find(|a| a.code == code)
        .unwrap_or_else(|| panic!("no account with code {code} in fixture chart"))
}

/// Builds twelve open monthly periods for the given calendar year
pub fn calendar_year_periods(organization_id: OrganizationId, year: i32) -> Vec<AccountingPeriod> {
    (1..=12u32)
        .map(|month| {
            let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            let end = if month == 12 {
                NaiveDate::from_ymd_opt(year, 12, 31).unwrap()
            } else {
                NaiveDate::from_ymd_opt(year, month + 1, 1)
                    .unwrap()
                    .pred_opt()
                    .unwrap()
            };
            AccountingPeriod::new(
                organization_id,
                format!("{} {year}", month_name(month)),
                start,
                end,
            )
            .unwrap()
        })
        .collect()
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
