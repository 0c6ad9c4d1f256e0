//! Account balances and the trial balance report
//!
//! A balance is signed by the account's normal side: positive when the
//! account sits on its natural side, negative otherwise. A credit balance
//! in an asset account therefore shows as negative, the standard display
//! convention.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{AccountId, Currency, Money};

use crate::account::{Account, NormalBalance};
use crate::totals::round2;

/// Computes the signed balance from accumulated debit/credit totals
///
/// Debit-normal accounts: `round2(debits - credits)`.
/// Credit-normal accounts: `round2(credits - debits)`.
pub fn account_balance(
    total_debit: Decimal,
    total_credit: Decimal,
    normal_balance: NormalBalance,
) -> Decimal {
    match normal_balance {
        NormalBalance::Debit => round2(total_debit - total_credit),
        NormalBalance::Credit => round2(total_credit - total_debit),
    }
}

/// Accumulated posting totals for one account, as extracted by the caller
/// from the persisted ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountActivity {
    pub account: Account,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
}

impl AccountActivity {
    pub fn new(account: Account, total_debit: Decimal, total_credit: Decimal) -> Self {
        Self {
            account,
            total_debit,
            total_credit,
        }
    }

    /// Signed balance per the account's normal side
    pub fn balance(&self) -> Decimal {
        account_balance(
            self.total_debit,
            self.total_credit,
            self.account.normal_balance(),
        )
    }
}

/// One row of the trial balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account_id: AccountId,
    pub account_code: String,
    pub account_name: String,
    /// Balance shown in the debit column
    pub debit: Money,
    /// Balance shown in the credit column
    pub credit: Money,
}

/// Trial balance report
///
/// Confirms the ledger invariant: over balanced entries, total debit
/// balances equal total credit balances.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalance {
    pub rows: Vec<TrialBalanceRow>,
    pub total_debits: Money,
    pub total_credits: Money,
    pub is_balanced: bool,
}

impl TrialBalance {
    /// Builds the report from per-account activity
    ///
    /// A positive balance lands in the account's normal column; a negative
    /// (contra) balance lands in the opposite column as its absolute
    /// value. Accounts with a zero balance are omitted. Rows are ordered
    /// by account code.
    pub fn build(activity: &[AccountActivity], currency: Currency) -> Self {
        let mut rows = Vec::new();
        let mut total_debits = Money::zero(currency);
        let mut total_credits = Money::zero(currency);

        for item in activity {
            let balance = item.balance();
            if balance.is_zero() {
                continue;
            }

            let natural_side = if balance > Decimal::ZERO {
                item.account.normal_balance()
            } else {
                // Contra balance shows on the opposite side
                match item.account.normal_balance() {
                    NormalBalance::Debit => NormalBalance::Credit,
                    NormalBalance::Credit => NormalBalance::Debit,
                }
            };

            let shown = Money::new(balance.abs(), currency);
            let (debit, credit) = match natural_side {
                NormalBalance::Debit => (shown, Money::zero(currency)),
                NormalBalance::Credit => (Money::zero(currency), shown),
            };

            total_debits = total_debits + debit;
            total_credits = total_credits + credit;

            rows.push(TrialBalanceRow {
                account_id: item.account.id,
                account_code: item.account.code.clone(),
                account_name: item.account.name.clone(),
                debit,
                credit,
            });
        }

        rows.sort_by(|a, b| a.account_code.cmp(&b.account_code));

        Self {
            rows,
            total_debits,
            total_credits,
            is_balanced: total_debits == total_credits,
        }
    }
}
