//! Chart of accounts
//!
//! Accounts carry a category that fixes their normal-balance side once and
//! for all: asset and expense accounts grow on the debit side, liability,
//! equity, and revenue accounts grow on the credit side.

use serde::{Deserialize, Serialize};

use core_kernel::AccountId;

/// The side on which an account's balance naturally increases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalBalance {
    Debit,
    Credit,
}

/// Account categories in the chart of accounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Asset accounts (debit normal balance)
    Asset,
    /// Liability accounts (credit normal balance)
    Liability,
    /// Equity accounts (credit normal balance)
    Equity,
    /// Revenue accounts (credit normal balance)
    Revenue,
    /// Expense accounts (debit normal balance)
    Expense,
}

impl AccountCategory {
    /// Returns the normal-balance side this category implies
    ///
    /// The mapping is an accounting convention, not configuration: it is
    /// immutable for the life of an account.
    pub fn normal_balance(&self) -> NormalBalance {
        match self {
            AccountCategory::Asset | AccountCategory::Expense => NormalBalance::Debit,
            AccountCategory::Liability | AccountCategory::Equity | AccountCategory::Revenue => {
                NormalBalance::Credit
            }
        }
    }

    /// Returns true if this category has a debit normal balance
    pub fn is_debit_normal(&self) -> bool {
        self.normal_balance() == NormalBalance::Debit
    }
}

/// An account in the chart of accounts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// Account code, unique within an organization (e.g., "1000")
    pub code: String,
    /// Account name
    pub name: String,
    /// Account category
    pub category: AccountCategory,
    /// Description
    pub description: Option<String>,
    /// Whether the account accepts new postings
    pub is_active: bool,
    /// System accounts are seeded by the application and cannot be deleted
    pub is_system: bool,
}

impl Account {
    /// Creates a new active, non-system account
    pub fn new(
        id: AccountId,
        code: impl Into<String>,
        name: impl Into<String>,
        category: AccountCategory,
    ) -> Self {
        Self {
            id,
            code: code.into(),
            name: name.into(),
            category,
            description: None,
            is_active: true,
            is_system: false,
        }
    }

    /// Marks the account as a system account
    pub fn system(mut self) -> Self {
        self.is_system = true;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the normal-balance side of this account
    pub fn normal_balance(&self) -> NormalBalance {
        self.category.normal_balance()
    }
}

/// Standard chart of accounts seeded for a new SME organization
pub struct SmeChartOfAccounts;

impl SmeChartOfAccounts {
    /// Creates the standard UAE SME accounts, including the VAT control
    /// accounts the VAT-201 return is built from
    pub fn standard_accounts() -> Vec<Account> {
        vec![
            // Assets
            Account::new(AccountId::new(), "1000", "Cash on Hand", AccountCategory::Asset).system(),
            Account::new(AccountId::new(), "1010", "Bank - Current Account", AccountCategory::Asset)
                .system(),
            Account::new(AccountId::new(), "1100", "Accounts Receivable", AccountCategory::Asset)
                .system(),
            Account::new(AccountId::new(), "1200", "VAT Input (Recoverable)", AccountCategory::Asset)
                .system()
                .with_description("VAT paid on purchases, recoverable on the VAT-201 return"),
            Account::new(AccountId::new(), "1500", "Office Equipment", AccountCategory::Asset),
            // Liabilities
            Account::new(AccountId::new(), "2000", "Accounts Payable", AccountCategory::Liability)
                .system(),
            Account::new(AccountId::new(), "2100", "VAT Output (Payable)", AccountCategory::Liability)
                .system()
                .with_description("VAT collected on sales, payable on the VAT-201 return"),
            Account::new(AccountId::new(), "2200", "Accrued Expenses", AccountCategory::Liability),
            // Equity
            Account::new(AccountId::new(), "3000", "Owner's Capital", AccountCategory::Equity)
                .system(),
            Account::new(AccountId::new(), "3100", "Retained Earnings", AccountCategory::Equity)
                .system(),
            // Revenue
            Account::new(AccountId::new(), "4000", "Sales Revenue", AccountCategory::Revenue)
                .system(),
            Account::new(AccountId::new(), "4100", "Service Revenue", AccountCategory::Revenue),
            // Expenses
            Account::new(AccountId::new(), "5000", "Cost of Goods Sold", AccountCategory::Expense)
                .system(),
            Account::new(AccountId::new(), "5100", "Rent Expense", AccountCategory::Expense),
            Account::new(AccountId::new(), "5200", "Salaries Expense", AccountCategory::Expense),
            Account::new(AccountId::new(), "5300", "Bank Charges", AccountCategory::Expense),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_normal_balance_convention() {
        assert_eq!(AccountCategory::Asset.normal_balance(), NormalBalance::Debit);
        assert_eq!(AccountCategory::Expense.normal_balance(), NormalBalance::Debit);
        assert_eq!(AccountCategory::Liability.normal_balance(), NormalBalance::Credit);
        assert_eq!(AccountCategory::Equity.normal_balance(), NormalBalance::Credit);
        assert_eq!(AccountCategory::Revenue.normal_balance(), NormalBalance::Credit);
    }

    #[test]
    fn test_standard_chart_has_unique_codes() {
        let accounts = SmeChartOfAccounts::standard_accounts();
        let mut codes: Vec<&str> = accounts.iter().map(|a| a.code.as_str()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), accounts.len());
    }
}
