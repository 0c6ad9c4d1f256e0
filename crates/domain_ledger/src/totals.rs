//! Line totals
//!
//! Debit and credit columns are summed independently and each sum is
//! rounded to 2 decimal places before comparison. Rounding is half away
//! from zero, the same convention the validator and reports use.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounds to 2 decimal places, half away from zero
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Aggregate debit/credit totals for a set of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineTotals {
    /// Sum of all debit amounts, rounded to 2 dp
    pub total_debit: Decimal,
    /// Sum of all credit amounts, rounded to 2 dp
    pub total_credit: Decimal,
    /// True if the rounded totals are equal
    pub is_balanced: bool,
}

impl LineTotals {
    /// Computes totals from (debit, credit) amount pairs
    ///
    /// Consumed by the validator and directly by report builders (trial
    /// balance, general ledger). Pure: the same input always yields the
    /// same totals.
    pub fn of<I>(amounts: I) -> Self
    where
        I: IntoIterator<Item = (Decimal, Decimal)>,
    {
        let mut debits = Decimal::ZERO;
        let mut credits = Decimal::ZERO;

        for (debit, credit) in amounts {
            debits += debit;
            credits += credit;
        }

        let total_debit = round2(debits);
        let total_credit = round2(credits);

        Self {
            total_debit,
            total_credit,
            is_balanced: total_debit == total_credit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balanced_totals() {
        let totals = LineTotals::of(vec![
            (dec!(100), dec!(0)),
            (dec!(0), dec!(60)),
            (dec!(0), dec!(40)),
        ]);

        assert_eq!(totals.total_debit, dec!(100.00));
        assert_eq!(totals.total_credit, dec!(100.00));
        assert!(totals.is_balanced);
    }

    #[test]
    fn test_rounding_happens_on_the_sums() {
        // Each sum is rounded once, after accumulation
        let totals = LineTotals::of(vec![
            (dec!(0.004), dec!(0)),
            (dec!(0.004), dec!(0)),
            (dec!(0), dec!(0.01))
        ]);

        // 0.008 rounds to 0.01, so the entry balances
        assert_eq!(totals.total_debit, dec!(0.01));
        assert!(totals.is_balanced);
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let totals = LineTotals::of(vec![(dec!(10.005), dec!(10.00))]);

        assert_eq!(totals.total_debit, dec!(10.01));
        assert_eq!(totals.total_credit, dec!(10.00));
        assert!(!totals.is_balanced);
    }

    #[test]
    fn test_empty_lines_balance_at_zero() {
        let totals = LineTotals::of(Vec::new());
        assert_eq!(totals.total_debit, Decimal::ZERO);
        assert!(totals.is_balanced);
    }
}
