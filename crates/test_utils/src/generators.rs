//! Property-based test data strategies

use proptest::prelude::*;
use rust_decimal::Decimal;

/// A positive amount with at most 2 decimal places, up to ten million
pub fn amount_2dp() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000).prop_map(|minor| Decimal::new(minor, 2))
}

/// A set of 1..n positive 2-dp amounts
pub fn amounts_2dp(max_len: usize) -> impl Strategy<Value = Vec<Decimal>> {
    proptest::collection::vec(amount_2dp(), 1..max_len)
}
