//! Display formatting for report output
//!
//! Reports render amounts with thousands grouping and a fixed number of
//! decimal places, e.g. `AED 1,234,567.89`. No business logic lives here;
//! rounding follows the same half-up convention as the ledger arithmetic.

use rust_decimal::{Decimal, RoundingStrategy};

use core_kernel::Money;

/// Formats a plain amount to exactly 2 decimal places with grouping
pub fn format_amount(value: Decimal) -> String {
    grouped(value, 2)
}

/// Formats a monetary amount with its currency code, e.g. `AED 1,250.00`
pub fn format_money(money: &Money) -> String {
    let dp = money.currency().decimal_places();
    format!("{} {}", money.currency().code(), grouped(money.amount(), dp))
}

fn grouped(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{:.prec$}", rounded, prec = dp as usize);

    let (number, fraction) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), Some(frac_part.to_string())),
        None => (plain, None),
    };

    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number.as_str()),
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    match fraction {
        Some(frac) => format!("{sign}{out}.{frac}"),
        None => format!("{sign}{out}"),
    }
}
