//! Entry number formatting
//!
//! Entry numbers look like `JE-202603-0007`: the year and month come from
//! the entry's business date, the sequence from the persistence layer.
//! This module only formats; reserving unique, monotonic sequence numbers
//! is the caller's responsibility.

use chrono::{Datelike, NaiveDate};

/// Formats a journal entry number as `JE-YYYYMM-XXXX`
///
/// The sequence is zero-padded to 4 digits and widens beyond 9999 without
/// truncation.
pub fn entry_number(entry_date: NaiveDate, sequence: u32) -> String {
    format!(
        "JE-{:04}{:02}-{:04}",
        entry_date.year(),
        entry_date.month(),
        sequence
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_uses_entry_date_not_today() {
        assert_eq!(entry_number(date(2026, 3, 15), 7), "JE-202603-0007");
    }

    #[test]
    fn test_month_is_zero_padded() {
        assert_eq!(entry_number(date(2025, 12, 31), 42), "JE-202512-0042");
        assert_eq!(entry_number(date(2025, 1, 1), 1), "JE-202501-0001");
    }

    #[test]
    fn test_sequence_widens_past_9999() {
        assert_eq!(entry_number(date(2026, 6, 1), 10001), "JE-202606-10001");
    }
}
