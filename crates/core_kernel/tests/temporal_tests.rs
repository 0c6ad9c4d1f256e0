//! Tests for date ranges and timezone handling

use chrono::{NaiveDate, TimeZone, Utc};
use core_kernel::{DateRange, TemporalError, Timezone};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_range_is_inclusive_on_both_ends() {
    let january = DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap();

    assert!(january.contains(date(2026, 1, 1)));
    assert!(january.contains(date(2026, 1, 15)));
    assert!(january.contains(date(2026, 1, 31)));
    assert!(!january.contains(date(2025, 12, 31)));
    assert!(!january.contains(date(2026, 2, 1)));
}

#[test]
fn test_inverted_range_is_rejected() {
    let result = DateRange::new(date(2026, 6, 1), date(2026, 5, 1));
    assert_eq!(
        result,
        Err(TemporalError::InvalidRange {
            start: date(2026, 6, 1),
            end: date(2026, 5, 1),
        })
    );
}

#[test]
fn test_adjacent_months_do_not_overlap() {
    let january = DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap();
    let february = DateRange::new(date(2026, 2, 1), date(2026, 2, 28)).unwrap();

    assert!(!january.overlaps(&february));
    assert!(!february.overlaps(&january));
}

#[test]
fn test_shared_day_counts_as_overlap() {
    let a = DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap();
    let b = DateRange::new(date(2026, 1, 31), date(2026, 2, 28)).unwrap();

    assert!(a.overlaps(&b));
}

#[test]
fn test_days_counts_endpoints() {
    let january = DateRange::new(date(2026, 1, 1), date(2026, 1, 31)).unwrap();
    assert_eq!(january.days(), 31);
}

#[test]
fn test_default_timezone_is_dubai() {
    let tz = Timezone::default();
    assert_eq!(tz.0.name(), "Asia/Dubai");
}

#[test]
fn test_late_utc_evening_rolls_to_next_ledger_day() {
    // 21:30 UTC on 31 March is 01:30 on 1 April in Asia/Dubai (UTC+4)
    let tz = Timezone::default();
    let instant = Utc.with_ymd_and_hms(2026, 3, 31, 21, 30, 0).unwrap();

    assert_eq!(tz.ledger_date(instant), date(2026, 4, 1));
}

#[test]
fn test_timezone_serde_roundtrip() {
    let tz = Timezone::default();
    let json = serde_json::to_string(&tz).unwrap();
    assert_eq!(json, "\"Asia/Dubai\"");

    let back: Timezone = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tz);
}
