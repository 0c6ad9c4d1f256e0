//! Accounting periods
//!
//! A period is an inclusive date range with a lifecycle status. This
//! module only locates the period an entry date falls in; whether posting
//! into a closed or locked period is allowed is the caller's decision.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::{DateRange, OrganizationId, PeriodId, TemporalError};

/// Lifecycle status of an accounting period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    /// Accepting new entries
    Open,
    /// Closed by period-end procedures; reopening is possible
    Closed,
    /// Locked after filing; no changes permitted
    Locked,
}

/// A bounded accounting period
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountingPeriod {
    /// Unique identifier
    pub id: PeriodId,
    /// Owning organization
    pub organization_id: OrganizationId,
    /// Display name (e.g., "March 2026")
    pub name: String,
    /// Inclusive date range
    pub range: DateRange,
    /// Lifecycle status
    pub status: PeriodStatus,
}

impl AccountingPeriod {
    /// Creates an open period, rejecting inverted date ranges
    pub fn new(
        organization_id: OrganizationId,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, TemporalError> {
        Ok(Self {
            id: PeriodId::new(),
            organization_id,
            name: name.into(),
            range: DateRange::new(start, end)?,
            status: PeriodStatus::Open,
        })
    }

    /// Returns true if the date falls within this period, endpoints included
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range.contains(date)
    }

    /// Returns true if the period accepts new entries
    pub fn is_open(&self) -> bool {
        self.status == PeriodStatus::Open
    }
}

/// Finds the period containing the given date
///
/// Scans in input order and returns the first match. Periods should never
/// overlap; if they do, first-match-wins and the anomaly is logged at WARN
/// so the data problem surfaces without failing the caller.
pub fn find_period(date: NaiveDate, periods: &[AccountingPeriod]) -> Option<&AccountingPeriod> {
    let mut matched: Option<&AccountingPeriod> = None;

    for period in periods {
        if !period.contains(date) {
            continue;
        }
        match matched {
            None => matched = Some(period),
            Some(first) => {
                tracing::warn!(
                    date = %date,
                    first = %first.id,
                    also = %period.id,
                    "overlapping accounting periods, keeping first match"
                );
            }
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(org: OrganizationId, name: &str, y: i32, m: u32, last: u32) -> AccountingPeriod {
        AccountingPeriod::new(org, name, date(y, m, 1), date(y, m, last)).unwrap()
    }

    #[test]
    fn test_find_period_picks_enclosing_month() {
        let org = OrganizationId::new();
        let periods = vec![
            month(org, "January 2026", 2026, 1, 31),
            month(org, "February 2026", 2026, 2, 28),
        ];

        let hit = find_period(date(2026, 2, 15), &periods).unwrap();
        assert_eq!(hit.id, periods[1].id);
    }

    #[test]
    fn test_find_period_misses_outside_all_ranges() {
        let org = OrganizationId::new();
        let periods = vec![
            month(org, "January 2026", 2026, 1, 31),
            month(org, "February 2026", 2026, 2, 28),
        ];

        assert!(find_period(date(2026, 3, 1), &periods).is_none());
    }

    #[test]
    fn test_overlap_first_match_wins() {
        let org = OrganizationId::new();
        let periods = vec![
            AccountingPeriod::new(org, "Q1", date(2026, 1, 1), date(2026, 3, 31)).unwrap(),
            month(org, "February 2026", 2026, 2, 28),
        ];

        let hit = find_period(date(2026, 2, 10), &periods).unwrap();
        assert_eq!(hit.id, periods[0].id);
    }

    #[test]
    fn test_empty_period_list() {
        assert!(find_period(date(2026, 1, 1), &[]).is_none());
    }
}
