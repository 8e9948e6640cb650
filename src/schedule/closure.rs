//! Closure calendar: explicit local-date ranges during which the store is
//! fully closed, overriding the weekly schedule.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use tracing::warn;

use crate::error::schedule::ScheduleError;
use crate::store::record::ClosureRow;

/// Date format used by closure rows (`"2025-12-24"`).
const CLOSURE_ROW_FORMAT: &str = "%Y-%m-%d";

/// One closure: an inclusive local-date range.
///
/// Both bounds are interpreted in the store's local calendar. Invariant:
/// `start <= end`, enforced at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closure {
    start: NaiveDate,
    end: NaiveDate,
}

impl Closure {
    /// Creates a closure range, rejecting `end < start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ScheduleError> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(ScheduleError::InvalidClosure { start, end })
        }
    }

    /// First closed day (inclusive).
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last closed day (inclusive).
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns `true` if `date` falls inside the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// An unordered set of [`Closure`] ranges.
///
/// Membership is "does local date D fall in any closure range"; ranges may
/// overlap freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureCalendar {
    closures: Vec<Closure>,
}

impl ClosureCalendar {
    /// Builds a calendar from already-validated closures.
    pub fn from_closures(closures: Vec<Closure>) -> Self {
        Self { closures }
    }

    /// Builds a calendar from persistence rows.
    ///
    /// This is the input-validation boundary for closure rows: rows with
    /// unparseable dates or a range where `end < start` are skipped with a
    /// warning, so one bad row never closes or opens the store by accident.
    pub fn from_rows(rows: &[ClosureRow]) -> Self {
        let mut closures = Vec::with_capacity(rows.len());
        for row in rows {
            match Self::parse_row(row) {
                Ok(closure) => closures.push(closure),
                Err(reason) => warn!(
                    start = %row.start_date,
                    end = %row.end_date,
                    %reason,
                    "skipping invalid closure row"
                ),
            }
        }
        Self::from_closures(closures)
    }

    /// Returns `true` if `date` falls inside any closure range.
    pub fn is_closed_on(&self, date: NaiveDate) -> bool {
        self.closures.iter().any(|c| c.contains(date))
    }

    /// Returns the latest `end` among closures containing `date`, or
    /// `None` if the date is not closed.
    ///
    /// When overlapping closures cover the same day this makes the resume
    /// point of the next-opening search deterministic: scanning continues
    /// the day after the furthest covering end.
    pub fn covering_closure_end(&self, date: NaiveDate) -> Option<NaiveDate> {
        self.closures
            .iter()
            .filter(|c| c.contains(date))
            .map(Closure::end)
            .max()
    }

    /// Returns `true` if the calendar holds no closures.
    pub fn is_empty(&self) -> bool {
        self.closures.is_empty()
    }

    fn parse_row(row: &ClosureRow) -> Result<Closure> {
        let start = NaiveDate::parse_from_str(row.start_date.trim(), CLOSURE_ROW_FORMAT)
            .map_err(|_| anyhow!("unparseable start date `{}`", row.start_date))?;
        let end = NaiveDate::parse_from_str(row.end_date.trim(), CLOSURE_ROW_FORMAT)
            .map_err(|_| anyhow!("unparseable end date `{}`", row.end_date))?;
        Ok(Closure::new(start, end)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn row(start: &str, end: &str) -> ClosureRow {
        ClosureRow {
            start_date: start.to_string(),
            end_date: end.to_string(),
        }
    }

    #[test]
    fn closure_bounds_are_inclusive() {
        let closure = Closure::new(d(2025, 12, 24), d(2025, 12, 26)).unwrap();

        assert!(closure.contains(d(2025, 12, 24)));
        assert!(closure.contains(d(2025, 12, 25)));
        assert!(closure.contains(d(2025, 12, 26)));
        assert!(!closure.contains(d(2025, 12, 23)));
        assert!(!closure.contains(d(2025, 12, 27)));
    }

    #[test]
    fn single_day_closure_is_valid() {
        let closure = Closure::new(d(2025, 5, 1), d(2025, 5, 1)).unwrap();
        assert!(closure.contains(d(2025, 5, 1)));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(
            Closure::new(d(2025, 12, 26), d(2025, 12, 24)),
            Err(ScheduleError::InvalidClosure { .. })
        ));
    }

    #[test]
    fn calendar_membership_checks_every_range() {
        let calendar = ClosureCalendar::from_closures(vec![
            Closure::new(d(2025, 12, 24), d(2025, 12, 26)).unwrap(),
            Closure::new(d(2026, 1, 1), d(2026, 1, 1)).unwrap(),
        ]);

        assert!(calendar.is_closed_on(d(2025, 12, 25)));
        assert!(calendar.is_closed_on(d(2026, 1, 1)));
        assert!(!calendar.is_closed_on(d(2025, 12, 27)));
    }

    #[test]
    fn covering_closure_end_picks_the_latest_overlapping_end() {
        let calendar = ClosureCalendar::from_closures(vec![
            Closure::new(d(2025, 8, 10), d(2025, 8, 12)).unwrap(),
            Closure::new(d(2025, 8, 11), d(2025, 8, 15)).unwrap(),
        ]);

        assert_eq!(
            calendar.covering_closure_end(d(2025, 8, 11)),
            Some(d(2025, 8, 15))
        );
        assert_eq!(
            calendar.covering_closure_end(d(2025, 8, 10)),
            Some(d(2025, 8, 12))
        );
        assert_eq!(calendar.covering_closure_end(d(2025, 8, 16)), None);
    }

    #[test]
    fn from_rows_skips_malformed_ranges_as_no_ops() {
        let calendar = ClosureCalendar::from_rows(&[
            row("2025-12-24", "2025-12-26"),
            row("2025-12-26", "2025-12-24"),
            row("not-a-date", "2025-12-31"),
        ]);

        assert!(calendar.is_closed_on(d(2025, 12, 25)));
        // The reversed range acted as a no-op, not as "closed forever".
        assert!(!calendar.is_closed_on(d(2025, 12, 27)));
    }

    #[test]
    fn empty_calendar_closes_nothing() {
        let calendar = ClosureCalendar::from_rows(&[]);
        assert!(calendar.is_empty());
        assert!(!calendar.is_closed_on(d(2025, 1, 1)));
    }
}
