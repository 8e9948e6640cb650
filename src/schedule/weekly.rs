//! Weekly opening hours: recurring local time intervals keyed by weekday.
//!
//! A day may have zero, one, or several intervals (split shifts). Intervals
//! never cross midnight; a row that tries to is rejected at construction.
//! Whether intervals on the same day may overlap is a caller policy — the
//! collection does not validate it.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{NaiveTime, Weekday};
use tracing::warn;

use crate::error::schedule::ScheduleError;
use crate::store::record::HourRow;

/// Time-of-day format used by hour rows (`"09:00"`, `"17:30"`).
const HOUR_ROW_FORMAT: &str = "%H:%M";

/// One recurring opening interval on one weekday.
///
/// Invariant: `open < close` within the same day. The constructor is the
/// only way to obtain a value, so every `WeeklyInterval` in the system
/// satisfies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyInterval {
    weekday: Weekday,
    open: NaiveTime,
    close: NaiveTime,
}

impl WeeklyInterval {
    /// Creates an interval, rejecting empty and overnight spans.
    ///
    /// ## Returns
    /// - `Ok(WeeklyInterval)` when `open < close`.
    /// - `Err(ScheduleError::InvalidInterval)` otherwise — this includes
    ///   overnight spans such as 22:00–02:00, which are not supported.
    pub fn new(weekday: Weekday, open: NaiveTime, close: NaiveTime) -> Result<Self, ScheduleError> {
        if open < close {
            Ok(Self {
                weekday,
                open,
                close,
            })
        } else {
            Err(ScheduleError::InvalidInterval {
                weekday,
                open,
                close,
            })
        }
    }

    /// The weekday this interval recurs on.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Local opening time (inclusive).
    pub fn open(&self) -> NaiveTime {
        self.open
    }

    /// Local closing time (exclusive): a store closing at 17:00 is already
    /// closed at exactly 17:00.
    pub fn close(&self) -> NaiveTime {
        self.close
    }

    /// Half-open containment test: `open <= t < close`.
    pub fn contains(&self, t: NaiveTime) -> bool {
        self.open <= t && t < self.close
    }
}

/// An immutable collection of recurring weekly intervals.
///
/// Intervals are bucketed by weekday (Sunday-first) and kept sorted by
/// opening time within each day, so "earliest interval of day X" is always
/// the first element of its bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklySchedule {
    by_day: [Vec<WeeklyInterval>; 7],
}

impl WeeklySchedule {
    /// Builds a schedule from already-validated intervals.
    ///
    /// Input ordering does not matter; intervals are bucketed by weekday
    /// and sorted by opening time.
    pub fn from_intervals(intervals: Vec<WeeklyInterval>) -> Self {
        let mut by_day: [Vec<WeeklyInterval>; 7] = Default::default();
        for interval in intervals {
            by_day[Self::bucket(interval.weekday)].push(interval);
        }
        for bucket in &mut by_day {
            bucket.sort_by_key(|iv| (iv.open, iv.close));
        }
        Self { by_day }
    }

    /// Builds a schedule from persistence rows.
    ///
    /// This is the input-validation boundary for hour rows: rows with an
    /// unrecognized weekday, an unparseable `"HH:MM"` time, or an
    /// empty/overnight span are **skipped with a warning** rather than
    /// failing the whole schedule. `display_order` is presentation ordering
    /// only; availability always works on open-time order.
    pub fn from_rows(rows: &[HourRow]) -> Self {
        let mut intervals = Vec::with_capacity(rows.len());
        for row in rows {
            match Self::parse_row(row) {
                Ok(interval) => intervals.push(interval),
                Err(reason) => warn!(
                    day = %row.day_of_week,
                    open = %row.open_time,
                    close = %row.close_time,
                    %reason,
                    "skipping invalid hour row"
                ),
            }
        }
        Self::from_intervals(intervals)
    }

    /// Returns the intervals recurring on `weekday`, sorted by opening
    /// time. The slice is empty for days without hours.
    pub fn intervals_on(&self, weekday: Weekday) -> &[WeeklyInterval] {
        &self.by_day[Self::bucket(weekday)]
    }

    /// Returns `true` if no day has any interval.
    pub fn is_empty(&self) -> bool {
        self.by_day.iter().all(|bucket| bucket.is_empty())
    }

    /// Total number of intervals across the week.
    pub fn len(&self) -> usize {
        self.by_day.iter().map(|bucket| bucket.len()).sum()
    }

    fn bucket(weekday: Weekday) -> usize {
        weekday.num_days_from_sunday() as usize
    }

    fn parse_row(row: &HourRow) -> Result<WeeklyInterval> {
        let weekday = Weekday::from_str(row.day_of_week.trim())
            .map_err(|_| anyhow!("unrecognized weekday `{}`", row.day_of_week))?;
        let open = NaiveTime::parse_from_str(row.open_time.trim(), HOUR_ROW_FORMAT)
            .map_err(|_| anyhow!("unparseable open time `{}`", row.open_time))?;
        let close = NaiveTime::parse_from_str(row.close_time.trim(), HOUR_ROW_FORMAT)
            .map_err(|_| anyhow!("unparseable close time `{}`", row.close_time))?;
        Ok(WeeklyInterval::new(weekday, open, close)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn row(day: &str, open: &str, close: &str) -> HourRow {
        HourRow {
            day_of_week: day.to_string(),
            open_time: open.to_string(),
            close_time: close.to_string(),
            display_order: 0,
        }
    }

    #[test]
    fn new_accepts_open_before_close() {
        let iv = WeeklyInterval::new(Weekday::Mon, t(9, 0), t(17, 0)).unwrap();
        assert_eq!(iv.weekday(), Weekday::Mon);
        assert_eq!(iv.open(), t(9, 0));
        assert_eq!(iv.close(), t(17, 0));
    }

    #[test]
    fn new_rejects_empty_and_overnight_spans() {
        assert!(matches!(
            WeeklyInterval::new(Weekday::Mon, t(9, 0), t(9, 0)),
            Err(ScheduleError::InvalidInterval { .. })
        ));
        // 22:00–02:00 would cross midnight; unsupported by design.
        assert!(matches!(
            WeeklyInterval::new(Weekday::Fri, t(22, 0), t(2, 0)),
            Err(ScheduleError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn contains_is_half_open() {
        let iv = WeeklyInterval::new(Weekday::Mon, t(9, 0), t(17, 0)).unwrap();

        assert!(iv.contains(t(9, 0)), "open boundary is inclusive");
        assert!(iv.contains(t(16, 59)));
        assert!(!iv.contains(t(17, 0)), "close boundary is exclusive");
        assert!(!iv.contains(t(8, 59)));
    }

    #[test]
    fn from_intervals_buckets_and_sorts_by_open_time() {
        let schedule = WeeklySchedule::from_intervals(vec![
            WeeklyInterval::new(Weekday::Tue, t(13, 0), t(18, 0)).unwrap(),
            WeeklyInterval::new(Weekday::Tue, t(8, 0), t(12, 0)).unwrap(),
            WeeklyInterval::new(Weekday::Mon, t(9, 0), t(17, 0)).unwrap(),
        ]);

        let tuesday = schedule.intervals_on(Weekday::Tue);
        assert_eq!(tuesday.len(), 2);
        assert_eq!(tuesday[0].open(), t(8, 0));
        assert_eq!(tuesday[1].open(), t(13, 0));

        assert_eq!(schedule.intervals_on(Weekday::Mon).len(), 1);
        assert!(schedule.intervals_on(Weekday::Wed).is_empty());
        assert_eq!(schedule.len(), 3);
        assert!(!schedule.is_empty());
    }

    #[test]
    fn from_rows_parses_common_day_spellings() {
        let schedule = WeeklySchedule::from_rows(&[
            row("monday", "09:00", "17:00"),
            row("Tue", "08:30", "12:00"),
            row("SUNDAY", "10:00", "14:00"),
        ]);

        assert_eq!(schedule.intervals_on(Weekday::Mon).len(), 1);
        assert_eq!(schedule.intervals_on(Weekday::Tue).len(), 1);
        assert_eq!(schedule.intervals_on(Weekday::Sun).len(), 1);
        assert_eq!(schedule.intervals_on(Weekday::Tue)[0].open(), t(8, 30));
    }

    #[test]
    fn from_rows_skips_invalid_rows_but_keeps_valid_siblings() {
        let schedule = WeeklySchedule::from_rows(&[
            row("monday", "09:00", "17:00"),
            row("noday", "09:00", "17:00"),
            row("tuesday", "9 o'clock", "17:00"),
            row("wednesday", "17:00", "09:00"),
        ]);

        assert_eq!(schedule.len(), 1);
        assert_eq!(schedule.intervals_on(Weekday::Mon).len(), 1);
        assert!(schedule.intervals_on(Weekday::Wed).is_empty());
    }

    #[test]
    fn empty_schedule_reports_empty() {
        let schedule = WeeklySchedule::from_rows(&[]);
        assert!(schedule.is_empty());
        assert_eq!(schedule.len(), 0);
    }
}
