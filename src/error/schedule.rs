use chrono::{NaiveDate, NaiveTime, Weekday};

use thiserror::Error;

/// Errors raised when constructing schedule value objects from invalid
/// input.
///
/// These errors belong to the **input-validation boundary**: the engine
/// itself never sees an invalid interval or closure, because construction
/// rejects them. Row loaders (`from_rows`) convert these into a skipped row
/// plus a warning instead of failing the whole schedule.
///
/// # Example
/// ```
/// use chrono::{NaiveTime, Weekday};
/// use store_hours::schedule::weekly::WeeklyInterval;
///
/// let open = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
/// let close = NaiveTime::from_hms_opt(2, 0, 0).unwrap();
///
/// // Overnight spans are not supported.
/// let err = WeeklyInterval::new(Weekday::Fri, open, close).unwrap_err();
/// assert!(err.to_string().contains("must open before it closes"));
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// An interval whose `open` is not strictly before `close` on the same
    /// day. This also covers overnight spans (e.g. 22:00–02:00), which the
    /// engine does not model.
    #[error("{weekday} interval must open before it closes within one day (got {open}..{close})")]
    InvalidInterval {
        weekday: Weekday,
        open: NaiveTime,
        close: NaiveTime,
    },

    /// A closure range whose `end` precedes its `start`.
    #[error("closure range must satisfy start <= end (got {start}..{end})")]
    InvalidClosure { start: NaiveDate, end: NaiveDate },
}
