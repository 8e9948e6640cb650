//! Open/closed status and the next-opening search.
//!
//! # Algorithm
//! For a given instant `now` and store context:
//! 1. Read `now` as a local date in the store's timezone.
//! 2. A closure covering today forces "closed"; the next-opening search
//!    then resumes the day after the covering closure ends.
//! 3. Otherwise the store is open iff one of today's intervals contains
//!    the local time (open boundary inclusive, close boundary exclusive).
//! 4. If closed, scan forward day by day for up to [`MAX_LOOKAHEAD_DAYS`]
//!    from the scan start, skipping closure days, and return the first
//!    opening instant strictly after `now`.
//!
//! The search is bounded, so the whole computation does a small, fixed
//! amount of work; an exhausted window is reported as "no known next
//! opening" (`None`), never as an error.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};

use crate::store::context::StoreContext;
use crate::time::zone::{local_date_of, local_time_of, to_instant, weekday_of};

/// How many calendar days the next-opening search examines, counted from
/// its scan start (today, or the day a covering closure ends).
pub const MAX_LOOKAHEAD_DAYS: u64 = 14;

/// The result of a status computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStatus {
    /// Whether the store is open at the queried instant.
    pub is_open: bool,

    /// The next opening instant if the store is closed and one was found
    /// within the search window. `None` while open, and also when the
    /// window is exhausted ("unknown/none", not a failure).
    pub next_open_time: Option<DateTime<Utc>>,
}

impl StoreStatus {
    /// The order-acceptance predicate: can a pickup at `instant` still be
    /// ordered given this status?
    ///
    /// - open store → yes;
    /// - closed store with a known next opening → only **strictly after**
    ///   that opening;
    /// - closed store with no known next opening → yes (the caller's
    ///   window may extend past our bounded search).
    ///
    /// Slot generation filters through this method, and order placement is
    /// expected to call the same method rather than re-implementing the
    /// boundary comparison, so both sides always agree.
    pub fn accepts_pickup_at(&self, instant: DateTime<Utc>) -> bool {
        if self.is_open {
            return true;
        }
        match self.next_open_time {
            Some(next_open) => instant > next_open,
            None => true,
        }
    }
}

/// Computes whether the store is open at `now`, and if not, when it next
/// opens.
///
/// Pure and total: identical inputs yield identical outputs, and no
/// well-formed input can make it fail — degraded inputs have already been
/// absorbed while building the [`StoreContext`].
pub fn compute_status(now: DateTime<Utc>, ctx: &StoreContext) -> StoreStatus {
    let tz = ctx.timezone;
    let today = local_date_of(now, tz);

    // A closure covering today overrides the weekly hours entirely. The
    // search resumes after the covering closure ends; any further closures
    // inside the window are skipped day by day.
    if ctx.closures.is_closed_on(today) {
        let next_open_time = ctx
            .closures
            .covering_closure_end(today)
            .and_then(|end| end.checked_add_days(Days::new(1)))
            .and_then(|resume| next_open_from(now, today, resume, ctx));
        return StoreStatus {
            is_open: false,
            next_open_time,
        };
    }

    let local_time = local_time_of(now, tz);
    let open_now = ctx
        .schedule
        .intervals_on(weekday_of(now, tz))
        .iter()
        .any(|interval| interval.contains(local_time));

    if open_now {
        return StoreStatus {
            is_open: true,
            next_open_time: None,
        };
    }

    StoreStatus {
        is_open: false,
        next_open_time: next_open_from(now, today, today, ctx),
    }
}

/// Scans forward from `scan_start` for the earliest opening instant.
///
/// On the day that still is "today" an opening only counts if its instant
/// lies strictly after `now`; on later days the earliest interval wins
/// unconditionally. Closure days are skipped without consuming the window.
fn next_open_from(
    now: DateTime<Utc>,
    today: NaiveDate,
    scan_start: NaiveDate,
    ctx: &StoreContext,
) -> Option<DateTime<Utc>> {
    for offset in 0..MAX_LOOKAHEAD_DAYS {
        let day = scan_start.checked_add_days(Days::new(offset))?;
        if ctx.closures.is_closed_on(day) {
            continue;
        }
        for interval in ctx.schedule.intervals_on(day.weekday()) {
            let open_instant = to_instant(day.and_time(interval.open()), ctx.timezone);
            if day != today || open_instant > now {
                return Some(open_instant);
            }
        }
    }
    None
}
