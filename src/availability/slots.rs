//! # Pickup Slot Generation
//!
//! Produces the bounded list of future pickup times offered to customers.
//!
//! This module provides:
//! - [`PickupSlot`] — one offered pickup time with its display label.
//! - [`SlotOptions`] — lead time, lookahead window, start date and locale.
//! - [`generate_slots`] — the generator itself.
//!
//! # Design Notes
//! - Candidate times step through each day's opening intervals on a fixed
//!   [`SLOT_STEP_MINUTES`] grid anchored at the interval's opening time; the
//!   last candidate lies strictly before the closing time.
//! - Days covered by a closure yield no slots at all.
//! - Candidates earlier than `now + min_advance_minutes` are dropped, and the
//!   remaining ones must pass [`StoreStatus::accepts_pickup_at`] so the offered
//!   list always agrees with the order acceptance check.
//! - The result is chronological and free of exact-instant duplicates. Such
//!   duplicates occur when a DST gap collapses several wall-clock candidates
//!   onto the same instant, or when overlapping intervals share grid points.
//! - The generator is a pure function of its arguments; re-invoke it with a
//!   fresh `now` to refresh the list.
//!
//! [`StoreStatus::accepts_pickup_at`]: crate::availability::engine::StoreStatus::accepts_pickup_at
//!
//! # Example
//! ```
//! use chrono::{NaiveTime, TimeZone, Utc, Weekday};
//! use chrono_tz::Tz;
//! use store_hours::availability::slots::{generate_slots, SlotOptions};
//! use store_hours::schedule::closure::ClosureCalendar;
//! use store_hours::schedule::weekly::{WeeklyInterval, WeeklySchedule};
//! use store_hours::store::context::StoreContext;
//!
//! let open = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
//! let close = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
//! let schedule =
//!     WeeklySchedule::from_intervals(vec![WeeklyInterval::new(Weekday::Mon, open, close).unwrap()]);
//! let ctx = StoreContext::new(Tz::UTC, schedule, ClosureCalendar::from_closures(vec![]));
//!
//! // 2025-03-10 is a Monday; the store has just opened.
//! let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
//! let slots = generate_slots(now, &ctx, &SlotOptions::new(0, 0));
//!
//! let times: Vec<String> = slots.iter().map(|s| s.instant.to_string()).collect();
//! assert_eq!(times, ["2025-03-10 09:00:00 UTC", "2025-03-10 09:15:00 UTC"]);
//! assert!(slots[0].label.starts_with("Today, "));
//! ```

use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, Utc};

use crate::availability::engine::compute_status;
use crate::availability::label::{slot_label, Locale};
use crate::store::context::StoreContext;
use crate::time::zone::{local_date_of, to_instant};

/// Spacing between candidate pickup times, in minutes.
pub const SLOT_STEP_MINUTES: i64 = 15;

/// One pickup time offered to the customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickupSlot {
    /// The absolute pickup instant.
    pub instant: DateTime<Utc>,
    /// Human-readable label in the requested locale, e.g. `"Today, 03/10/2025 09:15"`.
    pub label: String,
}

/// Options for generating pickup slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOptions {
    /// Minimum lead time: no slot earlier than `now` plus this many minutes.
    pub min_advance_minutes: u32,
    /// How many local calendar days to scan beyond the start day.
    pub days_ahead: u32,
    /// First local day to scan. Days before the store's current date are
    /// clamped to it; `None` starts at the current date.
    pub start_date: Option<NaiveDate>,
    /// Language for slot labels.
    pub locale: Locale,
}

impl SlotOptions {
    /// Creates options starting at the store's current date with English labels.
    pub fn new(min_advance_minutes: u32, days_ahead: u32) -> Self {
        Self {
            min_advance_minutes,
            days_ahead,
            start_date: None,
            locale: Locale::default(),
        }
    }
}

/// # generate_slots
///
/// Builds the ordered pickup slots for one store.
///
/// ## Arguments
/// - `now`: The current instant; injected so results are reproducible.
/// - `ctx`: The store's timezone, weekly schedule and closure calendar.
/// - `opts`: Lead time, window size, optional start date and label locale.
///
/// ## Returns
/// Chronologically ordered slots, each at least `min_advance_minutes` in the
/// future, inside an opening interval on its day, outside every closure, and
/// accepted by the store's current [`StoreStatus`]. The list may be empty.
///
/// [`StoreStatus`]: crate::availability::engine::StoreStatus
pub fn generate_slots(now: DateTime<Utc>, ctx: &StoreContext, opts: &SlotOptions) -> Vec<PickupSlot> {
    let tz = ctx.timezone;
    let today = local_date_of(now, tz);
    let min_instant = now + Duration::minutes(i64::from(opts.min_advance_minutes));
    let status = compute_status(now, ctx);

    let start = match opts.start_date {
        Some(requested) if requested > today => requested,
        _ => today,
    };

    let mut instants = Vec::new();
    for offset in 0..=u64::from(opts.days_ahead) {
        let Some(day) = start.checked_add_days(Days::new(offset)) else {
            break;
        };
        if ctx.closures.is_closed_on(day) {
            continue;
        }
        for interval in ctx.schedule.intervals_on(day.weekday()) {
            let span_minutes = (interval.close() - interval.open()).num_minutes();
            let mut step = 0;
            while step * SLOT_STEP_MINUTES < span_minutes {
                let slot_time = interval.open() + Duration::minutes(step * SLOT_STEP_MINUTES);
                let instant = to_instant(day.and_time(slot_time), tz);
                if instant >= min_instant && status.accepts_pickup_at(instant) {
                    instants.push(instant);
                }
                step += 1;
            }
        }
    }

    // Gap-collapsed and overlapping-interval candidates land on the same
    // instant; keep one of each.
    instants.sort_unstable();
    instants.dedup();

    instants
        .into_iter()
        .map(|instant| {
            let label = slot_label(instant.with_timezone(&tz), today, opts.locale);
            PickupSlot { instant, label }
        })
        .collect()
}
