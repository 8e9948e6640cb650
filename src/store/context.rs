//! The immutable input bundle for one availability computation.

use chrono_tz::Tz;

use crate::schedule::closure::ClosureCalendar;
use crate::schedule::weekly::WeeklySchedule;
use crate::store::record::StoreRecord;
use crate::time::zone::resolve_tz;

/// Everything a single availability computation needs to know about a
/// store: its timezone, weekly hours and closure calendar.
///
/// A context is a **per-request snapshot**. It carries no identity, is
/// never mutated, and is owned by the caller — typically built once from a
/// freshly loaded [`StoreRecord`] and threaded through `compute_status` /
/// `generate_slots` by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreContext {
    /// The store's IANA timezone, already resolved.
    pub timezone: Tz,

    /// Recurring weekly opening hours.
    pub schedule: WeeklySchedule,

    /// Closures overriding the weekly hours.
    pub closures: ClosureCalendar,
}

impl StoreContext {
    /// Bundles already-built parts into a context.
    pub fn new(timezone: Tz, schedule: WeeklySchedule, closures: ClosureCalendar) -> Self {
        Self {
            timezone,
            schedule,
            closures,
        }
    }

    /// Builds a context from a raw persistence record.
    ///
    /// ## Behavior
    /// - A missing timezone defaults to UTC; an invalid one degrades to
    ///   UTC with a warning (see [`resolve_tz`]).
    /// - Invalid hour and closure rows are skipped with warnings; the
    ///   remaining rows still form a working schedule.
    pub fn from_record(record: &StoreRecord) -> Self {
        let timezone = record
            .timezone
            .as_deref()
            .map(resolve_tz)
            .unwrap_or(Tz::UTC);

        Self {
            timezone,
            schedule: WeeklySchedule::from_rows(&record.hours),
            closures: ClosureCalendar::from_rows(&record.closures),
        }
    }
}
