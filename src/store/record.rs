//! Raw store data as delivered by the persistence collaborator.
//!
//! These are **transport-shaped** value objects: every field is still a
//! string, exactly as it exists in the hours/closures tables. Parsing and
//! validation happen when a [`crate::store::context::StoreContext`] is
//! built from a record; the engine itself never touches raw rows.

/// One weekly-hours row.
///
/// A store may have several rows per weekday (split shifts).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourRow {
    /// Weekday name as stored (e.g. `"monday"`, `"Tue"`); matched
    /// case-insensitively.
    pub day_of_week: String,

    /// Local opening time, `"HH:MM"`.
    pub open_time: String,

    /// Local closing time, `"HH:MM"`. Must be later than `open_time` on
    /// the same day; overnight rows are skipped at the parsing boundary.
    pub close_time: String,

    /// Presentation ordering of the row in merchant tooling. Availability
    /// computations ignore it and order by opening time instead.
    pub display_order: i32,
}

/// One closure row: an inclusive local-date range with no service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureRow {
    /// First closed day, `"YYYY-MM-DD"`, inclusive.
    pub start_date: String,

    /// Last closed day, `"YYYY-MM-DD"`, inclusive.
    pub end_date: String,
}

/// Everything the availability subsystem consumes about one store.
///
/// Loaded once per request through the [`crate::store::repository`] port
/// and immediately converted into an immutable
/// [`crate::store::context::StoreContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreRecord {
    /// IANA timezone id (e.g. `"Europe/Berlin"`). Missing or invalid
    /// values degrade to UTC.
    pub timezone: Option<String>,

    /// Weekly hours rows, as stored.
    pub hours: Vec<HourRow>,

    /// Closure rows, as stored.
    pub closures: Vec<ClosureRow>,
}
