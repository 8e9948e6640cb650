//! Conversion between wall-clock readings and instants, based on `chrono`
//! and `chrono-tz`.
//!
//! This module is the single place where timezone arithmetic happens. It
//! converts absolute instants (`DateTime<Utc>`) into a store's local
//! wall-clock reading and back, using the IANA timezone database rather
//! than manual offset arithmetic, so DST transitions are handled correctly.
//!
//! # Provided Functions
//! - [`parse_tz`]: Strict IANA timezone lookup.
//! - [`resolve_tz`]: Lookup with the documented UTC fallback.
//! - [`local_datetime_of`] / [`local_date_of`] / [`local_time_of`] /
//!   [`weekday_of`]: Wall-clock readings of an instant.
//! - [`to_instant`]: The inverse conversion, with an explicit policy for
//!   DST edge cases.
//!
//! # DST Policy
//! - **Ambiguous** local times (the repeated hour when clocks fall back)
//!   resolve to the **earlier** of the two candidate instants.
//! - **Nonexistent** local times (the skipped hour when clocks spring
//!   forward) shift **forward** in 15-minute probes to the first
//!   wall-clock time the zone can represent.
//!
//! # Timezone Format
//! - Timezone names must follow the **IANA format**, e.g. `"Europe/Berlin"`
//!   or `"Asia/Tokyo"`. [`parse_tz`] reports invalid names as errors;
//!   [`resolve_tz`] degrades them to UTC.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::warn;

/// Probe step used to walk out of a spring-forward gap. Pickup slots sit on
/// the same 15-minute grid, so the first probed hit is also the first slot
/// boundary inside the gap's replacement hour.
const GAP_PROBE_STEP_MINUTES: i64 = 15;

/// Upper bound on gap probing: 26 hours covers every historical transition,
/// including full-day calendar skips such as Pacific/Kiritimati in 1994.
const GAP_PROBE_STEPS: i64 = 26 * 60 / GAP_PROBE_STEP_MINUTES;

/// Parses an IANA timezone name.
///
/// ## Returns
/// - `Ok(Tz)` — The parsed timezone.
/// - `Err` — If the name is not in the IANA database.
///
/// ## Example
/// ```
/// use store_hours::time::zone::parse_tz;
/// assert!(parse_tz("Europe/Berlin").is_ok());
/// assert!(parse_tz("Mars/Olympus").is_err());
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    Tz::from_str(name.trim()).map_err(|_| anyhow!("Invalid timezone name: {}", name))
}

/// Resolves an IANA timezone name, falling back to UTC.
///
/// An unknown or unparseable name is a **degraded input**, not an error:
/// the store keeps working on UTC wall-clock semantics and the bad value is
/// logged for the operator.
///
/// ## Example
/// ```
/// use chrono_tz::Tz;
/// use store_hours::time::zone::resolve_tz;
///
/// assert_eq!(resolve_tz("Asia/Tokyo"), Tz::Asia__Tokyo);
/// assert_eq!(resolve_tz("not-a-zone"), Tz::UTC);
/// ```
pub fn resolve_tz(name: &str) -> Tz {
    match parse_tz(name) {
        Ok(tz) => tz,
        Err(_) => {
            warn!(timezone = name, "unknown timezone, falling back to UTC");
            Tz::UTC
        }
    }
}

/// Returns the wall-clock reading of `instant` in `tz`.
///
/// The returned [`NaiveDateTime`] bundles the local year/month/day and
/// hour/minute/second components; it is only meaningful relative to `tz`.
pub fn local_datetime_of(instant: DateTime<Utc>, tz: Tz) -> NaiveDateTime {
    instant.with_timezone(&tz).naive_local()
}

/// Returns the local calendar date of `instant` in `tz`.
pub fn local_date_of(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Returns the local time-of-day of `instant` in `tz`.
pub fn local_time_of(instant: DateTime<Utc>, tz: Tz) -> NaiveTime {
    instant.with_timezone(&tz).time()
}

/// Returns the local weekday of `instant` in `tz`.
///
/// The weekday is taken from the **local** calendar, so an instant that is
/// Sunday evening in UTC can already be Monday in Tokyo.
pub fn weekday_of(instant: DateTime<Utc>, tz: Tz) -> Weekday {
    use chrono::Datelike;
    instant.with_timezone(&tz).weekday()
}

/// Converts a local wall-clock reading in `tz` back into an absolute
/// instant.
///
/// For the one hour a year where the mapping is not unique, the module's
/// DST policy applies:
/// - ambiguous readings resolve to the **earlier** candidate instant;
/// - nonexistent readings are probed **forward** in 15-minute steps until
///   the zone can represent them.
///
/// The function is total: if probing ever exhausts its bound (which no
/// real zone transition reaches), the reading is interpreted as UTC so the
/// caller still gets an instant.
///
/// ## Example
/// ```
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use chrono_tz::Tz;
/// use store_hours::time::zone::to_instant;
///
/// let local = NaiveDate::from_ymd_opt(2025, 2, 1)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
///
/// let instant = to_instant(local, Tz::Asia__Tokyo);
/// assert_eq!(instant, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
/// ```
pub fn to_instant(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    if let Some(dt) = tz.from_local_datetime(&local).earliest() {
        return dt.with_timezone(&Utc);
    }

    // `local` fell into a spring-forward gap: walk forward to the first
    // wall-clock time the zone can represent.
    let mut probe = local;
    for _ in 0..GAP_PROBE_STEPS {
        probe = match probe.checked_add_signed(Duration::minutes(GAP_PROBE_STEP_MINUTES)) {
            Some(next) => next,
            None => break,
        };
        if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
            return dt.with_timezone(&Utc);
        }
    }

    warn!(%local, timezone = %tz, "local time unrepresentable in zone, interpreting as UTC");
    local.and_utc()
}
