use chrono::{DateTime, Utc};

/// A port that provides the **current instant** for the application.
///
/// # Purpose
/// This trait abstracts access to "now" so that:
///
/// - Availability computations do **not** depend on system time
/// - Implementations can be swapped (system clock, fixed clock, mock, etc.)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - The clock yields an absolute instant (`DateTime<Utc>`); converting it
///   into a store's local wall-clock reading is the job of [`crate::time::zone`],
///   because the timezone is a per-store property, not a clock property.
/// - Pure functions such as `compute_status` take `now` as a plain
///   parameter; this trait exists for the composition root, which reads the
///   clock once per request and threads the instant through.
///
/// # Typical Implementations
/// - `SystemClock`: Uses the OS / runtime clock
/// - `FixedClock`: Returns a constant instant (for testing)
pub trait Clock: Send + Sync {
    /// Returns the current instant as a [`DateTime<Utc>`].
    ///
    /// Implementations decide how "now" is determined
    /// (e.g. system time, fixed value, mocked time source).
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Test implementation of `Clock` that always returns a fixed instant.
    struct FixedClock {
        instant: DateTime<Utc>,
    }

    impl FixedClock {
        fn new(instant: DateTime<Utc>) -> Self {
            Self { instant }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.instant
        }
    }

    #[test]
    fn fixed_clock_returns_given_instant() {
        let instant = Utc.with_ymd_and_hms(2025, 10, 2, 9, 30, 0).unwrap();
        let clock = FixedClock::new(instant);

        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn clock_trait_object_works() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(instant));

        assert_eq!(clock.now(), instant);
    }
}
