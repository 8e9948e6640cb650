use chrono::{DateTime, Utc};

use crate::time::clock::Clock;

/// A [`Clock`] implementation backed by the system clock.
///
/// # Overview
/// `SystemClock` yields the current absolute instant from the operating
/// system. It carries no timezone: wall-clock interpretation happens later,
/// against the store's own timezone (see [`crate::time::zone`]).
///
/// # Responsibility
/// - Constructing the clock is the responsibility of the **composition
///   root** (e.g. `main.rs`).
/// - Application and domain logic should treat `Clock` as a trusted source
///   and never call `Utc::now()` directly.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Creates a new [`SystemClock`].
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn system_clock_returns_a_plausible_instant() {
        let clock = SystemClock::new();

        let now = clock.now();

        // Basic sanity check: the year must be reasonable.
        assert!(now.year() >= 2024);
    }

    #[test]
    fn system_clock_is_usable_as_trait_object() {
        let clock: Box<dyn Clock> = Box::new(SystemClock::new());

        let first = clock.now();
        let second = clock.now();

        assert!(second >= first);
    }
}
