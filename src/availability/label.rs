//! # Slot Label Formatting
//!
//! Builds the human-readable labels attached to pickup slots.
//!
//! This module provides:
//! - [`Locale`] — the set of languages slot labels can be rendered in.
//! - [`RelativeDayWords`] — the per-locale words for "today" and "tomorrow".
//! - [`slot_label`] — formats one slot time as `"<day>, <date> <HH:MM>"`.
//!
//! A slot on the current local date is labeled with the locale's word for
//! "today", one on the following date with "tomorrow", and anything further
//! out with the localized weekday name. The date portion uses the locale's
//! preferred calendar format and the time portion is always 24-hour.
//!
//! # Example
//! ```
//! use chrono::{NaiveDate, TimeZone};
//! use chrono_tz::Tz;
//! use store_hours::availability::label::{slot_label, Locale};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let local = Tz::UTC.with_ymd_and_hms(2025, 3, 10, 14, 30, 0).unwrap();
//!
//! let label = slot_label(local, today, Locale::En);
//! assert!(label.starts_with("Today, "));
//! assert!(label.ends_with(" 14:30"));
//! ```

use chrono::{DateTime, Days, NaiveDate};
use chrono_tz::Tz;

/// Languages supported for slot labels.
///
/// Parsed leniently from BCP-47-style language codes; anything that is not
/// recognizably German falls back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (`en`, `en-US`, ...). The default.
    #[default]
    En,
    /// German (`de`, `de-DE`, `de_AT`, ...).
    De,
}

/// The relative-day vocabulary of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeDayWords {
    /// Word used for the current local date.
    pub today: &'static str,
    /// Word used for the date after the current one.
    pub tomorrow: &'static str,
}

impl Locale {
    /// Resolves a language code such as `"en"`, `"de-DE"` or `"de_AT"`.
    ///
    /// Matching only inspects the primary language subtag, so region and
    /// script suffixes are accepted. Unknown codes resolve to [`Locale::En`].
    ///
    /// # Example
    /// ```
    /// use store_hours::availability::label::Locale;
    ///
    /// assert_eq!(Locale::from_language_code("de-AT"), Locale::De);
    /// assert_eq!(Locale::from_language_code("fr"), Locale::En);
    /// ```
    pub fn from_language_code(code: &str) -> Self {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "de" => Locale::De,
            _ => Locale::En,
        }
    }

    /// Returns the locale's words for "today" and "tomorrow".
    pub fn relative_day_words(self) -> RelativeDayWords {
        match self {
            Locale::En => RelativeDayWords {
                today: "Today",
                tomorrow: "Tomorrow",
            },
            Locale::De => RelativeDayWords {
                today: "Heute",
                tomorrow: "Morgen",
            },
        }
    }

    /// The matching `chrono` locale for date and weekday formatting.
    fn chrono_locale(self) -> chrono::Locale {
        match self {
            Locale::En => chrono::Locale::en_US,
            Locale::De => chrono::Locale::de_DE,
        }
    }
}

/// # slot_label
///
/// Formats one slot's local time as `"<day>, <date> <HH:MM>"`.
///
/// ## Arguments
/// - `local`: The slot instant already converted into the store's timezone.
/// - `today`: The current date in that same timezone, used to decide between
///   "today", "tomorrow" and a plain weekday name.
/// - `locale`: Language for the day word, weekday name and date format.
///
/// ## Returns
/// A label such as `"Today, 03/10/2025 09:15"` or `"Morgen, 11.03.2025 09:15"`.
pub fn slot_label(local: DateTime<Tz>, today: NaiveDate, locale: Locale) -> String {
    let words = locale.relative_day_words();
    let slot_date = local.date_naive();
    let tomorrow = today.checked_add_days(Days::new(1));

    let day_part = if slot_date == today {
        words.today.to_string()
    } else if Some(slot_date) == tomorrow {
        words.tomorrow.to_string()
    } else {
        local.format_localized("%A", locale.chrono_locale()).to_string()
    };

    format!(
        "{day_part}, {} {}",
        local.format_localized("%x", locale.chrono_locale()),
        local.format("%H:%M")
    )
}
