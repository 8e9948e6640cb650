//! # Availability Configuration Loader
//!
//! Settings for pickup slot generation: minimum lead time, lookahead window
//! and the default label language.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is typically initialized once at application startup
//! and shared throughout the system.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `PICKUP_MIN_ADVANCE_MINUTES` | Minimum lead time before the first offered slot | `30` |
//! | `PICKUP_DAYS_AHEAD` | Days beyond the start day to offer slots for | `6` |
//! | `PICKUP_DEFAULT_LANGUAGE` | Label language when a request sends none | `"en"` |
//!
//! # Example
//! ```rust,no_run
//! use store_hours::config::availability::AvailabilityConfig;
//!
//! let cfg = AvailabilityConfig::from_env();
//! println!("offering {} days of slots", cfg.days_ahead + 1);
//! ```

use std::env;

use crate::availability::label::Locale;
use crate::config::env::{read_string, read_u32};

/// Pickup slot generation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvailabilityConfig {
    /// Minimum lead time in minutes before the earliest offered slot.
    pub min_advance_minutes: u32,
    /// How many days beyond the start day are scanned for slots.
    pub days_ahead: u32,
    /// Language code used for labels when the request does not send one.
    pub default_language: String,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        AvailabilityConfig {
            min_advance_minutes: 30,
            days_ahead: 6,
            default_language: "en".into(),
        }
    }
}

impl AvailabilityConfig {
    /// Loads the configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    ///
    /// # Example
    /// ```rust,no_run
    /// use store_hours::config::availability::AvailabilityConfig;
    ///
    /// let cfg = AvailabilityConfig::from_env();
    /// assert!(!cfg.default_language.is_empty());
    /// ```
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        AvailabilityConfig {
            min_advance_minutes: read_u32("PICKUP_MIN_ADVANCE_MINUTES", 30),
            days_ahead: read_u32("PICKUP_DAYS_AHEAD", 6),
            default_language: read_string("PICKUP_DEFAULT_LANGUAGE", "en"),
        }
    }

    /// The [`Locale`] matching `default_language`.
    ///
    /// Unknown codes resolve to English, like any other language code.
    pub fn default_locale(&self) -> Locale {
        Locale::from_language_code(&self.default_language)
    }
}
