//! # Environment Variable Utilities
//!
//! Provides helpers for reading environment variables with common type conversions.
//! Includes parsing for numeric values and strings with fallback defaults.
//!
//! These functions are typically used in configuration loading
//! (e.g. `AvailabilityConfig`).
//!
//! # Examples
//! ```rust,no_run
//! use store_hours::config::env::{read_string, read_u32};
//!
//! let lead_time = read_u32("PICKUP_MIN_ADVANCE_MINUTES", 30);
//! let language = read_string("PICKUP_DEFAULT_LANGUAGE", "en");
//! ```

/// Reads an unsigned integer (`u32`) from an environment variable,
/// returning the provided default if the variable is missing or unparsable.
///
/// # Example
/// ```rust,no_run
/// use store_hours::config::env::read_u32;
///
/// let days = read_u32("PICKUP_DAYS_AHEAD", 6);
/// ```
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u32` using a custom provider function.
///
/// Useful for testing or mocking environment sources.
///
/// # Example
/// ```rust
/// use store_hours::config::env::read_u32_from;
///
/// let val = read_u32_from(|_| Some("15".into()), "LIMIT", 100);
/// assert_eq!(val, 15);
/// ```
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a string from an environment variable, returning the provided
/// default when the variable is missing or blank.
///
/// Surrounding whitespace and matching quotes are stripped.
///
/// # Example
/// ```rust,no_run
/// use store_hours::config::env::read_string;
///
/// let language = read_string("PICKUP_DEFAULT_LANGUAGE", "en");
/// ```
pub fn read_string(name: &str, default: &str) -> String {
    read_string_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a string using a custom provider function.
///
/// # Example
/// ```rust
/// use store_hours::config::env::read_string_from;
///
/// let val = read_string_from(|_| Some("\"de\"".into()), "LANG", "en");
/// assert_eq!(val, "de");
/// ```
pub fn read_string_from<F>(provider: F, name: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            if s.is_empty() {
                default.to_string()
            } else {
                s.to_string()
            }
        }
        None => default.to_string(),
    }
}
