//! # Slot Endpoint Parameters
//!
//! Query parameters accepted by the pickup slot endpoint, with typed
//! validation of the raw strings the transport layer hands over.
//!
//! The transport itself (routing, HTTP/RPC decoding) lives outside this
//! crate; it deserializes into [`SlotQueryParams`] and calls the service.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::availability::label::Locale;
use crate::error::request::RequestError;

/// Wire format of the `date` parameter.
const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";

/// Query parameters of the pickup slot endpoint.
///
/// ## Fields
/// - `date`: Optional first day to offer slots for (`YYYY-MM-DD`, store-local).
/// - `language_code`: Optional label language (`"en"`, `"de-DE"`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SlotQueryParams {
    /// Requested start date in the store's calendar.
    pub date: Option<String>,
    /// Language code for slot labels, 2–5 characters.
    #[serde(rename = "languageCode")]
    pub language_code: Option<String>,
}

impl SlotQueryParams {
    /// Parses the `date` parameter.
    ///
    /// ## Returns
    /// - `Ok(None)` — no date was requested.
    /// - `Ok(Some(date))` — a well-formed `YYYY-MM-DD` value.
    /// - `Err(RequestError::InvalidDate)` — anything else, including an
    ///   empty string.
    pub fn requested_date(&self) -> Result<Option<NaiveDate>, RequestError> {
        match &self.date {
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), DATE_PARAM_FORMAT)
                .map(Some)
                .map_err(|_| RequestError::InvalidDate { raw: raw.clone() }),
            None => Ok(None),
        }
    }

    /// Resolves the label locale, falling back to `default` when no
    /// language code was sent.
    ///
    /// Unrecognized codes resolve through [`Locale::from_language_code`];
    /// this never errors.
    pub fn locale_or(&self, default: Locale) -> Locale {
        match self.language_code.as_deref() {
            Some(code) if !code.trim().is_empty() => Locale::from_language_code(code),
            _ => default,
        }
    }
}
