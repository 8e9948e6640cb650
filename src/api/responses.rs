//! # Availability Response Schemas
//!
//! JSON shapes returned by the status and pickup slot endpoints.
//!
//! Instants are rendered as RFC 3339 strings in UTC (`2025-03-10T09:00:00Z`)
//! and an unknown next opening is an explicit `null`, never an omitted key,
//! so clients can distinguish "closed indefinitely" from a missing field.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::availability::engine::StoreStatus;
use crate::availability::slots::PickupSlot;

fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// JSON response schema of the store status endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreStatusResponse {
    /// Whether the store accepts orders right now.
    #[serde(rename = "isOpen")]
    pub is_open: bool,
    /// RFC 3339 instant of the next opening; `null` while open or when no
    /// opening lies within the search window.
    #[serde(rename = "nextOpenTime")]
    pub next_open_time: Option<String>,
}

impl From<StoreStatus> for StoreStatusResponse {
    fn from(status: StoreStatus) -> Self {
        Self {
            is_open: status.is_open,
            next_open_time: status.next_open_time.map(rfc3339),
        }
    }
}

/// One entry in [`PickupSlotsResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotResponse {
    /// RFC 3339 pickup instant.
    pub datetime: String,
    /// Localized display label.
    pub label: String,
}

impl From<PickupSlot> for SlotResponse {
    fn from(slot: PickupSlot) -> Self {
        Self {
            datetime: rfc3339(slot.instant),
            label: slot.label,
        }
    }
}

/// JSON response schema of the pickup slot endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickupSlotsResponse {
    /// Offered slots in chronological order; empty when nothing is available.
    pub slots: Vec<SlotResponse>,
}

impl From<Vec<PickupSlot>> for PickupSlotsResponse {
    fn from(slots: Vec<PickupSlot>) -> Self {
        Self {
            slots: slots.into_iter().map(SlotResponse::from).collect(),
        }
    }
}
