//! # store_hours
//!
//! Store availability engine for the ordering backend.
//!
//! Given a store's recurring weekly opening hours, its closure calendar and
//! its IANA timezone, this crate answers three questions:
//! - is the store open right now? (`availability::engine`)
//! - if it is closed, when does it next open? (`availability::engine`)
//! - which pickup time slots can still be ordered? (`availability::slots`)
//!
//! All computations are pure: "now" is always passed in explicitly (see
//! `time::clock`), the schedule and closures are immutable snapshots (see
//! `store::context`), and the only I/O seam is the `store::repository` port.
//!
//! ## Example usage (in another crate)
//!
//! ```rust
//! use store_hours::chrono::{TimeZone, Utc};
//! use store_hours::availability::engine::compute_status;
//! use store_hours::schedule::{closure::ClosureCalendar, weekly::WeeklySchedule};
//! use store_hours::store::context::StoreContext;
//!
//! let ctx = StoreContext::new(
//!     store_hours::chrono_tz::Tz::UTC,
//!     WeeklySchedule::from_intervals(vec![]),
//!     ClosureCalendar::from_closures(vec![]),
//! );
//! let now = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
//! let status = compute_status(now, &ctx);
//! assert!(!status.is_open);
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use async_trait;
pub use chrono;
pub use chrono_tz;
pub use dotenvy;
pub use serde;
pub use serde_json;
pub use thiserror;
pub use tokio;
pub use tracing;

// ===============================
// Public modules
// ===============================
pub mod api;
pub mod availability;
pub mod config;
pub mod error;
pub mod schedule;
pub mod store;
pub mod time;
