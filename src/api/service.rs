//! # Availability Service
//!
//! Request-level orchestration for the status and pickup slot endpoints.
//!
//! # Overview
//!
//! This service is the seam between the transport layer (HTTP/RPC routing,
//! out of scope for this crate) and the pure availability computations.
//! It owns the only I/O of the subsystem (one repository lookup per call);
//! everything after that lookup is deterministic.
//!
//! # Responsibilities
//!
//! - Validate caller-supplied parameters into typed values
//! - Resolve a store slug through the [`StoreRepository`] port
//! - Thread the injected [`Clock`] reading through the pure functions
//! - Map results into the JSON response schemas
//!
//! # Non-Responsibilities
//!
//! - Routing, serialization transport, authentication
//! - Persistence of stores, hours or closures
//! - Any availability policy: opening logic lives in
//!   [`crate::availability`], not here

use std::sync::Arc;

use crate::api::params::SlotQueryParams;
use crate::api::responses::{PickupSlotsResponse, StoreStatusResponse};
use crate::availability::engine::compute_status;
use crate::availability::slots::{generate_slots, SlotOptions};
use crate::config::availability::AvailabilityConfig;
use crate::error::request::RequestError;
use crate::store::context::StoreContext;
use crate::store::repository::StoreRepository;
use crate::time::clock::Clock;

/// Availability endpoints bundled behind injected collaborators.
///
/// Clone-cheap handles (`Arc` ports plus a small config) so one instance
/// can serve concurrent requests.
pub struct AvailabilityService {
    repo: Arc<dyn StoreRepository>,
    clock: Arc<dyn Clock>,
    config: AvailabilityConfig,
}

impl AvailabilityService {
    /// Creates the service from its collaborators.
    pub fn new(
        repo: Arc<dyn StoreRepository>,
        clock: Arc<dyn Clock>,
        config: AvailabilityConfig,
    ) -> Self {
        Self { repo, clock, config }
    }

    /// Loads and parses one store's availability snapshot.
    async fn load_context(&self, slug: &str) -> Result<StoreContext, RequestError> {
        let record = self
            .repo
            .fetch_store(slug)
            .await
            .map_err(RequestError::Repository)?;

        match record {
            Some(record) => Ok(StoreContext::from_record(&record)),
            None => Err(RequestError::StoreNotFound {
                slug: slug.to_string(),
            }),
        }
    }

    /// Reports whether the store is open now and when it next opens.
    pub async fn store_status(&self, slug: &str) -> Result<StoreStatusResponse, RequestError> {
        let ctx = self.load_context(slug).await?;
        let status = compute_status(self.clock.now(), &ctx);
        Ok(status.into())
    }

    /// Returns the pickup slots currently offered by the store.
    pub async fn pickup_slots(
        &self,
        slug: &str,
        params: &SlotQueryParams,
    ) -> Result<PickupSlotsResponse, RequestError> {
        // -----------------------------
        // Parameter validation
        // -----------------------------
        //
        // Malformed input is rejected before the repository is touched.
        let start_date = params.requested_date()?;

        // -----------------------------
        // Load the store snapshot
        // -----------------------------
        let ctx = self.load_context(slug).await?;

        // -----------------------------
        // Pure slot computation
        // -----------------------------
        //
        // From here on the call is deterministic: one clock reading, then
        // the generator runs over the immutable snapshot.
        let opts = SlotOptions {
            min_advance_minutes: self.config.min_advance_minutes,
            days_ahead: self.config.days_ahead,
            start_date,
            locale: params.locale_or(self.config.default_locale()),
        };
        let slots = generate_slots(self.clock.now(), &ctx, &opts);

        Ok(slots.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::record::{HourRow, StoreRecord};
    use anyhow::anyhow;
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Clock double returning a preset instant.
    struct FixedClock(DateTime<Utc>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// Repository double over a plain map, recording the requested slugs.
    #[derive(Default)]
    struct InMemoryStores {
        stores: HashMap<String, StoreRecord>,
        requests: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl StoreRepository for InMemoryStores {
        async fn fetch_store(&self, slug: &str) -> anyhow::Result<Option<StoreRecord>> {
            self.requests.lock().unwrap().push(slug.to_string());
            Ok(self.stores.get(slug).cloned())
        }
    }

    /// Repository double whose storage is down.
    struct FailingStores;

    #[async_trait]
    impl StoreRepository for FailingStores {
        async fn fetch_store(&self, _slug: &str) -> anyhow::Result<Option<StoreRecord>> {
            Err(anyhow!("connection refused"))
        }
    }

    fn monday_hours() -> Vec<HourRow> {
        vec![HourRow {
            day_of_week: "monday".into(),
            open_time: "09:00".into(),
            close_time: "17:00".into(),
            display_order: 0,
        }]
    }

    fn berlin_bistro() -> StoreRecord {
        StoreRecord {
            timezone: Some("Europe/Berlin".into()),
            hours: monday_hours(),
            closures: vec![],
        }
    }

    fn service_with(record: StoreRecord, now: DateTime<Utc>) -> AvailabilityService {
        let mut stores = HashMap::new();
        stores.insert("bistro-mitte".to_string(), record);
        let repo = InMemoryStores {
            stores,
            requests: Mutex::new(vec![]),
        };
        AvailabilityService::new(
            Arc::new(repo),
            Arc::new(FixedClock(now)),
            AvailabilityConfig::default(),
        )
    }

    // ---- store status ----

    /// Open store: `isOpen` true, no next opening.
    #[tokio::test]
    async fn status_reports_an_open_store() {
        // 2025-03-10 09:00 UTC is Monday 10:00 in Berlin.
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let service = service_with(berlin_bistro(), now);

        let response = service.store_status("bistro-mitte").await.unwrap();

        assert_eq!(
            response,
            StoreStatusResponse {
                is_open: true,
                next_open_time: None,
            }
        );
    }

    /// Closed store: the next opening is rendered in RFC 3339. The record
    /// carries no timezone, so the UTC fallback applies.
    #[tokio::test]
    async fn status_reports_the_next_opening() {
        let record = StoreRecord {
            timezone: None,
            hours: monday_hours(),
            closures: vec![],
        };
        // Sunday noon; the store opens Monday 09:00 UTC.
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 12, 0, 0).unwrap();
        let service = service_with(record, now);

        let response = service.store_status("bistro-mitte").await.unwrap();

        assert_eq!(
            response,
            StoreStatusResponse {
                is_open: false,
                next_open_time: Some("2025-03-10T09:00:00Z".to_string()),
            }
        );
    }

    // ---- pickup slots ----

    /// End to end: rows → context → slots → localized response.
    #[tokio::test]
    async fn pickup_slots_flow_end_to_end() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let service = service_with(berlin_bistro(), now);
        let params = SlotQueryParams {
            date: None,
            language_code: Some("de".into()),
        };

        let response = service.pickup_slots("bistro-mitte", &params).await.unwrap();

        // Monday 10:30–16:45 local on the 15-minute grid, nothing within the
        // 30-minute lead time, and only Monday has hours this week.
        assert_eq!(response.slots.len(), 26);
        assert_eq!(response.slots[0].datetime, "2025-03-10T09:30:00Z");
        assert_eq!(response.slots[0].label, "Heute, 10.03.2025 10:30");
        assert!(response.slots.iter().all(|s| s.label.starts_with("Heute, ")));
    }

    /// An unknown slug is a typed not-found, not a panic or an empty list.
    #[tokio::test]
    async fn unknown_store_is_not_found() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let service = service_with(berlin_bistro(), now);

        let err = service.store_status("no-such-store").await.unwrap_err();

        assert!(
            matches!(err, RequestError::StoreNotFound { ref slug } if slug == "no-such-store"),
            "got {err:?}"
        );
    }

    /// Storage failures surface as the generic repository error.
    #[tokio::test]
    async fn repository_failures_surface_as_request_errors() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let service = AvailabilityService::new(
            Arc::new(FailingStores),
            Arc::new(FixedClock(now)),
            AvailabilityConfig::default(),
        );

        let err = service.store_status("bistro-mitte").await.unwrap_err();

        assert!(matches!(err, RequestError::Repository(_)), "got {err:?}");
        assert_eq!(err.to_string(), "failed to load store data");
    }

    /// Malformed dates fail before any repository call.
    #[tokio::test]
    async fn invalid_date_short_circuits_before_io() {
        let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();
        let mut stores = HashMap::new();
        stores.insert("bistro-mitte".to_string(), berlin_bistro());
        let repo = Arc::new(InMemoryStores {
            stores,
            requests: Mutex::new(vec![]),
        });
        let service = AvailabilityService::new(
            repo.clone(),
            Arc::new(FixedClock(now)),
            AvailabilityConfig::default(),
        );
        let params = SlotQueryParams {
            date: Some("10.03.2025".into()),
            language_code: None,
        };

        let err = service.pickup_slots("bistro-mitte", &params).await.unwrap_err();

        assert!(matches!(err, RequestError::InvalidDate { .. }), "got {err:?}");
        assert!(repo.requests.lock().unwrap().is_empty());
    }
}
