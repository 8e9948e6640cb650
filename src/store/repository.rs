use anyhow::Result;
use async_trait::async_trait;

use crate::store::record::StoreRecord;

/// Port trait for loading store availability data.
///
/// This trait is the **only I/O seam** of the subsystem: everything behind
/// it (status computation, slot generation) is pure. Implementations may
/// load from:
///
/// - The relational store tables (production)
/// - An in-memory map (tests, previews)
/// - A caching layer in front of either
///
/// ## Design notes
///
/// - The trait is intentionally **minimal**: one lookup by slug, returning
///   the raw [`StoreRecord`] rows.
/// - `Ok(None)` means "no such store" — a normal outcome the caller maps
///   to its not-found response, distinct from `Err(_)`, which means the
///   collaborator itself failed.
/// - The trait does **not** parse rows or resolve timezones; that belongs
///   to [`crate::store::context::StoreContext::from_record`], so every
///   caller applies the same degradation policy.
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync` so the port can be shared via
/// `Arc` across request handlers and background tasks.
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// Loads the availability data for the store identified by `slug`.
    ///
    /// ## Returns
    ///
    /// - `Ok(Some(record))` if the store exists
    /// - `Ok(None)` if the slug resolves to nothing
    /// - `Err(_)` if the underlying storage failed
    async fn fetch_store(&self, slug: &str) -> Result<Option<StoreRecord>>;
}
