use thiserror::Error;

/// Errors surfaced to the presentation layer by the availability service.
///
/// The pure engine never fails; everything in here happens **at the
/// boundary**: resolving a store slug through the persistence port, or
/// validating caller-supplied parameters.
///
/// # Design
/// - `StoreNotFound` maps to the transport's not-found response.
/// - `InvalidDate` maps to a validation/bad-request response.
/// - `Repository` wraps infrastructure failures from the port; the message
///   stays generic so storage details do not leak to clients.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The slug did not resolve to a store.
    #[error("store `{slug}` not found")]
    StoreNotFound { slug: String },

    /// A caller-supplied date that is not a valid `YYYY-MM-DD` value.
    #[error("invalid date `{raw}`: expected YYYY-MM-DD")]
    InvalidDate { raw: String },

    /// The persistence collaborator failed while loading store data.
    #[error("failed to load store data")]
    Repository(#[source] anyhow::Error),
}
