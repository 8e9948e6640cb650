//! Common error types shared across layers.

pub mod request;
pub mod schedule;
