//! Recurring weekly opening hours and explicit closure ranges.
//!
//! Both collections are immutable snapshots: they are built once per
//! request from freshly loaded rows and passed by reference into the
//! availability computations.

pub mod closure;
pub mod weekly;
