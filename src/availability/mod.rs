//! The availability computations: open/closed status, next opening, and
//! pickup slot generation.
//!
//! Everything in this module is a pure function over an explicit `now` and
//! an immutable [`crate::store::context::StoreContext`]; nothing here does
//! I/O or reads the system clock.

pub mod engine;
pub mod label;
pub mod slots;
