//! Time access and timezone conversion.
//!
//! - [`clock`] / [`system_clock`]: the injectable "now" port.
//! - [`zone`]: IANA timezone resolution and conversion between wall-clock
//!   readings and instants, including the DST edge-case policy.

pub mod clock;
pub mod system_clock;
pub mod zone;
