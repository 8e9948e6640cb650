pub mod availability;
pub mod env;
