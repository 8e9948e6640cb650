pub mod params;
pub mod responses;
pub mod service;
