//! Store-facing input types: persistence rows, the immutable computation
//! context, and the repository port.

pub mod context;
pub mod record;
pub mod repository;
