//! Domain models for the advisory server
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
