//! Business logic services for Krishi Smart Advisory

pub mod advisory;

pub use advisory::AdvisoryService;
