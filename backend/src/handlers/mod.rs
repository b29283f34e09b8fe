//! HTTP handlers for Krishi Smart Advisory

pub mod advisory;
pub mod health;
pub mod weather;

pub use advisory::*;
pub use health::*;
pub use weather::*;
