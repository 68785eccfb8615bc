//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod classify;
pub mod health;
pub mod variants;

pub use classify::classify_handler;
pub use health::health_handler;
pub use variants::{export_handler, variants_handler};
