//! Domain layer for the terna-sync pipeline
//!
//! This module contains core business logic and domain models.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{SyncError, SyncResult};
