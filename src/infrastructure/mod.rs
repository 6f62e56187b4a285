//! Infrastructure layer module
//!
//! Cross-cutting machinery that is not domain logic:
//! - Configuration management (figment loading and validation)

pub mod config;
