//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading (.terna/sync.yaml)
//! - TERNA_SYNC_* environment overrides
//! - Canonical LINEAR_API_KEY / TERNA_ROOT variables on top
//! - Credential pre-flight for delivery commands

pub mod loader;

pub use loader::{ConfigError, ConfigLoader, API_KEY_ENV, ROOT_ENV};
