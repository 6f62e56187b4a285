use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Environment variable carrying the Linear API key.
pub const API_KEY_ENV: &str = "LINEAR_API_KEY";

/// Environment variable overriding the work store root directory.
pub const ROOT_ENV: &str = "TERNA_ROOT";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "Missing Linear API key. Set the LINEAR_API_KEY environment variable \
         or tracker.api_key in .terna/sync.yaml"
    )]
    MissingApiKey,

    #[error("Tracker API URL cannot be empty")]
    EmptyApiUrl,

    #[error("Store root cannot be empty")]
    EmptyStoreRoot,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .terna/sync.yaml (project config, optional)
    /// 3. Environment variables (TERNA_SYNC_* prefix)
    /// 4. Canonical environment variables (LINEAR_API_KEY, TERNA_ROOT)
    ///
    /// Note: Configuration is always project-local (pwd/.terna/) so one
    /// machine can hold several work stores.
    pub fn load() -> Result<Config> {
        let mut config: Config = Figment::new()
            // 1. Start with programmatic defaults
            .merge(Serialized::defaults(Config::default()))
            // 2. Merge project config (optional)
            .merge(Yaml::file(".terna/sync.yaml"))
            // 3. Merge environment variables
            .merge(Env::prefixed("TERNA_SYNC_").split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::apply_canonical_env(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::apply_canonical_env(&mut config);
        Self::validate(&config)?;
        Ok(config)
    }

    /// Overlay the canonical environment variables on top of whatever
    /// the merged sources produced. These are the names agent tooling
    /// already exports, so they win over every file-based source.
    fn apply_canonical_env(config: &mut Config) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                config.tracker.api_key = key.to_string();
            }
        }
        if let Ok(root) = std::env::var(ROOT_ENV) {
            let root = root.trim();
            if !root.is_empty() {
                config.store.root = root.to_string();
            }
        }
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.tracker.api_url.is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }

        if config.store.root.is_empty() {
            return Err(ConfigError::EmptyStoreRoot);
        }

        Ok(())
    }

    /// Check that delivery credentials are present.
    ///
    /// Kept separate from [`Self::validate`] so read-only commands can
    /// run without an API key. Delivery commands call this before any
    /// store access, so a missing key fails before work is done.
    pub fn require_credential(config: &Config) -> Result<(), ConfigError> {
        if config.tracker.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}
