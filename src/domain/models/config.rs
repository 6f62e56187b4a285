use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Main configuration structure for terna-sync
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Workspace store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Linear tracker configuration
    #[serde(default)]
    pub tracker: TrackerConfig,
}

/// Workspace store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StoreConfig {
    /// Root directory of the terna workspace
    #[serde(default = "default_store_root")]
    pub root: String,
}

fn default_store_root() -> String {
    "terna".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: default_store_root(),
        }
    }
}

impl StoreConfig {
    /// Directory holding the per-project trees (`<root>/projects`).
    pub fn projects_dir(&self) -> PathBuf {
        Path::new(&self.root).join("projects")
    }
}

/// Linear tracker configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TrackerConfig {
    /// GraphQL endpoint URL
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key, normally supplied via the `LINEAR_API_KEY` environment variable
    #[serde(default)]
    pub api_key: String,
}

fn default_api_url() -> String {
    "https://api.linear.app/graphql".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: String::new(),
        }
    }
}

// The API key must never reach logs through Debug formatting.
impl fmt::Debug for TrackerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrackerConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
