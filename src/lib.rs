//! Terna Sync - Linear delivery for agent work records
//!
//! Syncs the attempt reports that autonomous agents leave in a terna
//! work store (`<root>/projects/*/issues/*`) back to Linear as issue
//! comments.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Frontmatter models, error taxonomy, port traits
//! - **Service Layer** (`services`): Report formatting and sync orchestration
//! - **Adapters** (`adapters`): Filesystem issue catalog, Linear GraphQL client
//! - **Infrastructure Layer** (`infrastructure`): Configuration loading
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use terna_sync::adapters::{FsIssueCatalog, LinearClient};
//! use terna_sync::services::SyncService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = terna_sync::infrastructure::config::ConfigLoader::load()?;
//!     let service = SyncService::new(
//!         FsIssueCatalog::new(&config.store),
//!         LinearClient::new(&config.tracker),
//!     );
//!     let outcome = service.sync("ISSUE-001").await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::{FsIssueCatalog, LinearClient};
pub use domain::errors::{SyncError, SyncResult};
pub use domain::models::{
    AttemptDocument, AttemptRef, Config, IssueFrontmatter, IssueHandle, StoreConfig,
    TrackerBinding, TrackerConfig,
};
pub use domain::ports::{CommentReceipt, IssueCatalog, IssueTracker};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{SyncOutcome, SyncService};
