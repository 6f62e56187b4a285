pub mod attempt;
pub mod config;
pub mod frontmatter;
pub mod issue;

pub use attempt::{attempt_sequence, AttemptDocument, AttemptFrontmatter, AttemptRef};
pub use config::{Config, StoreConfig, TrackerConfig};
pub use frontmatter::split_frontmatter;
pub use issue::{IssueFrontmatter, IssueHandle, TrackerBinding};
