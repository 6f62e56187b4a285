//! Issue records from the terna store.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::frontmatter::split_frontmatter;

/// Marker word used by scaffolding in place of a real Linear issue id.
///
/// A `linear_id` containing this word is treated as unset.
const PLACEHOLDER_MARKER: &str = "REPLACE";

/// Location of one issue directory inside the store.
///
/// `issue_id` is the directory name (e.g. `ISSUE-001-fix-login`), which
/// doubles as the human-facing identifier throughout the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueHandle {
    /// Name of the project directory the issue belongs to.
    pub project: String,
    /// Issue directory name, starting with the issue identifier.
    pub issue_id: String,
    /// Path of the issue directory.
    pub path: PathBuf,
}

/// Typed metadata from an `issue.md` frontmatter block.
///
/// Every field is optional; unknown keys are ignored. Only `linear_id`
/// drives sync behavior, the rest describe the issue for listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueFrontmatter {
    /// Linear issue id this record is linked to, if any.
    #[serde(default)]
    pub linear_id: Option<String>,
    /// Tracker-style identifier (e.g. `ISSUE-001`).
    #[serde(default)]
    pub identifier: Option<String>,
    /// Issue title.
    #[serde(default)]
    pub title: Option<String>,
    /// Workflow status (e.g. `todo`, `in-progress`, `done`).
    #[serde(default)]
    pub status: Option<String>,
}

/// Whether an issue record is linked to a Linear issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerBinding {
    /// Linked; carries the Linear issue id to deliver to.
    Linked(String),
    /// Not linked: `linear_id` is missing, empty, or still a placeholder.
    Unlinked,
}

impl IssueFrontmatter {
    /// Parse an `issue.md` document.
    ///
    /// Fails with a reason string when the frontmatter markers are missing
    /// or the metadata block is not valid YAML for this structure.
    pub fn parse(text: &str) -> Result<Self, String> {
        let (metadata, _body) = split_frontmatter(text)?;
        serde_yaml::from_str(metadata).map_err(|e| format!("invalid YAML metadata: {e}"))
    }

    /// Decide how this issue is bound to Linear.
    pub fn tracker_binding(&self) -> TrackerBinding {
        match self.linear_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() && !id.contains(PLACEHOLDER_MARKER) => {
                TrackerBinding::Linked(id.to_string())
            }
            _ => TrackerBinding::Unlinked,
        }
    }
}
