//! Attempt records: one Markdown document per agent run at an issue.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::frontmatter::split_frontmatter;

/// File name prefix for attempt documents (`attempt-<N>.md`).
const ATTEMPT_PREFIX: &str = "attempt-";

/// File name extension for attempt documents.
const ATTEMPT_SUFFIX: &str = ".md";

/// Reference to one attempt file, carrying its parsed sequence number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptRef {
    /// Sequence number extracted from the file name.
    pub sequence: u32,
    /// Path of the attempt document.
    pub path: PathBuf,
}

/// Typed metadata from an attempt document's frontmatter block.
///
/// Every field is optional: an absent field degrades to a placeholder in
/// the rendered report rather than failing the sync. `started` and
/// `completed` are opaque timestamp strings echoed verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptFrontmatter {
    /// Attempt sequence number as recorded in the metadata (integer).
    #[serde(default)]
    pub attempt: Option<u32>,
    /// Name of the agent that ran the attempt.
    #[serde(default)]
    pub agent: Option<String>,
    /// Outcome status; `success` selects the success glyph in the report.
    #[serde(default)]
    pub status: Option<String>,
    /// When the attempt started.
    #[serde(default)]
    pub started: Option<String>,
    /// When the attempt completed.
    #[serde(default)]
    pub completed: Option<String>,
}

/// A fully parsed attempt document: metadata plus free-form report body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptDocument {
    pub frontmatter: AttemptFrontmatter,
    /// Report body, whitespace-trimmed.
    pub body: String,
}

impl AttemptDocument {
    /// Parse an attempt document.
    ///
    /// Missing frontmatter markers or metadata that does not deserialize
    /// into [`AttemptFrontmatter`] fail with a reason string; there is no
    /// partial result. Missing individual fields are fine.
    pub fn parse(text: &str) -> Result<Self, String> {
        let (metadata, body) = split_frontmatter(text)?;
        let frontmatter: AttemptFrontmatter =
            serde_yaml::from_str(metadata).map_err(|e| format!("invalid YAML metadata: {e}"))?;
        Ok(Self {
            frontmatter,
            body: body.to_string(),
        })
    }
}

/// Extract the sequence number from an attempt file name.
///
/// Returns `Ok(None)` for names that are not attempt documents at all
/// (wrong prefix or extension); those are ignored by selection. A name
/// shaped like an attempt document whose sequence is not a base-10
/// integer is data corruption and returns a reason string.
pub fn attempt_sequence(file_name: &str) -> Result<Option<u32>, String> {
    let Some(stem) = file_name
        .strip_prefix(ATTEMPT_PREFIX)
        .and_then(|rest| rest.strip_suffix(ATTEMPT_SUFFIX))
    else {
        return Ok(None);
    };

    stem.parse::<u32>().map(Some).map_err(|_| {
        format!("attempt file name has a non-numeric sequence: '{file_name}'")
    })
}
