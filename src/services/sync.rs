//! Sync orchestration.
//!
//! Drives one issue through the pipeline: resolve the identifier, load
//! the issue metadata, select the latest attempt, render the report,
//! deliver it. Each stage either advances, exits with an expected-skip
//! outcome, or fails with a [`SyncError`]. This service is the only
//! place that decides which terminal states are errors and which are
//! ordinary skips.

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::{AttemptDocument, TrackerBinding};
use crate::domain::ports::{IssueCatalog, IssueTracker};
use crate::services::report::format_attempt_comment;

/// Terminal state of a successful sync run.
///
/// Skips are successes: the store told us there is nothing to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The latest attempt report was posted to the tracker.
    Delivered {
        issue_id: String,
        external_id: String,
        attempt: u32,
        comment_id: Option<String>,
    },
    /// The issue has no usable Linear id; nothing was sent.
    SkippedUnlinked { issue_id: String },
    /// The issue has no attempt records; nothing was sent.
    SkippedNoAttempts { issue_id: String },
}

/// Orchestrates one sync run over a catalog and a tracker.
#[derive(Debug)]
pub struct SyncService<C, T> {
    catalog: C,
    tracker: T,
}

impl<C: IssueCatalog, T: IssueTracker> SyncService<C, T> {
    /// Create a service over the given adapters.
    pub fn new(catalog: C, tracker: T) -> Self {
        Self { catalog, tracker }
    }

    /// Sync the latest attempt of the issue matching `prefix`.
    ///
    /// At most one tracker call is made, and only after every local
    /// stage has succeeded.
    pub async fn sync(&self, prefix: &str) -> SyncResult<SyncOutcome> {
        let handle = self
            .catalog
            .resolve(prefix)?
            .ok_or_else(|| SyncError::IssueNotFound {
                prefix: prefix.to_string(),
            })?;
        tracing::info!(issue = %handle.issue_id, project = %handle.project, "resolved issue");

        let frontmatter = self.catalog.load_issue(&handle)?;
        let external_id = match frontmatter.tracker_binding() {
            TrackerBinding::Linked(id) => id,
            TrackerBinding::Unlinked => {
                tracing::info!(issue = %handle.issue_id, "issue is not linked to Linear, skipping");
                return Ok(SyncOutcome::SkippedUnlinked {
                    issue_id: handle.issue_id,
                });
            }
        };

        let Some(attempt) = self.catalog.latest_attempt(&handle)? else {
            tracing::info!(issue = %handle.issue_id, "no attempts recorded, skipping");
            return Ok(SyncOutcome::SkippedNoAttempts {
                issue_id: handle.issue_id,
            });
        };

        let text = self.catalog.read_attempt(&attempt)?;
        let document =
            AttemptDocument::parse(&text).map_err(|reason| SyncError::MalformedAttempt {
                path: attempt.path.display().to_string(),
                reason,
            })?;

        let comment = format_attempt_comment(&document, &handle.issue_id);
        tracing::info!(
            issue = %handle.issue_id,
            external_id = %external_id,
            attempt = attempt.sequence,
            "delivering attempt report"
        );

        let receipt = self.tracker.post_comment(&external_id, &comment).await?;
        Ok(SyncOutcome::Delivered {
            issue_id: handle.issue_id,
            external_id,
            attempt: attempt.sequence,
            comment_id: receipt.comment_id,
        })
    }
}
