//! Issue tracker port.
//!
//! The delivery side of the pipeline: a single comment mutation against
//! the external tracker. The Linear adapter is the production
//! implementation; tests substitute recording stubs.

use async_trait::async_trait;

use crate::domain::errors::SyncResult;

/// Acknowledgement for a delivered comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReceipt {
    /// Identifier of the created comment, when the tracker returned one.
    pub comment_id: Option<String>,
}

/// Port for posting attempt reports to an external issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Post `body` as a comment on the tracker issue `external_id`.
    ///
    /// Exactly one network call per invocation: no retries. Succeeds only
    /// when the tracker acknowledges the comment at the application level,
    /// not merely at the transport level.
    async fn post_comment(&self, external_id: &str, body: &str) -> SyncResult<CommentReceipt>;
}
