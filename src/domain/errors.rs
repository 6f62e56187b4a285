//! Domain errors for the terna-sync pipeline.

use thiserror::Error;

/// Format an ambiguous-match candidate list as `a, b, c`.
fn format_candidates(candidates: &[String]) -> String {
    candidates.join(", ")
}

/// Errors that can terminate a sync run.
///
/// Expected skips (an issue that is not linked to Linear, or one with no
/// recorded attempts) are not errors; the sync service reports those as
/// outcome variants instead.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("No issue found matching '{prefix}'")]
    IssueNotFound { prefix: String },

    #[error("Ambiguous issue prefix '{prefix}': matches {}", format_candidates(.candidates))]
    AmbiguousPrefix { prefix: String, candidates: Vec<String> },

    #[error("Malformed issue document {path}: {reason}")]
    MalformedIssue { path: String, reason: String },

    #[error("Malformed attempt {path}: {reason}")]
    MalformedAttempt { path: String, reason: String },

    #[error("Failed to post comment to Linear issue {external_id}: {detail}")]
    Delivery { external_id: String, detail: String },

    #[error("Store I/O error at {path}: {source}")]
    Store {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type SyncResult<T> = Result<T, SyncError>;

impl SyncError {
    /// Build a [`SyncError::Store`] from a path and the underlying I/O error.
    pub fn store(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        Self::Store {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}
