//! Filesystem-backed issue catalog.
//!
//! Reads the terna workspace layout:
//!
//! ```text
//! <root>/projects/<project>/issues/<issue-dir>/issue.md
//! <root>/projects/<project>/issues/<issue-dir>/attempts/attempt-<N>.md
//! ```
//!
//! All accesses are read-only. Traversal skips entries that do not fit
//! the layout (stray files, projects without an `issues/` directory)
//! rather than failing on them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::config::StoreConfig;
use crate::domain::models::{attempt_sequence, AttemptRef, IssueFrontmatter, IssueHandle};
use crate::domain::ports::IssueCatalog;

/// Issue metadata file name inside an issue directory.
const ISSUE_DOC: &str = "issue.md";

/// Attempt collection directory name inside an issue directory.
const ATTEMPTS_DIR: &str = "attempts";

/// [`IssueCatalog`] over a terna workspace on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsIssueCatalog {
    /// The `<root>/projects` directory.
    projects_dir: PathBuf,
}

impl FsIssueCatalog {
    /// Create a catalog over the workspace described by `store`.
    pub fn new(store: &StoreConfig) -> Self {
        Self {
            projects_dir: store.projects_dir(),
        }
    }

    /// Walk `projects/*/issues/*` and collect every issue directory.
    ///
    /// Results are sorted by project then issue id, so downstream
    /// behavior never depends on directory enumeration order. A missing
    /// `projects/` directory yields an empty list, not an error.
    fn scan(&self) -> SyncResult<Vec<IssueHandle>> {
        let mut handles = Vec::new();
        if !self.projects_dir.is_dir() {
            return Ok(handles);
        }

        for project_entry in read_dir(&self.projects_dir)? {
            let project_path = project_entry.path();
            if !project_path.is_dir() {
                continue;
            }
            let project = project_entry.file_name().to_string_lossy().into_owned();

            let issues_dir = project_path.join("issues");
            if !issues_dir.is_dir() {
                continue;
            }

            for issue_entry in read_dir(&issues_dir)? {
                let issue_path = issue_entry.path();
                if !issue_path.is_dir() {
                    continue;
                }
                handles.push(IssueHandle {
                    project: project.clone(),
                    issue_id: issue_entry.file_name().to_string_lossy().into_owned(),
                    path: issue_path,
                });
            }
        }

        handles.sort_by(|a, b| (&a.project, &a.issue_id).cmp(&(&b.project, &b.issue_id)));
        Ok(handles)
    }
}

impl IssueCatalog for FsIssueCatalog {
    fn resolve(&self, prefix: &str) -> SyncResult<Option<IssueHandle>> {
        let mut matches: Vec<IssueHandle> = self
            .scan()?
            .into_iter()
            .filter(|handle| handle.issue_id.starts_with(prefix))
            .collect();

        tracing::debug!(prefix = prefix, matches = matches.len(), "resolved issue prefix");

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            _ => {
                let mut candidates: Vec<String> =
                    matches.into_iter().map(|handle| handle.issue_id).collect();
                candidates.sort();
                Err(SyncError::AmbiguousPrefix {
                    prefix: prefix.to_string(),
                    candidates,
                })
            }
        }
    }

    fn list_issues(&self) -> SyncResult<Vec<IssueHandle>> {
        self.scan()
    }

    fn load_issue(&self, handle: &IssueHandle) -> SyncResult<IssueFrontmatter> {
        let path = handle.path.join(ISSUE_DOC);
        let text = fs::read_to_string(&path).map_err(|e| SyncError::store(&path, e))?;
        IssueFrontmatter::parse(&text).map_err(|reason| SyncError::MalformedIssue {
            path: path.display().to_string(),
            reason,
        })
    }

    fn latest_attempt(&self, handle: &IssueHandle) -> SyncResult<Option<AttemptRef>> {
        let attempts_dir = handle.path.join(ATTEMPTS_DIR);
        if !attempts_dir.is_dir() {
            return Ok(None);
        }

        let mut latest: Option<AttemptRef> = None;
        for entry in read_dir(&attempts_dir)? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let sequence = match attempt_sequence(&name) {
                Ok(Some(sequence)) => sequence,
                Ok(None) => continue,
                Err(reason) => {
                    return Err(SyncError::MalformedAttempt {
                        path: entry.path().display().to_string(),
                        reason,
                    });
                }
            };

            if latest.as_ref().is_none_or(|best| sequence > best.sequence) {
                latest = Some(AttemptRef {
                    sequence,
                    path: entry.path(),
                });
            }
        }

        Ok(latest)
    }

    fn read_attempt(&self, attempt: &AttemptRef) -> SyncResult<String> {
        fs::read_to_string(&attempt.path).map_err(|e| SyncError::store(&attempt.path, e))
    }
}

/// Read a directory, surfacing entry-level I/O errors with path context.
fn read_dir(dir: &Path) -> SyncResult<Vec<fs::DirEntry>> {
    fs::read_dir(dir)
        .map_err(|e| SyncError::store(dir, e))?
        .map(|entry| entry.map_err(|e| SyncError::store(dir, e)))
        .collect()
}
