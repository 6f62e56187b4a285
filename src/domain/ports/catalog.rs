//! Issue catalog port.
//!
//! The sync service reads issue and attempt records exclusively through
//! this trait, keeping the pipeline independent of how the store is laid
//! out. The filesystem adapter is the production implementation; tests
//! substitute in-memory stubs.

use crate::domain::errors::SyncResult;
use crate::domain::models::{AttemptRef, IssueFrontmatter, IssueHandle};

/// Port for looking up issues and their attempts in a store.
///
/// All operations are synchronous, read-only filesystem-style accesses;
/// nothing here suspends.
pub trait IssueCatalog: Send + Sync {
    /// Resolve an issue identifier prefix to its location.
    ///
    /// Returns `Ok(None)` when nothing matches. A prefix matching more
    /// than one issue is an error carrying the candidate list; callers
    /// never receive an arbitrary pick.
    fn resolve(&self, prefix: &str) -> SyncResult<Option<IssueHandle>>;

    /// List every issue across all projects, in a stable order.
    fn list_issues(&self) -> SyncResult<Vec<IssueHandle>>;

    /// Read and parse the issue's metadata document.
    fn load_issue(&self, handle: &IssueHandle) -> SyncResult<IssueFrontmatter>;

    /// Find the attempt with the highest sequence number.
    ///
    /// Returns `Ok(None)` when the issue has no attempt records. A file
    /// shaped like an attempt document whose sequence cannot be parsed
    /// fails the whole selection.
    fn latest_attempt(&self, handle: &IssueHandle) -> SyncResult<Option<AttemptRef>>;

    /// Read the raw text of one attempt document.
    fn read_attempt(&self, attempt: &AttemptRef) -> SyncResult<String>;
}
