pub mod report;
pub mod sync;

pub use report::format_attempt_comment;
pub use sync::{SyncOutcome, SyncService};
