//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the trait interfaces that adapters implement:
//! - `IssueCatalog`: read access to issue and attempt records in a store
//! - `IssueTracker`: comment delivery to an external issue tracker
//!
//! These traits define the contracts that allow the sync pipeline to be
//! independent of specific store layouts and tracker APIs.

pub mod catalog;
pub mod tracker;

pub use catalog::IssueCatalog;
pub use tracker::{CommentReceipt, IssueTracker};
