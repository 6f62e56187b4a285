//! Adapters for external systems.

pub mod linear;
pub mod store;

pub use linear::LinearClient;
pub use store::FsIssueCatalog;
