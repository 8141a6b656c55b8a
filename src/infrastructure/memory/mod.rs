//! In-memory repository implementations.
//!
//! State lives for the lifetime of the process only.
//!
//! # Repositories
//!
//! - [`InMemoryShorthandStore`] - Per-account shorthand namespaces and hit counters
//! - [`InMemoryAccountDirectory`] - Opened accounts and credential digests

mod account_directory;
mod namespace;
mod shorthand_store;

pub use account_directory::InMemoryAccountDirectory;
pub use shorthand_store::{DEFAULT_MAX_CODE_ATTEMPTS, InMemoryShorthandStore};
