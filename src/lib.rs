//! # Shorthand
//!
//! A per-account URL shorthand service built with Axum.
//!
//! Accounts register long URLs and receive short codes that redirect back to
//! them. Codes live in the owning account's namespace, so two accounts may
//! hold the same code for different targets. Every redirect counts a hit.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Shorthand and account entities, repository traits
//! - **Application Layer** ([`application`]) - Registration, statistics and authentication
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory stores
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export CREDENTIAL_SIGNING_SECRET="change-me"
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccountService, ShorthandService};
    pub use crate::domain::entities::{Account, Credentials, RedirectKind, Registration, Shorthand};
    pub use crate::domain::error::ShorthandError;
    pub use crate::domain::repositories::{AccountRepository, ShorthandRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::memory::{InMemoryAccountDirectory, InMemoryShorthandStore};
    pub use crate::state::AppState;
}
