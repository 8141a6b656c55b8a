//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without storage concerns.
//!
//! # Entity Types
//!
//! - [`Shorthand`] - A per-account alias for a long URL, with its hit counter
//! - [`RedirectKind`] - Permanent (301) or temporary (302) redirect
//! - [`Registration`] - Whether a registration created or reused a shorthand
//! - [`Account`] / [`Credentials`] - Opened accounts and their one-time secrets

pub mod account;
pub mod shorthand;

pub use account::{Account, Credentials};
pub use shorthand::{RedirectKind, Registration, Shorthand};
