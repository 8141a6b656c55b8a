//! Domain layer containing business entities and logic.
//!
//! Defines entities, repository interfaces and core errors independent of
//! infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`error`] - Errors surfaced by the shorthand bookkeeping core
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])
//!
//! # Redirect Flow
//!
//! 1. HTTP handler receives `GET /{code}` from an authenticated account
//! 2. [`repositories::ShorthandRepository::hit`] resolves the code and counts the hit
//! 3. The handler answers with the record's redirect kind and `Location`

pub mod entities;
pub mod error;
pub mod repositories;
