//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and business rules. Services consume repository traits and provide a clean
//! API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorthand_service::ShorthandService`] - Registration, statistics and redirects
//! - [`services::account_service::AccountService`] - Account opening and authentication

pub mod services;
