//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by the stores in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ShorthandRepository`] - Registration, listing, resolution and hit counting
//! - [`AccountRepository`] - Account directory and credential digests
//!
//! # Testing
//!
//! See integration tests in `tests/store_*.rs` for usage examples.

pub mod account_repository;
pub mod shorthand_repository;

pub use account_repository::AccountRepository;
pub use shorthand_repository::ShorthandRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use shorthand_repository::MockShorthandRepository;
