//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Field names follow the public wire format
//! (`AccountId`, `redirectType`, `shortUrl`).

pub mod account;
pub mod health;
pub mod help;
pub mod register;
pub mod response;
pub mod statistic;
