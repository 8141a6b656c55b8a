//! HTTP middleware for request processing.
//!
//! Provides Basic authentication and request tracing.

pub mod auth;
pub mod tracing;
