//! Utility functions for code generation, URL validation, and request handling.
//!
//! - [`code_generator`] - Shorthand code and account secret generation
//! - [`url_validator`] - Target URL validation
//! - [`base_url`] - Short URL base resolution from config or `Host` header

pub mod base_url;
pub mod code_generator;
pub mod url_validator;
