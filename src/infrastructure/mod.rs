//! Infrastructure layer implementing the domain repository traits.
//!
//! - [`memory`] - Process-local stores for shorthands and accounts

pub mod memory;
