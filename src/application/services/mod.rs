//! Business logic services for the application layer.

pub mod account_service;
pub mod shorthand_service;

pub use account_service::AccountService;
pub use shorthand_service::ShorthandService;
