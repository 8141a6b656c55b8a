//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod account;
pub mod health;
pub mod help;
pub mod redirect;
pub mod register;
pub mod statistic;

pub use account::open_account_handler;
pub use health::health_handler;
pub use help::help_handler;
pub use redirect::redirect_handler;
pub use register::register_handler;
pub use statistic::statistic_handler;
