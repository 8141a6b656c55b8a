//! API route configuration.
//!
//! Routes returned by [`protected_routes`] require HTTP Basic authentication
//! via [`crate::api::middleware::auth`]; [`public_routes`] do not.

use crate::api::handlers::{
    health_handler, help_handler, open_account_handler, redirect_handler, register_handler,
    statistic_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes available without credentials.
///
/// # Endpoints
///
/// - `POST /account` - Open an account and receive its secret
/// - `GET  /help`    - Usage instructions
/// - `GET  /health`  - Health check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/account", post(open_account_handler))
        .route("/help", get(help_handler))
        .route("/health", get(health_handler))
}

/// Routes scoped to the authenticated account.
///
/// # Endpoints
///
/// - `POST /register`               - Register a URL
/// - `GET  /statistic/{account_id}` - Hit counts per URL
/// - `GET  /{code}`                 - Redirect to the registered URL
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/statistic/{account_id}", get(statistic_handler))
        .route("/{code}", get(redirect_handler))
}
