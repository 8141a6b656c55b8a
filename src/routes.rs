//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /account`                - Open an account (public)
//! - `GET  /help`                   - Usage instructions (public)
//! - `GET  /health`                 - Health check (public)
//! - `POST /register`               - Register a URL (Basic auth)
//! - `GET  /statistic/{AccountId}`  - Hit statistics (Basic auth)
//! - `GET  /{code}`                 - Shorthand redirect (Basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - HTTP Basic, per account
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Public and authenticated routes with state attached, without the outer
/// middleware stack.
pub fn api_router(state: AppState) -> Router {
    let protected = api::routes::protected_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth::layer,
    ));

    Router::new()
        .merge(api::routes::public_routes())
        .merge(protected)
        .with_state(state)
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = api_router(state).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
