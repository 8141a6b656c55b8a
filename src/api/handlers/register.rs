//! Handler for URL registration.

use axum::{Extension, Json, extract::State, http::HeaderMap};
use validator::Validate;

use crate::api::dto::register::RegisterRequest;
use crate::api::dto::response::ApiResponse;
use crate::api::middleware::auth::AuthenticatedAccount;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::base_url::{resolve_base_url, short_url};

/// Registers a URL for the authenticated account and returns its short URL.
///
/// # Endpoint
///
/// `POST /register` (Basic auth)
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://stackoverflow.com/questions/1567929",
///   "redirectType": 301
/// }
/// ```
///
/// `redirectType` is optional and defaults to 302.
///
/// # Deduplication
///
/// Registering the same URL again returns the same short URL; the redirect
/// type of the first registration is kept.
///
/// # Response
///
/// ```json
/// { "shortUrl": "http://short.com/xYz123" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed URL or unsupported redirect type.
pub async fn register_handler(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    headers: HeaderMap,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    payload.validate()?;
    let redirect_kind = payload.redirect_kind()?;
    let target_url = payload.url.unwrap_or_default();

    tracing::info!("POST request on register shorthand for {}", target_url);

    let base = resolve_base_url(state.public_base_url.as_deref(), &headers)?;

    let shorthand = state
        .shorthand_service
        .register(account.id(), &target_url, redirect_kind)
        .await?;

    Ok(Json(ApiResponse::registered(short_url(&base, &shorthand.code))))
}
