//! Handler for shorthand redirect.

use axum::{
    Extension,
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::api::middleware::auth::AuthenticatedAccount;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shorthand code to its target URL and counts the hit.
///
/// # Endpoint
///
/// `GET /{code}` (Basic auth)
///
/// Codes are looked up in the authenticated account's namespace only.
///
/// # Response
///
/// `301 Moved Permanently` or `302 Found`, as chosen at registration, with
/// the target in the `Location` header and an empty body.
///
/// # Errors
///
/// Returns 400 Bad Request (`incorrect shorthand`) if the code is unknown
/// for this account.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Path(code): Path<String>,
) -> Result<Response, AppError> {
    tracing::info!(
        "{} requested redirect with the shorthand {}",
        account.id(),
        code
    );

    let shorthand = state.shorthand_service.hit(account.id(), &code).await?;

    let status = StatusCode::from_u16(shorthand.redirect_kind.status_code())
        .map_err(|_| AppError::internal("Invalid redirect status", json!({})))?;

    let location = location_header(&shorthand.target_url).ok_or_else(|| {
        AppError::internal("Target URL is not a valid header value", json!({ "code": code }))
    })?;

    Ok((status, [(header::LOCATION, location)]).into_response())
}

/// Builds the `Location` value for a registered target.
///
/// ASCII targets are sent exactly as registered. Anything else is sent in
/// its serialized URL form (punycode host, percent-encoded path), since
/// header values must be ASCII.
fn location_header(target_url: &str) -> Option<HeaderValue> {
    if target_url.is_ascii()
        && let Ok(value) = HeaderValue::from_str(target_url)
    {
        return Some(value);
    }

    let serialized = Url::parse(target_url).ok()?;
    HeaderValue::try_from(String::from(serialized)).ok()
}
