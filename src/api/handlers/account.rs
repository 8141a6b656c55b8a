//! Handler for account opening.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::account::OpenAccountRequest;
use crate::api::dto::response::ApiResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Opens an account and returns its generated secret.
///
/// # Endpoint
///
/// `POST /account` (public)
///
/// # Request Body
///
/// ```json
/// { "AccountId": "myAccountId" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "description": "Your account is opened",
///   "password": "xC345Fc0"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the account id is malformed or already taken.
pub async fn open_account_handler(
    State(state): State<AppState>,
    Json(payload): Json<OpenAccountRequest>,
) -> Result<Json<ApiResponse>, AppError> {
    payload.validate()?;

    let account_id = payload.account_id.unwrap_or_default();
    tracing::info!("POST request on creating user for {}", account_id);

    let credentials = state.account_service.open_account(&account_id).await?;

    Ok(Json(ApiResponse::account_opened(credentials.password)))
}
