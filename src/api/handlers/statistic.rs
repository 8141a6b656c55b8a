//! Handler for per-account statistics.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::json;

use crate::api::dto::statistic::StatisticResponse;
use crate::api::middleware::auth::AuthenticatedAccount;
use crate::error::AppError;
use crate::state::AppState;

/// Returns hit counts for every URL the account registered.
///
/// # Endpoint
///
/// `GET /statistic/{AccountId}` (Basic auth)
///
/// Accounts may only read their own statistics.
///
/// # Response
///
/// ```json
/// {
///   "https://example.com/a": 3,
///   "https://example.com/b": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `AccountId` differs from the authenticated account.
pub async fn statistic_handler(
    State(state): State<AppState>,
    Extension(account): Extension<AuthenticatedAccount>,
    Path(account_id): Path<String>,
) -> Result<Json<StatisticResponse>, AppError> {
    tracing::info!("{} requested stats for {}", account.id(), account_id);

    if account.id() != account_id {
        return Err(AppError::bad_request(
            "incorrect AccountId",
            json!({ "account_id": account_id }),
        ));
    }

    Ok(Json(state.shorthand_service.statistics(account.id()).await))
}
