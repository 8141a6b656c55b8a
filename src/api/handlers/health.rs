//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with store sizes.
///
/// # Endpoint
///
/// `GET /health` (public)
///
/// Both stores live in process memory, so the service is healthy whenever it
/// can answer.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "accounts": { "status": "ok", "message": "Accounts: 2" },
///     "shorthands": { "status": "ok", "message": "Namespaces: 2, shorthands: 5" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let accounts = check_accounts(&state).await;
    let shorthands = check_shorthands(&state);

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            accounts,
            shorthands,
        },
    })
}

async fn check_accounts(state: &AppState) -> CheckStatus {
    match state.account_service.account_count().await {
        Ok(count) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Accounts: {}", count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Account directory error: {}", e)),
        },
    }
}

fn check_shorthands(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "Namespaces: {}, shorthands: {}",
            state.shorthand_store.namespace_count(),
            state.shorthand_store.shorthand_count()
        )),
    }
}
