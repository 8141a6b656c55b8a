//! HTTP Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Account id of the authenticated caller.
///
/// Inserted into request extensions by [`layer`]; handlers read it with
/// `Extension<AuthenticatedAccount>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedAccount(pub String);

impl AuthenticatedAccount {
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// Authenticates requests with HTTP Basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(<AccountId>:<password>)
/// ```
///
/// # Authentication Flow
///
/// 1. Extract account id and password from the `Authorization` header
/// 2. Verify the password digest against the account directory
/// 3. Attach [`AuthenticatedAccount`] to the request
/// 4. Continue to next middleware/handler
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic` if:
/// - Authorization header is missing or not Basic
/// - Account is unknown
/// - Password does not match
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((account_id, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    st.account_service
        .authenticate(&account_id, password.as_deref().unwrap_or_default())
        .await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(AuthenticatedAccount(account_id));

    Ok(next.run(req).await)
}
