//! DTOs for URL registration.

use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::domain::entities::RedirectKind;
use crate::error::AppError;
use crate::utils::url_validator::validate_target_url;

/// Request to register a URL.
///
/// ```json
/// { "url": "https://example.com/long/path", "redirectType": 301 }
/// ```
///
/// `redirectType` may be a number or a numeric string and defaults to `302`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(
        required(message = "incorrect url"),
        custom(function = validate_target_url, message = "incorrect url")
    )]
    pub url: Option<String>,

    #[serde(rename = "redirectType")]
    pub redirect_type: Option<RedirectTypeInput>,
}

/// Raw `redirectType` value as sent by clients.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RedirectTypeInput {
    Code(i64),
    Text(String),
    Other(serde_json::Value),
}

impl RegisterRequest {
    /// Resolves the requested redirect kind.
    ///
    /// A missing `redirectType` means a temporary redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`incorrect redirectType`) for anything
    /// other than 301 or 302.
    pub fn redirect_kind(&self) -> Result<RedirectKind, AppError> {
        let Some(input) = &self.redirect_type else {
            return Ok(RedirectKind::Temporary);
        };

        let code = match input {
            RedirectTypeInput::Code(n) => u16::try_from(*n).ok(),
            RedirectTypeInput::Text(s) => s.trim().parse::<u16>().ok(),
            RedirectTypeInput::Other(_) => None,
        };

        code.and_then(RedirectKind::from_status_code).ok_or_else(|| {
            AppError::bad_request(
                "incorrect redirectType",
                json!({ "allowed": [301, 302] }),
            )
        })
    }
}
