//! Common response envelope.

use serde::Serialize;

/// JSON envelope shared by account opening and registration.
///
/// Absent fields are omitted from the output, so each endpoint only emits
/// the keys it fills in.
#[derive(Debug, Default, Serialize)]
pub struct ApiResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(rename = "shortUrl", skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

impl ApiResponse {
    /// Successful account opening carrying the one-time secret.
    pub fn account_opened(password: String) -> Self {
        Self {
            success: Some(true),
            description: Some("Your account is opened".to_string()),
            password: Some(password),
            ..Self::default()
        }
    }

    /// Successful registration carrying the full short URL.
    pub fn registered(short_url: String) -> Self {
        Self {
            short_url: Some(short_url),
            ..Self::default()
        }
    }
}
