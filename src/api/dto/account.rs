//! DTOs for account opening.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Account ids start with a letter, followed by 3-30 letters, digits, `_` or `-`.
static ACCOUNT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9_-]{3,30}$").unwrap());

/// Request to open an account.
///
/// ```json
/// { "AccountId": "myAccountId" }
/// ```
#[derive(Debug, Deserialize, Validate)]
pub struct OpenAccountRequest {
    #[serde(rename = "AccountId")]
    #[validate(
        required(message = "incorrect AccountId"),
        regex(path = *ACCOUNT_ID_REGEX, message = "incorrect AccountId")
    )]
    pub account_id: Option<String>,
}
