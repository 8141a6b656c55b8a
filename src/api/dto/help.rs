//! DTOs for the help endpoint.

use serde::Serialize;

/// Usage instructions returned by `GET /help`.
#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub installation: String,
    pub launching: String,
    pub usage: String,
}
