//! Handler for usage help.

use axum::Json;

use crate::api::dto::help::HelpResponse;

const INSTALLATION: &str = "prerequisites:\n\
installed Rust toolchain (cargo)\n\
1. clone or download the project sources\n\
2. step into the project directory and in the command line execute: cargo build --release";

const LAUNCHING: &str = "set CREDENTIAL_SIGNING_SECRET, then step into the project directory and execute in the command line:\n\
cargo run --release\n\
optional: LISTEN (default 0.0.0.0:8080), PUBLIC_BASE_URL, LOG_FORMAT (text|json), RUST_LOG";

const USAGE: &str = "usage:\n\
\n\
Opening of accounts:\n\
POST to /account with body { AccountId : 'myAccountId'}\n\
\n\
Registration of URLs (Basic auth with AccountId and password):\n\
POST to /register with body {url: 'http://stackoverflow.com/questions/1567929/website-safe-data-access-architecture-question?rq=1', redirectType : 301}\n\
\n\
Retrieval of statistics (Basic auth):\n\
GET to /statistic/{AccountId}\n\
\n\
Redirecting with a shorthand (Basic auth):\n\
GET to /{shorthand}\n\
\n\
Help:\n\
GET to /help";

/// Returns installation, launch and usage instructions.
///
/// # Endpoint
///
/// `GET /help` (public)
pub async fn help_handler() -> Json<HelpResponse> {
    Json(HelpResponse {
        installation: INSTALLATION.to_string(),
        launching: LAUNCHING.to_string(),
        usage: USAGE.to_string(),
    })
}
