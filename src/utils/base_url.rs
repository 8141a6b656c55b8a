//! Public base URL resolution for generated short URLs.

use crate::AppError;
use axum::http::{HeaderMap, header};

/// Determines the base URL that short codes are appended to.
///
/// A configured `PUBLIC_BASE_URL` always wins (trailing slashes trimmed).
/// Otherwise the base is built from the request's `Host` header as
/// `http://<host>[:<port>]`, omitting the default port 80.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no base URL is configured and the
/// `Host` header is missing or not valid UTF-8.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "short.example.com:8080".parse().unwrap());
///
/// let base = resolve_base_url(None, &headers).unwrap();
/// assert_eq!(base, "http://short.example.com:8080");
/// ```
pub fn resolve_base_url(configured: Option<&str>, headers: &HeaderMap) -> Result<String, AppError> {
    if let Some(base) = configured {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = headers
        .get(header::HOST)
        .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
        .to_str()
        .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?;

    let host = host.strip_suffix(":80").unwrap_or(host);

    Ok(format!("http://{host}"))
}

/// Joins a base URL and a shorthand code.
pub fn short_url(base: &str, code: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), code)
}
