//! Target URL validation.
//!
//! Accepts absolute `http`, `https` and `ftp` URLs pointing at public hosts.
//! URLs are validated, never rewritten: deduplication compares the exact
//! string the client sent.

use std::net::Ipv4Addr;
use url::{Host, Url};
use validator::ValidationError;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("URL must not contain whitespace")]
    Whitespace,

    #[error("Only HTTP, HTTPS and FTP protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,

    #[error("Host is not a public address: {0}")]
    NonPublicAddress(String),

    #[error("Host is not a fully qualified domain name: {0}")]
    InvalidDomain(String),

    #[error("Port out of range: {0}")]
    InvalidPort(u16),
}

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Checks that `input` is an absolute URL the service may redirect to.
///
/// # Rules
///
/// 1. **Protocol**: `http`, `https` or `ftp`
/// 2. **Whitespace**: not allowed anywhere
/// 3. **Host**: required; IPv6 literals are rejected
/// 4. **IPv4 hosts**: no private, loopback, link-local, broadcast or
///    multicast ranges; first octet 1–223, last octet 1–254
/// 5. **Domain hosts**: at least two labels, no label starting or ending
///    with `-`, alphabetic top-level label of two or more characters
///    (punycode `xn--` labels allowed)
/// 6. **Port**: two to five digits when present
///
/// # Errors
///
/// Returns the first rule the URL violates.
pub fn check_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.chars().any(char::is_whitespace) {
        return Err(UrlValidationError::Whitespace);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::UnsupportedProtocol);
    }

    match url.host() {
        None => return Err(UrlValidationError::MissingHost),
        Some(Host::Ipv4(addr)) => check_ipv4(addr)?,
        Some(Host::Ipv6(addr)) => {
            return Err(UrlValidationError::NonPublicAddress(addr.to_string()));
        }
        Some(Host::Domain(domain)) => check_domain(domain)?,
    }

    if let Some(port) = url.port()
        && port < 10
    {
        return Err(UrlValidationError::InvalidPort(port));
    }

    Ok(())
}

/// Adapter for `#[validate(custom(...))]` on request DTOs.
pub fn validate_target_url(input: &str) -> Result<(), ValidationError> {
    check_target_url(input).map_err(|e| {
        let mut err = ValidationError::new("target_url");
        err.add_param("reason".into(), &e.to_string());
        err
    })
}

fn check_ipv4(addr: Ipv4Addr) -> Result<(), UrlValidationError> {
    let [first, .., last] = addr.octets();

    let reserved = addr.is_private()
        || addr.is_loopback()
        || addr.is_link_local()
        || addr.is_broadcast()
        || addr.is_multicast()
        || addr.is_unspecified();

    if reserved || !(1..=223).contains(&first) || !(1..=254).contains(&last) {
        return Err(UrlValidationError::NonPublicAddress(addr.to_string()));
    }

    Ok(())
}

fn check_domain(domain: &str) -> Result<(), UrlValidationError> {
    let invalid = || UrlValidationError::InvalidDomain(domain.to_string());

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(invalid());
    }

    if labels
        .iter()
        .any(|l| l.is_empty() || l.starts_with('-') || l.ends_with('-'))
    {
        return Err(invalid());
    }

    let tld = labels[labels.len() - 1];
    let alphabetic_tld = tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic());
    if !alphabetic_tld && !tld.starts_with("xn--") {
        return Err(invalid());
    }

    Ok(())
}
