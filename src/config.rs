//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export CREDENTIAL_SIGNING_SECRET="change-me"
//! export LISTEN="0.0.0.0:8080"
//! export PUBLIC_BASE_URL="https://sho.rt"
//! ```
//!
//! ## Required Variables
//!
//! - `CREDENTIAL_SIGNING_SECRET` - HMAC key for stored account secrets
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PUBLIC_BASE_URL` - Base for generated short URLs (default: derived from `Host`)
//! - `SHORTHAND_CODE_MAX_ATTEMPTS` - Code collision retries per registration (default: 10)

use anyhow::{Context, Result};
use std::env;

use crate::infrastructure::memory::DEFAULT_MAX_CODE_ATTEMPTS;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL that short codes are appended to. When unset, the request's
    /// `Host` header is used.
    pub public_base_url: Option<String>,
    /// Upper bound on code generation attempts for a single registration.
    pub code_max_attempts: usize,
    /// HMAC signing secret used to hash account secrets before storage.
    /// Loaded from `CREDENTIAL_SIGNING_SECRET`. Must be non-empty.
    pub credential_signing_secret: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `CREDENTIAL_SIGNING_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let public_base_url = env::var("PUBLIC_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let code_max_attempts = env::var("SHORTHAND_CODE_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_CODE_ATTEMPTS);

        let credential_signing_secret = env::var("CREDENTIAL_SIGNING_SECRET")
            .context("CREDENTIAL_SIGNING_SECRET must be set")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            public_base_url,
            code_max_attempts,
            credential_signing_secret,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `public_base_url` is not an `http(s)://` URL
    /// - `code_max_attempts` is outside 1..=100
    /// - `credential_signing_secret` is empty
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref base) = self.public_base_url
            && !base.starts_with("http://")
            && !base.starts_with("https://")
        {
            anyhow::bail!(
                "PUBLIC_BASE_URL must start with 'http://' or 'https://', got '{}'",
                base
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 100 {
            anyhow::bail!(
                "SHORTHAND_CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        if self.credential_signing_secret.is_empty() {
            anyhow::bail!("CREDENTIAL_SIGNING_SECRET must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        match &self.public_base_url {
            Some(base) => tracing::info!("  Public base URL: {}", base),
            None => tracing::info!("  Public base URL: from Host header"),
        }
        tracing::info!("  Code max attempts: {}", self.code_max_attempts);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            public_base_url: None,
            code_max_attempts: 10,
            credential_signing_secret: "test-secret".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:8080".to_string();

        // Test invalid base URL
        config.public_base_url = Some("sho.rt".to_string());
        assert!(config.validate().is_err());

        config.public_base_url = Some("https://sho.rt".to_string());
        assert!(config.validate().is_ok());

        // Test attempt bounds
        config.code_max_attempts = 0;
        assert!(config.validate().is_err());

        config.code_max_attempts = 101;
        assert!(config.validate().is_err());

        config.code_max_attempts = 10;

        // Test empty secret
        config.credential_signing_secret = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CREDENTIAL_SIGNING_SECRET", "from-env");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("PUBLIC_BASE_URL");
            env::remove_var("SHORTHAND_CODE_MAX_ATTEMPTS");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.public_base_url, None);
        assert_eq!(config.code_max_attempts, DEFAULT_MAX_CODE_ATTEMPTS);
        assert_eq!(config.credential_signing_secret, "from-env");

        // Cleanup
        unsafe {
            env::remove_var("CREDENTIAL_SIGNING_SECRET");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_requires_signing_secret() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("CREDENTIAL_SIGNING_SECRET");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CREDENTIAL_SIGNING_SECRET", "s");
            env::set_var("PUBLIC_BASE_URL", "https://sho.rt");
            env::set_var("SHORTHAND_CODE_MAX_ATTEMPTS", "25");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.public_base_url.as_deref(), Some("https://sho.rt"));
        assert_eq!(config.code_max_attempts, 25);

        // Blank base URL counts as unset
        unsafe {
            env::set_var("PUBLIC_BASE_URL", "  ");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.public_base_url, None);

        // Cleanup
        unsafe {
            env::remove_var("CREDENTIAL_SIGNING_SECRET");
            env::remove_var("PUBLIC_BASE_URL");
            env::remove_var("SHORTHAND_CODE_MAX_ATTEMPTS");
        }
    }
}
