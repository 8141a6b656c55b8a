//! Account opening and HTTP Basic credential verification.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::entities::Credentials;
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_password;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

const DUPLICATE_ACCOUNT: &str = "Account with that ID already exists";

/// Service for opening accounts and authenticating them.
///
/// Secrets are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage; the clear-text secret is only ever returned by
/// [`open_account`](Self::open_account).
pub struct AccountService<R: AccountRepository> {
    repository: Arc<R>,
    signing_secret: String,
}

impl<R: AccountRepository> AccountService<R> {
    /// Creates a new account service.
    ///
    /// # Arguments
    ///
    /// - `repository` - account directory
    /// - `signing_secret` - HMAC key applied to every stored secret
    pub fn new(repository: Arc<R>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length")
    }

    /// Hashes a secret with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_password(&self, password: &str) -> String {
        let mut mac = self.mac();
        mac.update(password.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Opens an account and returns its freshly generated 8-character secret.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the account already exists,
    /// including when a concurrent request opened it first.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn open_account(&self, account_id: &str) -> Result<Credentials, AppError> {
        info!("Creating account for {}", account_id);

        if self.repository.exists(account_id).await? {
            info!("Account for {} already exists", account_id);
            return Err(duplicate_account(account_id));
        }

        let password = generate_password();
        let password_hash = self.hash_password(&password);

        self.repository
            .create(account_id, password_hash)
            .await
            .map_err(|e| match e {
                AppError::Conflict { .. } => duplicate_account(account_id),
                other => other,
            })?;

        info!("Account for {} created", account_id);

        Ok(Credentials {
            account_id: account_id.to_string(),
            password,
        })
    }

    /// Number of opened accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn account_count(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }

    /// Verifies an account id and secret pair.
    ///
    /// The digest comparison runs in constant time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the account is unknown or the
    /// secret does not match.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn authenticate(&self, account_id: &str, password: &str) -> Result<(), AppError> {
        let unauthorized = || {
            AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid account or password" }),
            )
        };

        let Some(account) = self.repository.find_by_id(account_id).await? else {
            warn!("Authentication failed for unknown account {}", account_id);
            return Err(unauthorized());
        };

        let stored = hex::decode(&account.password_hash).map_err(|_| {
            AppError::internal("Corrupted credential digest", json!({ "account_id": account_id }))
        })?;

        let mut mac = self.mac();
        mac.update(password.as_bytes());

        if mac.verify_slice(&stored).is_err() {
            warn!("Authentication failed for {}", account_id);
            return Err(unauthorized());
        }

        Ok(())
    }
}

fn duplicate_account(account_id: &str) -> AppError {
    AppError::bad_request(DUPLICATE_ACCOUNT, json!({ "account_id": account_id }))
}
