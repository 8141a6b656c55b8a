//! Repository trait for account and credential storage.

use crate::domain::entities::Account;
use crate::error::AppError;
use async_trait::async_trait;

/// Directory of opened accounts.
///
/// Stores only credential digests; hashing happens in
/// [`crate::application::services::AccountService`].
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryAccountDirectory`] - process-local directory
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Returns `true` if an account with this id has been opened.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn exists(&self, account_id: &str) -> Result<bool, AppError>;

    /// Opens a new account with the given secret digest.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the account already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, account_id: &str, password_hash: String) -> Result<Account, AppError>;

    /// Finds an account by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, account_id: &str) -> Result<Option<Account>, AppError>;

    /// Counts opened accounts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<usize, AppError>;
}
