//! Repository trait for per-account shorthand bookkeeping.

use crate::domain::entities::{RedirectKind, Registration, Shorthand};
use crate::domain::error::ShorthandResult;
use async_trait::async_trait;

/// Store owning every account namespace and its shorthands.
///
/// Implementations are the only mutators of shorthand records and must
/// uphold, under concurrent use:
///
/// - at most one record per `(account, target_url)`
/// - codes unique within an account
/// - hit counters that only grow, by exactly one per [`hit`](Self::hit)
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryShorthandStore`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShorthandRepository: Send + Sync {
    /// Registers `target_url` for `account_id`.
    ///
    /// If the URL is already registered for this account, the existing record
    /// is returned unchanged as [`Registration::Existing`] and `redirect_kind`
    /// is ignored. Otherwise a fresh code is generated, retrying on collision
    /// within the account's namespace, and [`Registration::Created`] is
    /// returned with `hit_count == 0`. The namespace is created if absent.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::error::ShorthandError::CodeSpaceExhausted`] if
    /// no unused code was produced within the configured attempts.
    async fn register(
        &self,
        account_id: &str,
        target_url: &str,
        redirect_kind: RedirectKind,
    ) -> ShorthandResult<Registration>;

    /// Lists every shorthand of an account, in no particular order.
    ///
    /// Returns an empty list for accounts that never registered anything.
    async fn list_all(&self, account_id: &str) -> Vec<Shorthand>;

    /// Looks up a shorthand by code without touching its counter.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::error::ShorthandError::NotFound`] if the account
    /// has no namespace or no record with this code.
    async fn resolve(&self, account_id: &str, code: &str) -> ShorthandResult<Shorthand>;

    /// Looks up a shorthand by code and increments its hit counter atomically.
    ///
    /// Returns the post-increment snapshot.
    ///
    /// # Errors
    ///
    /// Same as [`resolve`](Self::resolve).
    async fn hit(&self, account_id: &str, code: &str) -> ShorthandResult<Shorthand>;
}
