//! Shorthand registration, statistics and redirect resolution.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::{RedirectKind, Registration, Shorthand};
use crate::domain::repositories::ShorthandRepository;
use crate::error::AppError;

/// Service in front of the shorthand store.
///
/// Inputs are expected to be validated and the account authenticated by the
/// HTTP layer. The service adds logging and maps core errors into
/// [`AppError`].
pub struct ShorthandService<S: ShorthandRepository> {
    repository: Arc<S>,
}

impl<S: ShorthandRepository> ShorthandService<S> {
    /// Creates a new shorthand service.
    pub fn new(repository: Arc<S>) -> Self {
        Self { repository }
    }

    /// Registers `target_url` for `account_id`, reusing an earlier shorthand
    /// for the same URL.
    ///
    /// # Deduplication
    ///
    /// A repeated registration returns the original record unchanged. A
    /// different `redirect_kind` on the repeat call is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no unused code could be generated.
    pub async fn register(
        &self,
        account_id: &str,
        target_url: &str,
        redirect_kind: RedirectKind,
    ) -> Result<Shorthand, AppError> {
        info!("Creating shorthand for {}", target_url);

        let registration = self
            .repository
            .register(account_id, target_url, redirect_kind)
            .await?;

        match &registration {
            Registration::Created(s) => {
                info!("Shorthand {} for {} created", s.code, s.target_url);
            }
            Registration::Existing(s) => {
                info!("Shorthand {} exists for {}", s.code, s.target_url);
                if s.redirect_kind != redirect_kind {
                    debug!(
                        code = %s.code,
                        kept = ?s.redirect_kind,
                        requested = ?redirect_kind,
                        "Ignoring redirect kind on repeated registration"
                    );
                }
            }
        }

        Ok(registration.into_shorthand())
    }

    /// Returns every shorthand registered by `account_id`.
    pub async fn list(&self, account_id: &str) -> Vec<Shorthand> {
        self.repository.list_all(account_id).await
    }

    /// Returns hit counts keyed by target URL.
    ///
    /// Accounts without shorthands get an empty map.
    pub async fn statistics(&self, account_id: &str) -> BTreeMap<String, u64> {
        info!("Getting stats for {}", account_id);

        self.list(account_id)
            .await
            .into_iter()
            .map(|s| (s.target_url, s.hit_count))
            .collect()
    }

    /// Resolves a shorthand for redirecting and counts the hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`incorrect shorthand`) if the code is
    /// unknown for this account.
    pub async fn hit(&self, account_id: &str, code: &str) -> Result<Shorthand, AppError> {
        debug!("Incrementing hit count for {}", code);

        let shorthand = self.repository.hit(account_id, code).await?;

        info!("Redirect from {} to {}", code, shorthand.target_url);
        Ok(shorthand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ShorthandError;
    use crate::domain::repositories::MockShorthandRepository;
    use chrono::Utc;

    fn create_test_shorthand(code: &str, url: &str, kind: RedirectKind, hits: u64) -> Shorthand {
        Shorthand::new(code.to_string(), url.to_string(), kind, hits, Utc::now())
    }

    #[tokio::test]
    async fn test_register_created() {
        let mut mock_repo = MockShorthandRepository::new();

        let created = create_test_shorthand("abc123", "https://example.com", RedirectKind::Temporary, 0);
        mock_repo
            .expect_register()
            .withf(|account, url, kind| {
                account == "alice" && url == "https://example.com" && *kind == RedirectKind::Temporary
            })
            .times(1)
            .returning(move |_, _, _| Ok(Registration::Created(created.clone())));

        let service = ShorthandService::new(Arc::new(mock_repo));

        let shorthand = service
            .register("alice", "https://example.com", RedirectKind::Temporary)
            .await
            .unwrap();

        assert_eq!(shorthand.code, "abc123");
        assert_eq!(shorthand.hit_count, 0);
    }

    #[tokio::test]
    async fn test_register_existing_keeps_original_kind() {
        let mut mock_repo = MockShorthandRepository::new();

        let existing = create_test_shorthand("abc123", "https://example.com", RedirectKind::Temporary, 4);
        mock_repo
            .expect_register()
            .times(1)
            .returning(move |_, _, _| Ok(Registration::Existing(existing.clone())));

        let service = ShorthandService::new(Arc::new(mock_repo));

        let shorthand = service
            .register("alice", "https://example.com", RedirectKind::Permanent)
            .await
            .unwrap();

        assert_eq!(shorthand.code, "abc123");
        assert_eq!(shorthand.redirect_kind, RedirectKind::Temporary);
        assert_eq!(shorthand.hit_count, 4);
    }

    #[tokio::test]
    async fn test_register_code_space_exhausted() {
        let mut mock_repo = MockShorthandRepository::new();

        mock_repo
            .expect_register()
            .times(1)
            .returning(|_, _, _| Err(ShorthandError::CodeSpaceExhausted { attempts: 10 }));

        let service = ShorthandService::new(Arc::new(mock_repo));

        let result = service
            .register("alice", "https://example.com", RedirectKind::Temporary)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_statistics_projects_url_to_hits() {
        let mut mock_repo = MockShorthandRepository::new();

        let records = vec![
            create_test_shorthand("aaaaaa", "https://example.com/a", RedirectKind::Temporary, 3),
            create_test_shorthand("bbbbbb", "https://example.com/b", RedirectKind::Permanent, 0),
        ];
        mock_repo
            .expect_list_all()
            .withf(|account| account == "alice")
            .times(1)
            .returning(move |_| records.clone());

        let service = ShorthandService::new(Arc::new(mock_repo));

        let stats = service.statistics("alice").await;

        assert_eq!(stats.len(), 2);
        assert_eq!(stats["https://example.com/a"], 3);
        assert_eq!(stats["https://example.com/b"], 0);
    }

    #[tokio::test]
    async fn test_statistics_empty_account() {
        let mut mock_repo = MockShorthandRepository::new();
        mock_repo
            .expect_list_all()
            .times(1)
            .returning(|_| Vec::new());

        let service = ShorthandService::new(Arc::new(mock_repo));

        assert!(service.statistics("bob").await.is_empty());
    }

    #[tokio::test]
    async fn test_hit_success() {
        let mut mock_repo = MockShorthandRepository::new();

        let hit = create_test_shorthand("abc123", "https://example.com", RedirectKind::Permanent, 1);
        mock_repo
            .expect_hit()
            .withf(|account, code| account == "alice" && code == "abc123")
            .times(1)
            .returning(move |_, _| Ok(hit.clone()));

        let service = ShorthandService::new(Arc::new(mock_repo));

        let shorthand = service.hit("alice", "abc123").await.unwrap();
        assert_eq!(shorthand.hit_count, 1);
    }

    #[tokio::test]
    async fn test_hit_not_found() {
        let mut mock_repo = MockShorthandRepository::new();
        mock_repo
            .expect_hit()
            .times(1)
            .returning(|_, code| Err(ShorthandError::not_found(code)));

        let service = ShorthandService::new(Arc::new(mock_repo));

        let result = service.hit("alice", "doesnotexist").await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "incorrect shorthand");
    }
}
