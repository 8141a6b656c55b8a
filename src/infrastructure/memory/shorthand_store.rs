//! Process-local implementation of the shorthand repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

use super::namespace::AccountNamespace;
use crate::domain::entities::{RedirectKind, Registration, Shorthand};
use crate::domain::error::{ShorthandError, ShorthandResult};
use crate::domain::repositories::ShorthandRepository;
use crate::utils::code_generator::{CodeGenerator, RandomCodeGenerator};

/// Default bound on code generation attempts per registration.
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 10;

type NamespaceHandle = Arc<RwLock<AccountNamespace>>;

/// In-memory shorthand store.
///
/// Every account owns one [`AccountNamespace`] behind its own `RwLock`.
/// The account map itself is a `DashMap`, used only to fetch or create the
/// namespace handle, so operations on different accounts never wait on the
/// same lock.
///
/// - `register` holds the namespace write lock across the URL check, code
///   generation and insert.
/// - `resolve`, `hit` and `list_all` take the read lock; `hit` increments an
///   atomic counter, so concurrent hits on one record are never lost.
pub struct InMemoryShorthandStore {
    namespaces: DashMap<String, NamespaceHandle>,
    generator: Arc<dyn CodeGenerator>,
    max_attempts: usize,
}

impl InMemoryShorthandStore {
    /// Creates a store using random 6-character codes.
    pub fn new() -> Self {
        Self::with_generator(
            Arc::new(RandomCodeGenerator::default()),
            DEFAULT_MAX_CODE_ATTEMPTS,
        )
    }

    /// Creates a store with a custom code source and attempt bound.
    ///
    /// `max_attempts` is clamped to at least one.
    pub fn with_generator(generator: Arc<dyn CodeGenerator>, max_attempts: usize) -> Self {
        Self {
            namespaces: DashMap::new(),
            generator,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Number of accounts that registered at least one shorthand.
    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }

    /// Total number of shorthands across all accounts.
    pub fn shorthand_count(&self) -> usize {
        self.namespaces
            .iter()
            .map(|ns| ns.value().read().len())
            .sum()
    }

    fn namespace(&self, account_id: &str) -> Option<NamespaceHandle> {
        self.namespaces
            .get(account_id)
            .map(|ns| Arc::clone(ns.value()))
    }

    fn namespace_or_create(&self, account_id: &str) -> NamespaceHandle {
        if let Some(ns) = self.namespace(account_id) {
            return ns;
        }
        let ns = self.namespaces.entry(account_id.to_owned()).or_default();
        Arc::clone(ns.value())
    }

    fn unused_code(&self, namespace: &AccountNamespace) -> ShorthandResult<String> {
        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate();
            if !namespace.contains_code(&code) {
                return Ok(code);
            }
            debug!(attempt, code = %code, "Shorthand code collision, regenerating");
        }

        Err(ShorthandError::CodeSpaceExhausted {
            attempts: self.max_attempts,
        })
    }
}

impl Default for InMemoryShorthandStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ShorthandRepository for InMemoryShorthandStore {
    async fn register(
        &self,
        account_id: &str,
        target_url: &str,
        redirect_kind: RedirectKind,
    ) -> ShorthandResult<Registration> {
        let handle = self.namespace_or_create(account_id);
        let mut namespace = handle.write();

        if let Some(existing) = namespace.find_by_url(target_url) {
            return Ok(Registration::Existing(existing));
        }

        let code = self.unused_code(&namespace)?;
        let created = namespace.insert(code, target_url.to_owned(), redirect_kind, Utc::now());

        Ok(Registration::Created(created))
    }

    async fn list_all(&self, account_id: &str) -> Vec<Shorthand> {
        match self.namespace(account_id) {
            Some(handle) => handle.read().snapshot_all(),
            None => Vec::new(),
        }
    }

    async fn resolve(&self, account_id: &str, code: &str) -> ShorthandResult<Shorthand> {
        self.namespace(account_id)
            .and_then(|handle| handle.read().find_by_code(code))
            .ok_or_else(|| ShorthandError::not_found(code))
    }

    async fn hit(&self, account_id: &str, code: &str) -> ShorthandResult<Shorthand> {
        self.namespace(account_id)
            .and_then(|handle| handle.read().record_hit(code))
            .ok_or_else(|| ShorthandError::not_found(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::collections::VecDeque;

    /// Replays a fixed list of codes, then repeats the last one.
    struct ScriptedGenerator {
        codes: Mutex<VecDeque<String>>,
        last: String,
    }

    impl ScriptedGenerator {
        fn new(codes: &[&str]) -> Self {
            Self {
                codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
                last: codes.last().map(|c| c.to_string()).unwrap_or_default(),
            }
        }
    }

    impl CodeGenerator for ScriptedGenerator {
        fn generate(&self) -> String {
            self.codes
                .lock()
                .pop_front()
                .unwrap_or_else(|| self.last.clone())
        }
    }

    #[tokio::test]
    async fn test_register_creates_fresh_record() {
        let store = InMemoryShorthandStore::new();

        let registration = store
            .register("alice", "https://example.com/a", RedirectKind::Temporary)
            .await
            .unwrap();

        assert!(registration.is_created());
        let shorthand = registration.into_shorthand();
        assert_eq!(shorthand.code.len(), 6);
        assert_eq!(shorthand.hit_count, 0);
        assert_eq!(shorthand.redirect_kind, RedirectKind::Temporary);
    }

    #[tokio::test]
    async fn test_register_retries_on_collision() {
        let generator = Arc::new(ScriptedGenerator::new(&["AAAAAA", "AAAAAA", "BBBBBB"]));
        let store = InMemoryShorthandStore::with_generator(generator, 5);

        let first = store
            .register("alice", "https://example.com/1", RedirectKind::Temporary)
            .await
            .unwrap();
        let second = store
            .register("alice", "https://example.com/2", RedirectKind::Temporary)
            .await
            .unwrap();

        assert_eq!(first.shorthand().code, "AAAAAA");
        assert_eq!(second.shorthand().code, "BBBBBB");
    }

    #[tokio::test]
    async fn test_register_same_code_in_other_account_is_not_a_collision() {
        let generator = Arc::new(ScriptedGenerator::new(&["AAAAAA"]));
        let store = InMemoryShorthandStore::with_generator(generator, 1);

        let alice = store
            .register("alice", "https://example.com", RedirectKind::Temporary)
            .await
            .unwrap();
        let bob = store
            .register("bob", "https://example.com", RedirectKind::Temporary)
            .await
            .unwrap();

        assert_eq!(alice.shorthand().code, "AAAAAA");
        assert_eq!(bob.shorthand().code, "AAAAAA");
    }

    #[tokio::test]
    async fn test_register_exhausts_attempts() {
        let generator = Arc::new(ScriptedGenerator::new(&["AAAAAA"]));
        let store = InMemoryShorthandStore::with_generator(generator, 3);

        store
            .register("alice", "https://example.com/1", RedirectKind::Temporary)
            .await
            .unwrap();

        let result = store
            .register("alice", "https://example.com/2", RedirectKind::Temporary)
            .await;

        assert_eq!(
            result.unwrap_err(),
            ShorthandError::CodeSpaceExhausted { attempts: 3 }
        );
        assert_eq!(store.list_all("alice").await.len(), 1);
    }

    #[tokio::test]
    async fn test_max_attempts_clamped_to_one() {
        let generator = Arc::new(ScriptedGenerator::new(&["AAAAAA"]));
        let store = InMemoryShorthandStore::with_generator(generator, 0);

        let result = store
            .register("alice", "https://example.com", RedirectKind::Temporary)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_resolve_does_not_count() {
        let store = InMemoryShorthandStore::new();
        let code = store
            .register("alice", "https://example.com", RedirectKind::Permanent)
            .await
            .unwrap()
            .into_shorthand()
            .code;

        let resolved = store.resolve("alice", &code).await.unwrap();
        assert_eq!(resolved.hit_count, 0);
        assert_eq!(resolved.target_url, "https://example.com");
        assert_eq!(store.resolve("alice", &code).await.unwrap().hit_count, 0);
    }

    #[tokio::test]
    async fn test_resolve_unknown_account() {
        let store = InMemoryShorthandStore::new();

        let result = store.resolve("nobody", "abc123").await;

        assert_eq!(result.unwrap_err(), ShorthandError::not_found("abc123"));
    }

    #[tokio::test]
    async fn test_counts() {
        let store = InMemoryShorthandStore::new();
        assert_eq!(store.namespace_count(), 0);

        store
            .register("alice", "https://example.com/a", RedirectKind::Temporary)
            .await
            .unwrap();
        store
            .register("alice", "https://example.com/b", RedirectKind::Temporary)
            .await
            .unwrap();
        store
            .register("bob", "https://example.com/a", RedirectKind::Temporary)
            .await
            .unwrap();

        assert_eq!(store.namespace_count(), 2);
        assert_eq!(store.shorthand_count(), 3);
    }

    #[tokio::test]
    async fn test_lookups_do_not_create_namespaces() {
        let store = InMemoryShorthandStore::new();

        let _ = store.hit("ghost", "abc123").await;
        let _ = store.resolve("ghost", "abc123").await;
        assert!(store.list_all("ghost").await.is_empty());

        assert_eq!(store.namespace_count(), 0);
    }
}
