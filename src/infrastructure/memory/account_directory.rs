//! Process-local implementation of the account repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// In-memory account directory keyed by account id.
///
/// Opening an account uses the map's entry API, so two concurrent requests
/// for the same id cannot both succeed.
#[derive(Debug, Default)]
pub struct InMemoryAccountDirectory {
    accounts: DashMap<String, Account>,
}

impl InMemoryAccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountDirectory {
    async fn exists(&self, account_id: &str) -> Result<bool, AppError> {
        Ok(self.accounts.contains_key(account_id))
    }

    async fn create(&self, account_id: &str, password_hash: String) -> Result<Account, AppError> {
        match self.accounts.entry(account_id.to_owned()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Account with that ID already exists",
                json!({ "account_id": account_id }),
            )),
            Entry::Vacant(slot) => {
                let account = Account::new(account_id.to_owned(), password_hash, Utc::now());
                slot.insert(account.clone());
                Ok(account)
            }
        }
    }

    async fn find_by_id(&self, account_id: &str) -> Result<Option<Account>, AppError> {
        Ok(self.accounts.get(account_id).map(|a| a.value().clone()))
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find() {
        let directory = InMemoryAccountDirectory::new();

        let account = directory
            .create("alice", "hash".to_string())
            .await
            .unwrap();
        assert_eq!(account.id, "alice");

        assert!(directory.exists("alice").await.unwrap());
        let found = directory.find_by_id("alice").await.unwrap().unwrap();
        assert_eq!(found.password_hash, "hash");
        assert_eq!(directory.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let directory = InMemoryAccountDirectory::new();
        directory.create("alice", "one".to_string()).await.unwrap();

        let result = directory.create("alice", "two".to_string()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
        let kept = directory.find_by_id("alice").await.unwrap().unwrap();
        assert_eq!(kept.password_hash, "one");
    }

    #[tokio::test]
    async fn test_unknown_account() {
        let directory = InMemoryAccountDirectory::new();

        assert!(!directory.exists("ghost").await.unwrap());
        assert!(directory.find_by_id("ghost").await.unwrap().is_none());
        assert_eq!(directory.count().await.unwrap(), 0);
    }
}
