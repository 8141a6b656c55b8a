//! Account entity and the credentials handed out when an account is opened.

use chrono::{DateTime, Utc};

/// An opened account.
///
/// The secret is never kept in clear text; `password_hash` holds its
/// HMAC-SHA256 digest.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new Account instance.
    pub fn new(id: String, password_hash: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            password_hash,
            created_at,
        }
    }
}

/// Clear-text credentials returned exactly once, when the account is opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: String,
    pub password: String,
}
