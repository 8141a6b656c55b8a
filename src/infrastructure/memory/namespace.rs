//! Per-account shorthand collection.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::entities::{RedirectKind, Shorthand};

/// Stored shorthand record.
///
/// Everything but the counter is immutable once inserted, so hits only need
/// shared access to the namespace.
#[derive(Debug)]
struct Entry {
    target_url: String,
    redirect_kind: RedirectKind,
    created_at: DateTime<Utc>,
    hits: AtomicU64,
}

/// All shorthands of one account, indexed by code and by target URL.
///
/// Both indexes are updated by the single [`insert`](Self::insert) path. The
/// owning store wraps each namespace in a lock, so readers never observe one
/// index without the other.
#[derive(Debug, Default)]
pub(crate) struct AccountNamespace {
    by_code: HashMap<String, Entry>,
    by_url: HashMap<String, String>,
}

impl AccountNamespace {
    pub(crate) fn contains_code(&self, code: &str) -> bool {
        self.by_code.contains_key(code)
    }

    pub(crate) fn find_by_url(&self, target_url: &str) -> Option<Shorthand> {
        let code = self.by_url.get(target_url)?;
        self.find_by_code(code)
    }

    pub(crate) fn find_by_code(&self, code: &str) -> Option<Shorthand> {
        self.by_code
            .get(code)
            .map(|entry| snapshot(code, entry, entry.hits.load(Ordering::Acquire)))
    }

    /// Increments the counter of `code` and returns the post-increment record.
    pub(crate) fn record_hit(&self, code: &str) -> Option<Shorthand> {
        let entry = self.by_code.get(code)?;
        let hits = entry.hits.fetch_add(1, Ordering::AcqRel) + 1;
        Some(snapshot(code, entry, hits))
    }

    /// Inserts a fresh record with a zero counter.
    ///
    /// Callers must have checked that neither `code` nor `target_url` is
    /// present; both indexes are written together.
    pub(crate) fn insert(
        &mut self,
        code: String,
        target_url: String,
        redirect_kind: RedirectKind,
        created_at: DateTime<Utc>,
    ) -> Shorthand {
        debug_assert!(!self.by_code.contains_key(&code));
        debug_assert!(!self.by_url.contains_key(&target_url));

        let entry = Entry {
            target_url: target_url.clone(),
            redirect_kind,
            created_at,
            hits: AtomicU64::new(0),
        };
        let shorthand = snapshot(&code, &entry, 0);

        self.by_url.insert(target_url, code.clone());
        self.by_code.insert(code, entry);

        shorthand
    }

    pub(crate) fn snapshot_all(&self) -> Vec<Shorthand> {
        self.by_code
            .iter()
            .map(|(code, entry)| snapshot(code, entry, entry.hits.load(Ordering::Acquire)))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.by_code.len()
    }
}

fn snapshot(code: &str, entry: &Entry, hits: u64) -> Shorthand {
    Shorthand::new(
        code.to_string(),
        entry.target_url.clone(),
        entry.redirect_kind,
        hits,
        entry.created_at,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace_with(code: &str, url: &str) -> AccountNamespace {
        let mut ns = AccountNamespace::default();
        ns.insert(
            code.to_string(),
            url.to_string(),
            RedirectKind::Permanent,
            Utc::now(),
        );
        ns
    }

    #[test]
    fn test_insert_updates_both_indexes() {
        let ns = namespace_with("abc123", "https://example.com");

        assert!(ns.contains_code("abc123"));
        assert_eq!(ns.find_by_url("https://example.com").unwrap().code, "abc123");
        assert_eq!(
            ns.find_by_code("abc123").unwrap().target_url,
            "https://example.com"
        );
        assert_eq!(ns.len(), 1);
    }

    #[test]
    fn test_insert_starts_at_zero_hits() {
        let mut ns = AccountNamespace::default();
        let created = ns.insert(
            "abc123".to_string(),
            "https://example.com".to_string(),
            RedirectKind::Temporary,
            Utc::now(),
        );

        assert_eq!(created.hit_count, 0);
        assert_eq!(created.redirect_kind, RedirectKind::Temporary);
    }

    #[test]
    fn test_record_hit_increments() {
        let ns = namespace_with("abc123", "https://example.com");

        assert_eq!(ns.record_hit("abc123").unwrap().hit_count, 1);
        assert_eq!(ns.record_hit("abc123").unwrap().hit_count, 2);
        assert_eq!(ns.find_by_code("abc123").unwrap().hit_count, 2);
    }

    #[test]
    fn test_unknown_code() {
        let ns = namespace_with("abc123", "https://example.com");

        assert!(ns.find_by_code("zzz999").is_none());
        assert!(ns.record_hit("zzz999").is_none());
        assert!(ns.find_by_url("https://other.com").is_none());
    }

    #[test]
    fn test_snapshot_all() {
        let mut ns = namespace_with("abc123", "https://example.com/a");
        ns.insert(
            "def456".to_string(),
            "https://example.com/b".to_string(),
            RedirectKind::Temporary,
            Utc::now(),
        );
        ns.record_hit("def456");

        let mut all = ns.snapshot_all();
        all.sort_by(|a, b| a.code.cmp(&b.code));

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].hit_count, 0);
        assert_eq!(all[1].hit_count, 1);
    }
}
