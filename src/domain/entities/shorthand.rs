//! Shorthand entity representing a per-account alias for a long URL.

use chrono::{DateTime, Utc};

/// HTTP redirect semantics chosen when a shorthand is registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RedirectKind {
    /// `301 Moved Permanently`
    Permanent,
    /// `302 Found`
    #[default]
    Temporary,
}

impl RedirectKind {
    /// Returns the HTTP status code used for this redirect kind.
    pub fn status_code(self) -> u16 {
        match self {
            RedirectKind::Permanent => 301,
            RedirectKind::Temporary => 302,
        }
    }

    /// Maps an HTTP status code back to a redirect kind.
    ///
    /// Only `301` and `302` are accepted.
    pub fn from_status_code(code: u16) -> Option<Self> {
        match code {
            301 => Some(RedirectKind::Permanent),
            302 => Some(RedirectKind::Temporary),
            _ => None,
        }
    }
}

/// A registered shorthand as seen by callers.
///
/// This is a snapshot: `hit_count` reflects the counter at the moment the
/// record was read and does not change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shorthand {
    pub code: String,
    pub target_url: String,
    pub redirect_kind: RedirectKind,
    pub hit_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Shorthand {
    /// Creates a new Shorthand instance.
    pub fn new(
        code: String,
        target_url: String,
        redirect_kind: RedirectKind,
        hit_count: u64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            target_url,
            redirect_kind,
            hit_count,
            created_at,
        }
    }
}

/// Outcome of a registration.
///
/// Registration is idempotent per `(account, target_url)`; the variant tells
/// whether this call created the record or found an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
    Created(Shorthand),
    Existing(Shorthand),
}

impl Registration {
    /// Returns true if this call created the record.
    pub fn is_created(&self) -> bool {
        matches!(self, Registration::Created(_))
    }

    pub fn shorthand(&self) -> &Shorthand {
        match self {
            Registration::Created(s) | Registration::Existing(s) => s,
        }
    }

    pub fn into_shorthand(self) -> Shorthand {
        match self {
            Registration::Created(s) | Registration::Existing(s) => s,
        }
    }
}
