//! Errors raised by the shorthand bookkeeping core.

use thiserror::Error;

/// Failures of shorthand store operations.
///
/// Lookups only ever fail with [`ShorthandError::NotFound`]; an unknown
/// account and an unknown code are deliberately indistinguishable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShorthandError {
    #[error("shorthand not found: {code}")]
    NotFound { code: String },

    #[error("no unused shorthand code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: usize },
}

impl ShorthandError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }
}

pub type ShorthandResult<T> = Result<T, ShorthandError>;
