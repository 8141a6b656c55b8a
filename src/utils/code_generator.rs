//! Short code and secret generation.
//!
//! Codes and secrets are drawn uniformly from the 62-character alphanumeric
//! alphabet `[A-Za-z0-9]`.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated shorthand codes.
pub const CODE_LENGTH: usize = 6;

/// Length of generated account secrets.
pub const PASSWORD_LENGTH: usize = 8;

/// Top-level paths served by fixed routes; a code equal to one of these
/// could never be redirected.
pub const RESERVED_CODES: &[&str] = &["account", "health", "help", "register", "statistic"];

/// Source of candidate shorthand codes.
///
/// Implementations are pure generators: they never look at storage and do not
/// guarantee uniqueness. Collision handling belongs to the store.
pub trait CodeGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Uniform random alphanumeric code generator.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        loop {
            let code = generate_alphanumeric(self.length);
            if !RESERVED_CODES.contains(&code.as_str()) {
                return code;
            }
        }
    }
}

/// Generates a random alphanumeric string of `len` characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_alphanumeric(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generates the secret handed out when an account is opened.
pub fn generate_password() -> String {
    generate_alphanumeric(PASSWORD_LENGTH)
}
