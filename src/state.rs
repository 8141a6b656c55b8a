//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AccountService, ShorthandService};
use crate::config::Config;
use crate::infrastructure::memory::{InMemoryAccountDirectory, InMemoryShorthandStore};
use crate::utils::code_generator::RandomCodeGenerator;

pub type AppShorthandService = ShorthandService<InMemoryShorthandStore>;
pub type AppAccountService = AccountService<InMemoryAccountDirectory>;

#[derive(Clone)]
pub struct AppState {
    pub shorthand_service: Arc<AppShorthandService>,
    pub account_service: Arc<AppAccountService>,
    /// Kept for health reporting; all mutations go through `shorthand_service`.
    pub shorthand_store: Arc<InMemoryShorthandStore>,
    pub public_base_url: Option<String>,
}

impl AppState {
    /// Wires services over fresh in-memory stores.
    pub fn in_memory(
        signing_secret: String,
        public_base_url: Option<String>,
        code_max_attempts: usize,
    ) -> Self {
        let shorthand_store = Arc::new(InMemoryShorthandStore::with_generator(
            Arc::new(RandomCodeGenerator::default()),
            code_max_attempts,
        ));
        let account_directory = Arc::new(InMemoryAccountDirectory::new());

        Self {
            shorthand_service: Arc::new(ShorthandService::new(shorthand_store.clone())),
            account_service: Arc::new(AccountService::new(account_directory, signing_secret)),
            shorthand_store,
            public_base_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::in_memory(
            config.credential_signing_secret.clone(),
            config.public_base_url.clone(),
            config.code_max_attempts,
        )
    }
}
