use std::sync::Arc;
use crate::config::Config;
use crate::services::{CredentialStore, RecipeClient};

// Application state that can be shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub credentials: CredentialStore,
    pub recipes: RecipeClient,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            credentials: CredentialStore::new(&config.credentials.path),
            recipes: RecipeClient::new(&config.recipe),
            config: Arc::new(config),
        }
    }
}
