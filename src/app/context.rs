use crate::app::storage::{SessionStore, TemplateRepository};
use crate::domain::AppConfig;
use crate::ports::KeyValueStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<S: KeyValueStore> {
    config: AppConfig,
    store: S,
}

impl<S: KeyValueStore> AppContext<S> {
    /// Create a new application context.
    pub fn new(config: AppConfig, store: S) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get a reference to the key-value store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn templates(&self) -> TemplateRepository<'_, S> {
        TemplateRepository::new(&self.store)
    }

    pub fn session_store(&self) -> SessionStore<'_, S> {
        SessionStore::new(&self.store)
    }
}
