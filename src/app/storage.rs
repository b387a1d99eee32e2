//! Persisted records on top of the [`KeyValueStore`] port.
//!
//! Three keys are used: the saved template list (JSON array), the context register
//! (JSON object) and the raw current editing buffer. Unreadable JSON never fails a
//! read; it is logged and replaced by the empty/default value.

use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::domain::{AppError, ContextRegister, SavedTemplate};
use crate::ports::KeyValueStore;

pub const PROMPTS_KEY: &str = "prompt_builder_prompts";
pub const CONTEXT_KEY: &str = "prompt_builder_context";
pub const CURRENT_PROMPT_KEY: &str = "prompt_builder_current_prompt";

const ALL_KEYS: [&str; 3] = [PROMPTS_KEY, CONTEXT_KEY, CURRENT_PROMPT_KEY];

/// Decode the JSON blob under `key`, `Ok(None)` when absent.
fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>, AppError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| AppError::PersistenceRead { key: key.to_string(), details: e.to_string() })
}

/// Like [`read_json`], but a corrupt blob degrades to `None` with a warning.
fn read_json_lenient<S, T>(store: &S, key: &str) -> Result<Option<T>, AppError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match read_json(store, key) {
        Err(err @ AppError::PersistenceRead { .. }) => {
            log::warn!("{}; falling back to defaults", err);
            Ok(None)
        }
        other => other,
    }
}

fn write_json<S, T>(store: &S, key: &str, value: &T) -> Result<(), AppError>
where
    S: KeyValueStore + ?Sized,
    T: serde::Serialize,
{
    let raw = serde_json::to_string(value)
        .map_err(|e| AppError::config_error(format!("Failed to serialize {}: {}", key, e)))?;
    store.set(key, &raw)
}

/// CRUD over saved template records.
pub struct TemplateRepository<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> TemplateRepository<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// All records, in stored order.
    pub fn list(&self) -> Result<Vec<SavedTemplate>, AppError> {
        Ok(read_json_lenient(self.store, PROMPTS_KEY)?.unwrap_or_default())
    }

    /// Insert or replace the record with the same id.
    ///
    /// `updated_at` is set to now on every call. Replacing keeps the stored
    /// `created_at`.
    pub fn save(&self, mut record: SavedTemplate) -> Result<SavedTemplate, AppError> {
        let mut records = self.list()?;
        record.updated_at = Utc::now();

        match records.iter_mut().find(|existing| existing.id == record.id) {
            Some(existing) => {
                record.created_at = existing.created_at;
                *existing = record.clone();
            }
            None => records.push(record.clone()),
        }

        write_json(self.store, PROMPTS_KEY, &records)?;
        log::info!("Saved template '{}' ({})", record.name, record.id);
        Ok(record)
    }

    pub fn load(&self, id: &str) -> Result<Option<SavedTemplate>, AppError> {
        Ok(self.list()?.into_iter().find(|record| record.id == id))
    }

    /// Look a record up by exact id, then by exact name.
    pub fn find(&self, query: &str) -> Result<Option<SavedTemplate>, AppError> {
        let records = self.list()?;
        let by_id = records.iter().position(|record| record.id == query);
        let index = by_id.or_else(|| records.iter().position(|record| record.name == query));
        Ok(index.map(|i| records[i].clone()))
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    ///
    /// Returns whether a record was removed.
    pub fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut records = self.list()?;
        let before = records.len();
        records.retain(|record| record.id != id);
        write_json(self.store, PROMPTS_KEY, &records)?;
        Ok(records.len() != before)
    }
}

/// Persistence for the context register and the current editing buffer.
pub struct SessionStore<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> SessionStore<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Stored context, or the default seed when absent or unreadable.
    pub fn load_context(&self) -> Result<ContextRegister, AppError> {
        Ok(read_json_lenient::<_, ContextRegister>(self.store, CONTEXT_KEY)?
            .map(ContextRegister::with_recognized_keys)
            .unwrap_or_default())
    }

    pub fn save_context(&self, context: &ContextRegister) -> Result<(), AppError> {
        write_json(self.store, CONTEXT_KEY, context)
    }

    /// Current editing buffer; empty when never saved.
    pub fn load_current(&self) -> Result<String, AppError> {
        Ok(self.store.get(CURRENT_PROMPT_KEY)?.unwrap_or_default())
    }

    pub fn save_current(&self, content: &str) -> Result<(), AppError> {
        self.store.set(CURRENT_PROMPT_KEY, content)
    }

    /// Remove every stored record, including saved templates.
    pub fn clear_all(&self) -> Result<(), AppError> {
        for key in ALL_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }
}
