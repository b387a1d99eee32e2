//! Saved template records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AppError;
use super::placeholder::extract;

const PREVIEW_CHARS: usize = 50;

/// A named template persisted by the template repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTemplate {
    /// Opaque unique identifier.
    pub id: String,
    pub name: String,
    pub content: String,
    /// Placeholder names found in `content` when the record was created.
    #[serde(default)]
    pub variables: Vec<String>,
    /// Free-form note attached to the record.
    #[serde(default)]
    pub context: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedTemplate {
    /// Build a new record with a fresh id.
    pub fn new(name: &str, content: &str) -> Result<Self, AppError> {
        Self::with_id(generate_id(), name, content)
    }

    /// Build a record for a caller-chosen id.
    pub fn with_id(id: String, name: &str, content: &str) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidTemplateName);
        }

        let now = Utc::now();
        Ok(Self {
            id,
            name: name.to_string(),
            content: content.to_string(),
            variables: extract(content),
            context: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// First characters of the content, for listings.
    pub fn preview(&self) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
        if chars.next().is_some() { format!("{}...", head) } else { head }
    }
}

/// Generate an opaque record identifier.
pub fn generate_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Human-readable timestamp such as `Oct 19, 2026, 09:05 AM`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %I:%M %p").to_string()
}
