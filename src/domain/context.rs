//! Auxiliary context fields appended to rendered prompts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::placeholder::is_blank;

pub const SESSION_TITLE: &str = "SESSION_TITLE";
pub const CODE_LANGUAGE: &str = "CODE_LANGUAGE";
pub const USER_ROLE: &str = "USER_ROLE";
pub const PROJECT_TYPE: &str = "PROJECT_TYPE";

/// Keys every context register carries, in display order.
pub const RECOGNIZED_KEYS: [&str; 4] = [SESSION_TITLE, CODE_LANGUAGE, USER_ROLE, PROJECT_TYPE];

const DEFAULT_SEED: [(&str, &str); 4] = [
    (SESSION_TITLE, "New Session"),
    (CODE_LANGUAGE, "JavaScript"),
    (USER_ROLE, "Developer"),
    (PROJECT_TYPE, "Web Application"),
];

/// Ordered key/value context. Extension keys beyond [`RECOGNIZED_KEYS`] are allowed
/// and keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextRegister(IndexMap<String, String>);

impl Default for ContextRegister {
    /// First-use seed with a non-empty value for each recognized key.
    fn default() -> Self {
        Self(DEFAULT_SEED.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }
}

impl ContextRegister {
    /// Recognized keys with empty values.
    pub fn empty() -> Self {
        Self(RECOGNIZED_KEYS.iter().map(|k| (k.to_string(), String::new())).collect())
    }

    /// Place the recognized keys first, in display order, adding any that a loaded
    /// register lacks. Extension keys keep their relative order after them.
    pub fn with_recognized_keys(mut self) -> Self {
        for (index, key) in RECOGNIZED_KEYS.into_iter().enumerate() {
            let value = self.0.shift_remove(key).unwrap_or_default();
            self.0.shift_insert(index, key.to_string(), value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Merge `partial` over the current entries.
    pub fn update<I, K, V>(&mut self, partial: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in partial {
            self.set(key, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `KEY: value` lines for non-blank entries, in insertion order.
    pub fn to_display_string(&self) -> String {
        self.0
            .iter()
            .filter(|(_, value)| !is_blank(value))
            .map(|(key, value)| format!("{}: {}", key, value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
