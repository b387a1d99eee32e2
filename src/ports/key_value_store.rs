use crate::domain::AppError;

/// Port for the local key-value blob store backing all persisted records.
///
/// Keys are short identifiers; values are opaque strings (JSON or raw text).
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}
