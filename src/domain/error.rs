use std::io;

use thiserror::Error;

/// Library-wide error type for prompt-builder operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Completion provider credential is missing.
    #[error("{0} is not configured. Export it to enable auto-fill.")]
    NotConfigured(String),

    /// Provider answered without a parseable JSON object.
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),

    /// A stored blob could not be decoded.
    #[error("Failed to read stored '{key}': {details}")]
    PersistenceRead { key: String, details: String },

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Completion API request failed.
    #[error("Completion API error: {message}")]
    CompletionApi { message: String, status: Option<u16> },

    /// No saved template matches the given id or name.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template name is empty.
    #[error("Template name must not be empty")]
    InvalidTemplateName,

    /// `KEY=VALUE` argument could not be parsed.
    #[error("Invalid assignment '{0}': expected KEY=VALUE")]
    InvalidAssignment(String),

    /// An auto-fill request is already pending for this session.
    #[error("Auto-fill is already in progress")]
    AutofillInProgress,
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
