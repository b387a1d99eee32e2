//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{ArboardClipboardWriter, FileKeyValueStore, HttpGeminiClient};
use crate::app::assistant::CompletionAssistant;
use crate::app::commands::{clear, context, edit, render, templates};
use crate::app::config::{load_config, resolve_root};
use crate::app::AppContext;
use crate::domain::{CompletionConfig, ContextRegister, SavedTemplate};

pub use crate::app::commands::render::{RenderOptions, RenderOutcome, ValuePrompt};
pub use crate::domain::AppError;

/// Create an `AppContext` for the resolved root directory.
pub fn create_context() -> Result<AppContext<FileKeyValueStore>, AppError> {
    create_context_at(resolve_root()?)
}

/// Create an `AppContext` rooted at `root`.
pub fn create_context_at(
    root: impl Into<PathBuf>,
) -> Result<AppContext<FileKeyValueStore>, AppError> {
    let root = root.into();
    let config = load_config(&root)?;
    let store = FileKeyValueStore::new(root.join(&config.storage.dir));
    Ok(AppContext::new(config, store))
}

/// Build the Gemini-backed assistant; fails before any network access without a key.
pub fn completion_assistant(
    config: &CompletionConfig,
) -> Result<CompletionAssistant<HttpGeminiClient>, AppError> {
    Ok(CompletionAssistant::new(HttpGeminiClient::from_env_with_config(config)?))
}

/// Replace the current template buffer. Returns detected placeholder names.
pub fn edit(content: &str) -> Result<Vec<String>, AppError> {
    edit::execute(&create_context()?, content)
}

/// Current template buffer.
pub fn show() -> Result<String, AppError> {
    edit::show(&create_context()?)
}

/// Placeholder names of the current buffer.
pub fn variables() -> Result<Vec<String>, AppError> {
    edit::variables(&create_context()?)
}

/// Render the current buffer.
///
/// A failed auto-fill request is reported in [`RenderOutcome::autofill_error`]; a
/// missing credential fails the call.
pub fn render(options: RenderOptions) -> Result<RenderOutcome, AppError> {
    render_with_prompt(options, None)
}

/// Like [`render`], asking `prompt` for each placeholder still blank after the
/// assignments and before auto-fill.
pub fn render_with_prompt(
    options: RenderOptions,
    prompt: Option<&mut ValuePrompt<'_>>,
) -> Result<RenderOutcome, AppError> {
    let ctx = create_context()?;
    let mut outcome = render::execute(&ctx, &options, prompt, completion_assistant)?;
    if options.copy {
        outcome.copied = Some(copy(&outcome.rendered));
    }
    Ok(outcome)
}

/// Copy `text` to the system clipboard, logging failures.
pub fn copy(text: &str) -> bool {
    match ArboardClipboardWriter::new() {
        Ok(mut clipboard) => render::copy_to_clipboard(&mut clipboard, text),
        Err(err) => {
            log::warn!("Failed to copy: {}", err);
            false
        }
    }
}

/// Save the current buffer as a named template.
pub fn save(name: &str, id: Option<&str>) -> Result<SavedTemplate, AppError> {
    templates::save(&create_context()?, name, id)
}

/// All saved templates.
pub fn list() -> Result<Vec<SavedTemplate>, AppError> {
    templates::list(&create_context()?)
}

/// Load a saved template (id or name) into the buffer.
pub fn load(query: &str) -> Result<SavedTemplate, AppError> {
    templates::load(&create_context()?, query)
}

/// Delete a saved template by id. Unknown ids are not an error.
pub fn delete(id: &str) -> Result<bool, AppError> {
    templates::delete(&create_context()?, id)
}

pub fn context_show() -> Result<ContextRegister, AppError> {
    context::show(&create_context()?)
}

pub fn context_set(key: &str, value: &str) -> Result<ContextRegister, AppError> {
    context::set(&create_context()?, key, value)
}

pub fn context_reset() -> Result<ContextRegister, AppError> {
    context::reset(&create_context()?)
}

/// Remove every stored record.
pub fn clear() -> Result<(), AppError> {
    clear::execute(&create_context()?)
}
