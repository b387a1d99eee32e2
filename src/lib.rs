//! prompt-builder: edit prompt templates with `<PLACEHOLDER>` variables, fill them
//! manually or with AI suggestions, and render the merged prompt.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    RenderOptions, RenderOutcome, ValuePrompt, clear, completion_assistant, context_reset,
    context_set, context_show, copy, create_context, create_context_at, delete, edit, list, load,
    render, render_with_prompt, save, show, variables,
};
pub use app::assistant::CompletionAssistant;
pub use domain::{
    AppError, ContextRegister, EditorSession, SavedTemplate, VariableValues, extract, substitute,
};
pub use ports::{ClipboardWriter, CompletionProvider, KeyValueStore, ValueSuggester};
