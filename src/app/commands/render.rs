use crate::app::AppContext;
use crate::domain::{AppError, CompletionConfig, EditorSession, VariableValues};
use crate::ports::{ClipboardWriter, KeyValueStore, ValueSuggester};

/// Asks for one placeholder value. `Ok(None)` stops prompting.
pub type ValuePrompt<'a> = dyn FnMut(&str) -> Result<Option<String>, AppError> + 'a;

/// Options for rendering the current buffer.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `(name, value)` pairs applied before rendering.
    pub assignments: Vec<(String, String)>,
    /// Append the context block.
    pub show_context: bool,
    /// Ask the completion provider for blank placeholders.
    pub autofill: bool,
    /// Copy the rendered text to the system clipboard.
    pub copy: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { assignments: Vec::new(), show_context: true, autofill: false, copy: false }
    }
}

/// Result of rendering the current buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutcome {
    pub rendered: String,
    /// Placeholders still blank after all value sources were applied.
    pub unfilled: Vec<String>,
    /// Assignments naming a placeholder absent from the template.
    pub ignored: Vec<String>,
    /// Message of a failed auto-fill; the values it would have changed are kept.
    pub autofill_error: Option<String>,
    /// Clipboard result, `None` when no copy was requested.
    pub copied: Option<bool>,
}

/// Split a `KEY=VALUE` argument. The value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String), AppError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(AppError::InvalidAssignment(raw.to_string())),
    }
}

/// Build a session from the stored buffer and context, then apply `assignments`.
///
/// Returns the session and the assignment keys that matched no placeholder.
pub fn prepare_session<S: KeyValueStore>(
    ctx: &AppContext<S>,
    assignments: &[(String, String)],
    show_context: bool,
) -> Result<(EditorSession, Vec<String>), AppError> {
    let store = ctx.session_store();
    let mut session = EditorSession::new(store.load_context()?);
    session.set_template(store.load_current()?);
    session.set_show_context(show_context);

    let mut ignored = Vec::new();
    for (name, value) in assignments {
        if !session.set_value(name, value.as_str()) {
            log::warn!("Ignoring value for unknown placeholder <{}>", name);
            ignored.push(name.clone());
        }
    }
    Ok((session, ignored))
}

/// Render the stored buffer with `options`.
///
/// Assignments are applied first, then `prompt` is asked for each placeholder still
/// blank, then auto-fill runs for whatever remains. `suggester` is only built when
/// auto-fill has work to do, and its error (such as a missing credential) aborts the
/// render. A failed suggestion request does not: it is reported in
/// [`RenderOutcome::autofill_error`] and the values stay as they were.
pub fn execute<S, V, F>(
    ctx: &AppContext<S>,
    options: &RenderOptions,
    prompt: Option<&mut ValuePrompt<'_>>,
    suggester: F,
) -> Result<RenderOutcome, AppError>
where
    S: KeyValueStore,
    V: ValueSuggester,
    F: FnOnce(&CompletionConfig) -> Result<V, AppError>,
{
    let (mut session, ignored) =
        prepare_session(ctx, &options.assignments, options.show_context)?;

    if let Some(prompt) = prompt {
        prompt_unfilled(&mut session, prompt)?;
    }

    let mut autofill_error = None;
    let blank = session.values().unfilled_count();
    if options.autofill && blank > 0 {
        let suggester = suggester(&ctx.config().completion)?;
        log::info!("Auto-filling {} placeholder(s)", blank);
        if let Err(err) = autofill(&mut session, &suggester) {
            log::warn!("Auto-fill failed: {}", err);
            autofill_error = Some(err.to_string());
        }
    }

    let mut result = outcome(&session, ignored);
    result.autofill_error = autofill_error;
    Ok(result)
}

fn prompt_unfilled(
    session: &mut EditorSession,
    prompt: &mut ValuePrompt<'_>,
) -> Result<(), AppError> {
    let names: Vec<String> = session.unfilled().into_iter().map(str::to_string).collect();
    for name in names {
        match prompt(&name)? {
            Some(value) => {
                session.set_value(&name, value);
            }
            None => break,
        }
    }
    Ok(())
}

/// Ask `suggester` for the blank placeholders and apply the answer.
///
/// On failure the session keeps its previous values.
pub fn autofill(
    session: &mut EditorSession,
    suggester: &dyn ValueSuggester,
) -> Result<(), AppError> {
    session.begin_autofill()?;
    let result: Result<VariableValues, AppError> =
        suggester.suggest(session.template(), session.variables(), session.values());
    session.finish_autofill(result)
}

pub fn outcome(session: &EditorSession, ignored: Vec<String>) -> RenderOutcome {
    RenderOutcome {
        rendered: session.rendered(),
        unfilled: session.unfilled().into_iter().map(str::to_string).collect(),
        ignored,
        autofill_error: None,
        copied: None,
    }
}

/// Copy `text`; failures are logged and reported as `false`.
pub fn copy_to_clipboard(clipboard: &mut dyn ClipboardWriter, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => true,
        Err(err) => {
            log::warn!("Failed to copy: {}", err);
            false
        }
    }
}
