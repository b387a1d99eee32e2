use crate::app::AppContext;
use crate::domain::{AppError, SavedTemplate};
use crate::ports::KeyValueStore;

/// Save the current buffer under `name`.
///
/// With `id`, the record with that id is replaced (or created with that id).
pub fn save<S: KeyValueStore>(
    ctx: &AppContext<S>,
    name: &str,
    id: Option<&str>,
) -> Result<SavedTemplate, AppError> {
    let content = ctx.session_store().load_current()?;
    let record = match id {
        Some(id) => SavedTemplate::with_id(id.to_string(), name, &content)?,
        None => SavedTemplate::new(name, &content)?,
    };
    ctx.templates().save(record)
}

pub fn list<S: KeyValueStore>(ctx: &AppContext<S>) -> Result<Vec<SavedTemplate>, AppError> {
    ctx.templates().list()
}

/// Load a saved template (by id or name) into the current buffer.
pub fn load<S: KeyValueStore>(
    ctx: &AppContext<S>,
    query: &str,
) -> Result<SavedTemplate, AppError> {
    let record = ctx
        .templates()
        .find(query)?
        .ok_or_else(|| AppError::TemplateNotFound(query.to_string()))?;
    ctx.session_store().save_current(&record.content)?;
    Ok(record)
}

/// Delete by id. Returns whether a record existed.
pub fn delete<S: KeyValueStore>(ctx: &AppContext<S>, id: &str) -> Result<bool, AppError> {
    ctx.templates().delete(id)
}
