use crate::app::AppContext;
use crate::domain::{AppError, ContextRegister};
use crate::ports::KeyValueStore;

pub fn show<S: KeyValueStore>(ctx: &AppContext<S>) -> Result<ContextRegister, AppError> {
    ctx.session_store().load_context()
}

/// Set one context field (recognized or extension key) and persist the register.
pub fn set<S: KeyValueStore>(
    ctx: &AppContext<S>,
    key: &str,
    value: &str,
) -> Result<ContextRegister, AppError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::InvalidAssignment(format!("{}={}", key, value)));
    }

    let store = ctx.session_store();
    let mut context = store.load_context()?;
    context.update([(key, value)]);
    store.save_context(&context)?;
    Ok(context)
}

/// Restore the default seed.
pub fn reset<S: KeyValueStore>(ctx: &AppContext<S>) -> Result<ContextRegister, AppError> {
    let context = ContextRegister::default();
    ctx.session_store().save_context(&context)?;
    Ok(context)
}
