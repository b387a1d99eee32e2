use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// Remove saved templates, context, and the current buffer.
pub fn execute<S: KeyValueStore>(ctx: &AppContext<S>) -> Result<(), AppError> {
    ctx.session_store().clear_all()
}
