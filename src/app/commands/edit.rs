use crate::app::AppContext;
use crate::domain::{AppError, extract};
use crate::ports::KeyValueStore;

/// Replace the current editing buffer and return its placeholder names.
pub fn execute<S: KeyValueStore>(
    ctx: &AppContext<S>,
    content: &str,
) -> Result<Vec<String>, AppError> {
    ctx.session_store().save_current(content)?;
    Ok(extract(content))
}

/// Current editing buffer.
pub fn show<S: KeyValueStore>(ctx: &AppContext<S>) -> Result<String, AppError> {
    ctx.session_store().load_current()
}

/// Placeholder names of the current buffer.
pub fn variables<S: KeyValueStore>(ctx: &AppContext<S>) -> Result<Vec<String>, AppError> {
    Ok(extract(&show(ctx)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::commands::test_context;

    #[test]
    fn edit_persists_buffer_and_reports_variables() {
        let ctx = test_context();

        let names = execute(&ctx, "Dear <NAME>, re: <TOPIC> <NAME>").unwrap();

        assert_eq!(names, vec!["NAME", "TOPIC"]);
        assert_eq!(show(&ctx).unwrap(), "Dear <NAME>, re: <TOPIC> <NAME>");
        assert_eq!(variables(&ctx).unwrap(), vec!["NAME", "TOPIC"]);
    }

    #[test]
    fn empty_buffer_has_no_variables() {
        let ctx = test_context();
        assert!(variables(&ctx).unwrap().is_empty());
    }
}
