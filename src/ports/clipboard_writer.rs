use crate::domain::AppError;

/// Port for copying rendered prompts to the system clipboard.
pub trait ClipboardWriter {
    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}
