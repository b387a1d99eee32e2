//! Completion provider and value suggestion ports.

use crate::domain::{AppError, VariableValues};

/// Port for a text-generation service: one prompt in, one text answer out.
pub trait CompletionProvider {
    fn complete(&self, prompt: &str) -> Result<String, AppError>;
}

/// Port for anything able to propose values for unfilled placeholders.
pub trait ValueSuggester {
    /// Suggest values for the blank entries among `names`.
    ///
    /// Returns `current` merged with the suggestions, suggestions taking precedence.
    fn suggest(
        &self,
        template: &str,
        names: &[String],
        current: &VariableValues,
    ) -> Result<VariableValues, AppError>;
}
