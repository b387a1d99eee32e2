//! UI-agnostic editing controller.

use super::context::ContextRegister;
use super::placeholder::{extract, substitute, unfilled};
use super::values::VariableValues;
use super::AppError;

const CONTEXT_SEPARATOR: &str = "\n\n--- Context ---\n";

/// State of one editing session: the template buffer, its placeholder values, and
/// the context appended to the rendered output.
#[derive(Debug, Clone)]
pub struct EditorSession {
    template: String,
    variables: Vec<String>,
    values: VariableValues,
    context: ContextRegister,
    show_context: bool,
    autofill_pending: bool,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(ContextRegister::empty())
    }
}

impl EditorSession {
    pub fn new(context: ContextRegister) -> Self {
        Self {
            template: String::new(),
            variables: Vec::new(),
            values: VariableValues::new(),
            context,
            show_context: true,
            autofill_pending: false,
        }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Replace the template and reconcile values against its placeholders.
    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = template.into();
        self.variables = extract(&self.template);
        self.values.reconcile(&self.variables);
    }

    /// Set the value of a placeholder in the current template.
    ///
    /// Returns `false` and changes nothing when `name` is not a placeholder.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        if !self.values.contains(name) {
            return false;
        }
        self.values.set(name, value);
        true
    }

    pub fn values(&self) -> &VariableValues {
        &self.values
    }

    /// Placeholder names in first-occurrence order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn unfilled(&self) -> Vec<&str> {
        unfilled(&self.variables, &self.values)
    }

    pub fn set_show_context(&mut self, show: bool) {
        self.show_context = show;
    }

    /// Substituted template, followed by the context block when enabled and non-empty.
    pub fn rendered(&self) -> String {
        let body = substitute(&self.template, &self.values);
        if !self.show_context {
            return body;
        }

        let context = self.context.to_display_string();
        if context.is_empty() { body } else { format!("{}{}{}", body, CONTEXT_SEPARATOR, context) }
    }

    pub fn is_autofill_pending(&self) -> bool {
        self.autofill_pending
    }

    /// Mark an auto-fill request as in flight.
    pub fn begin_autofill(&mut self) -> Result<(), AppError> {
        if self.autofill_pending {
            return Err(AppError::AutofillInProgress);
        }
        self.autofill_pending = true;
        Ok(())
    }

    /// Settle the in-flight auto-fill.
    ///
    /// Suggestions are applied even if the template changed meanwhile, then values
    /// are reconciled against the current template. On error, values stay as they were.
    pub fn finish_autofill(
        &mut self,
        result: Result<VariableValues, AppError>,
    ) -> Result<(), AppError> {
        self.autofill_pending = false;
        let suggested = result?;
        self.values.merge(suggested);
        self.values.reconcile(&self.variables);
        Ok(())
    }
}
