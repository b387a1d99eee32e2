//! Auto-fill of unfilled placeholders through a completion provider.

use minijinja::{Environment, UndefinedBehavior, context};
use serde_json::Value;

use crate::domain::{AppError, VariableValues, unfilled};
use crate::ports::{CompletionProvider, ValueSuggester};

const AUTOFILL_PROMPT: &str = r#"You are an AI assistant helping to fill in placeholder variables in a prompt template.

Template:
{{ template }}

Variables that need values: {{ names }}

Current filled values: {{ current_values }}

Please suggest appropriate values for the empty variables based on the context of the template.
Return ONLY a JSON object with variable names as keys and suggested values as strings.

Example format:
{
  "VARIABLE_NAME": "suggested value",
  "ANOTHER_VARIABLE": "another suggested value"
}
"#;

/// [`ValueSuggester`] backed by any [`CompletionProvider`].
pub struct CompletionAssistant<P: CompletionProvider> {
    provider: P,
}

impl<P: CompletionProvider> CompletionAssistant<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P: CompletionProvider> ValueSuggester for CompletionAssistant<P> {
    fn suggest(
        &self,
        template: &str,
        names: &[String],
        current: &VariableValues,
    ) -> Result<VariableValues, AppError> {
        let missing = unfilled(names, current);
        if missing.is_empty() {
            return Ok(current.clone());
        }

        let prompt = build_prompt(template, &missing, current)?;
        log::info!("Requesting suggestions for {} placeholder(s)", missing.len());
        let response = self.provider.complete(&prompt)?;

        let suggestions = parse_suggestions(&response)?;
        let mut merged = current.clone();
        merged.merge(suggestions);
        Ok(merged)
    }
}

/// Render the instruction prompt sent to the provider.
pub fn build_prompt(
    template: &str,
    missing: &[&str],
    current: &VariableValues,
) -> Result<String, AppError> {
    let current_values = serde_json::to_string_pretty(current)
        .map_err(|e| AppError::config_error(format!("Failed to serialize values: {}", e)))?;

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let ctx = context! {
        template => template,
        names => missing.join(", "),
        current_values => current_values
    };
    env.render_str(AUTOFILL_PROMPT, ctx)
        .map_err(|e| AppError::config_error(format!("Failed to render auto-fill prompt: {}", e)))
}

/// Extract the suggestion object embedded in a provider answer.
///
/// The candidate span runs from the first `{` to the last `}`. String values are
/// kept verbatim, numbers and booleans become their JSON text, `null` entries are
/// dropped, and nested arrays or objects are kept as compact JSON.
pub fn parse_suggestions(response: &str) -> Result<VariableValues, AppError> {
    let span = match (response.find('{'), response.rfind('}')) {
        (Some(start), Some(end)) if start < end => &response[start..=end],
        _ => {
            return Err(AppError::MalformedResponse(
                "No JSON object found in completion response".into(),
            ));
        }
    };

    let object: serde_json::Map<String, Value> = serde_json::from_str(span)
        .map_err(|e| AppError::MalformedResponse(format!("Invalid JSON object: {}", e)))?;

    Ok(object
        .into_iter()
        .filter_map(|(name, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((name, text)),
            other => Some((name, other.to_string())),
        })
        .collect())
}
