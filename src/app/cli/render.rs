//! Render command implementation.

use std::io::ErrorKind;

use clap::Args;
use dialoguer::{Error as DialoguerError, Input};

use crate::app::api::{self, RenderOptions, RenderOutcome, ValuePrompt};
use crate::app::commands::render::parse_assignment;
use crate::domain::AppError;

#[derive(Args)]
pub struct RenderArgs {
    /// Placeholder value as KEY=VALUE (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Prompt for each unfilled placeholder
    #[arg(short, long)]
    interactive: bool,
    /// Suggest values for unfilled placeholders with the completion provider
    #[arg(short, long)]
    auto: bool,
    /// Omit the context block
    #[arg(long)]
    no_context: bool,
    /// Copy the rendered output to the clipboard
    #[arg(short, long)]
    copy: bool,
}

pub fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let assignments =
        args.set.iter().map(|raw| parse_assignment(raw)).collect::<Result<Vec<_>, _>>()?;
    let options = RenderOptions {
        assignments,
        show_context: !args.no_context,
        autofill: args.auto,
        copy: args.copy,
    };

    let mut terminal = ask_value;
    let prompt: &mut ValuePrompt<'_> = &mut terminal;
    let outcome = api::render_with_prompt(options, args.interactive.then_some(prompt))?;

    print_outcome(&outcome);
    Ok(())
}

/// Read one value from the terminal; Ctrl-C stops prompting.
fn ask_value(name: &str) -> Result<Option<String>, AppError> {
    let input = Input::<String>::new()
        .with_prompt(format!("<{}>", name))
        .allow_empty(true)
        .interact_text();
    match input {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => {
            Err(AppError::config_error(format!("Failed to read value for <{}>: {}", name, err)))
        }
    }
}

fn print_outcome(outcome: &RenderOutcome) {
    for name in &outcome.ignored {
        eprintln!("⚠️  <{}> is not a placeholder in the current template", name);
    }
    if let Some(err) = &outcome.autofill_error {
        eprintln!("⚠️  Auto-fill failed: {}", err);
    }

    if outcome.rendered.is_empty() {
        eprintln!("Enter a prompt template to see the preview...");
    } else {
        println!("{}", outcome.rendered);
    }

    if !outcome.unfilled.is_empty() {
        let tokens: Vec<String> = outcome.unfilled.iter().map(|n| format!("<{}>", n)).collect();
        eprintln!("⚠️  {} unfilled: {}", outcome.unfilled.len(), tokens.join(", "));
    }

    match outcome.copied {
        Some(true) => eprintln!("✅ Copied to clipboard"),
        Some(false) => eprintln!("⚠️  Could not copy to clipboard"),
        None => {}
    }
}
