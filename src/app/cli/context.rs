//! Context command implementation.

use clap::Subcommand;

use crate::app::api;
use crate::domain::{AppError, ContextRegister};

#[derive(Subcommand)]
pub enum ContextCommands {
    /// Show all context fields
    Show,
    /// Set a context field (SESSION_TITLE, CODE_LANGUAGE, USER_ROLE, PROJECT_TYPE, or any key)
    Set {
        /// Field name
        key: String,
        /// Field value (empty hides the field from rendered output)
        value: String,
    },
    /// Restore the default context
    Reset,
}

pub fn run_context(command: ContextCommands) -> Result<(), AppError> {
    match command {
        ContextCommands::Show => print_context(&api::context_show()?),
        ContextCommands::Set { key, value } => {
            api::context_set(&key, &value)?;
            println!("✅ Set {}", key.trim());
        }
        ContextCommands::Reset => {
            print_context(&api::context_reset()?);
        }
    }
    Ok(())
}

fn print_context(context: &ContextRegister) {
    println!("Context Settings");
    for (key, value) in context.iter() {
        println!("  {}: {}", key, value);
    }
}
