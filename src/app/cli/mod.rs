//! CLI Adapter.

mod context;
mod render;

use std::io::{ErrorKind, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Error as DialoguerError};

use crate::app::api;
use crate::domain::{AppError, format_date};

#[derive(Parser)]
#[command(name = "pb")]
#[command(version)]
#[command(
    about = "Build prompts from templates with <PLACEHOLDER> variables",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replace the current template (reads stdin when TEXT is omitted or `-`)
    #[clap(visible_alias = "e")]
    Edit {
        /// Template text
        text: Option<String>,
        /// Read the template from a file
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Print the current template
    Show,
    /// List placeholders detected in the current template
    #[clap(visible_alias = "v")]
    Vars,
    /// Render the current template with placeholder values
    #[clap(visible_alias = "r")]
    Render(render::RenderArgs),
    /// Save the current template under a name
    #[clap(visible_alias = "s")]
    Save {
        /// Template name
        name: String,
        /// Overwrite the saved template with this id
        #[arg(long)]
        id: Option<String>,
    },
    /// List saved templates
    #[clap(visible_alias = "ls")]
    List,
    /// Load a saved template (by id or name) into the current template
    #[clap(visible_alias = "l")]
    Load {
        /// Template id or name
        query: String,
    },
    /// Delete a saved template
    #[clap(visible_alias = "rm")]
    Delete {
        /// Template id
        id: String,
    },
    /// Inspect or edit context fields appended to rendered output
    #[clap(visible_alias = "ctx")]
    Context {
        #[command(subcommand)]
        command: context::ContextCommands,
    },
    /// Remove all stored templates, context, and the current template
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Edit { text, file } => run_edit(text, file),
        Commands::Show => run_show(),
        Commands::Vars => run_vars(),
        Commands::Render(args) => render::run_render(args),
        Commands::Save { name, id } => run_save(&name, id.as_deref()),
        Commands::List => run_list(),
        Commands::Load { query } => run_load(&query),
        Commands::Delete { id } => run_delete(&id),
        Commands::Context { command } => context::run_context(command),
        Commands::Clear { yes } => run_clear(yes),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_edit(text: Option<String>, file: Option<PathBuf>) -> Result<(), AppError> {
    let content = match (text, file) {
        (_, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            AppError::config_error(format!("Failed to read {}: {}", path.display(), e))
        })?,
        (Some(text), None) if text != "-" => text,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let names = api::edit(&content)?;
    println!("✅ Template updated ({} placeholder(s))", names.len());
    for name in &names {
        println!("  <{}>", name);
    }
    Ok(())
}

fn run_show() -> Result<(), AppError> {
    let content = api::show()?;
    if content.is_empty() {
        eprintln!("No template yet. Use `pb edit` with <PLACEHOLDER> variables.");
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn run_vars() -> Result<(), AppError> {
    let names = api::variables()?;
    if names.is_empty() {
        println!("No variables detected");
        println!("Use <VARIABLE_NAME> format in your template");
        return Ok(());
    }

    println!("Template Variables ({})", names.len());
    for name in &names {
        println!("  <{}>", name);
    }
    Ok(())
}

fn run_save(name: &str, id: Option<&str>) -> Result<(), AppError> {
    let record = api::save(name, id)?;
    println!("✅ Saved '{}' ({})", record.name, record.id);
    Ok(())
}

fn run_list() -> Result<(), AppError> {
    let records = api::list()?;
    if records.is_empty() {
        println!("No saved templates");
        return Ok(());
    }

    println!("Saved Templates ({})", records.len());
    for record in &records {
        println!("  {}  [{}]  {}", record.name, record.id, format_date(&record.updated_at));
        println!("      {}", record.preview().replace('\n', " "));
    }
    Ok(())
}

fn run_load(query: &str) -> Result<(), AppError> {
    let record = api::load(query)?;
    println!("✅ Loaded '{}' ({} placeholder(s))", record.name, record.variables.len());
    Ok(())
}

fn run_delete(id: &str) -> Result<(), AppError> {
    if api::delete(id)? {
        println!("✅ Deleted {}", id);
    } else {
        println!("No saved template with id {}", id);
    }
    Ok(())
}

fn run_clear(yes: bool) -> Result<(), AppError> {
    if !yes && !confirm("Remove all saved templates, context, and the current template?")? {
        println!("Aborted");
        return Ok(());
    }

    api::clear()?;
    println!("✅ Cleared all stored data");
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool, AppError> {
    match Confirm::new().with_prompt(prompt).default(false).interact() {
        Ok(answer) => Ok(answer),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(false),
        Err(err) => Err(AppError::config_error(format!("Failed to read confirmation: {}", err))),
    }
}
