//! Command-line front end for the character sheet.
//!
//! Every invocation loads the roster, applies one command and saves.
//! Run with: `sheet <command>`

mod commands;
mod failure;
mod render;
mod session;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{
    AddItem, AddPurse, CatalogList, Delete, Export, Import, List, Move, New, Pip, Purse,
    RemoveItem, Rotate, Select, Show,
};
use sheet_runtime::SheetConfig;

use crate::session::Session;

/// Mausritter-style character sheets with a tactile inventory
#[derive(Parser)]
#[command(name = "sheet")]
#[command(about = "Character sheets with a grid inventory", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List saved characters
    List(List),

    /// Create a new character and select it
    New(New),

    /// Show a character sheet and its inventory
    Show(Show),

    /// Delete a character
    Delete(Delete),

    /// Select the character other commands act on
    Select(Select),

    /// Export a character to a JSON file
    Export(Export),

    /// Import a character from a JSON file
    Import(Import),

    /// Add a catalog or custom item to the scratch area
    AddItem(AddItem),

    /// Add a pip purse to the scratch area
    AddPurse(AddPurse),

    /// Move an item into a grid cell or the scratch area
    Move(Move),

    /// Rotate an item by 90 degrees
    Rotate(Rotate),

    /// Remove an item from the inventory
    RemoveItem(RemoveItem),

    /// Toggle a usage pip on an item
    Pip(Pip),

    /// Set the balance of a pip purse
    Purse(Purse),

    /// List catalog entries
    Catalog(CatalogList),
}

fn main() -> ExitCode {
    // Load .env file if it exists (for SHEET_* variables)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => failure::report(&err),
    }
}

fn run(command: Command) -> Result<()> {
    let mut session = Session::open(SheetConfig::from_env())?;

    match command {
        Command::List(cmd) => cmd.execute(&session),
        Command::New(cmd) => cmd.execute(&mut session),
        Command::Show(cmd) => cmd.execute(&session),
        Command::Delete(cmd) => cmd.execute(&mut session),
        Command::Select(cmd) => cmd.execute(&mut session),
        Command::Export(cmd) => cmd.execute(&session),
        Command::Import(cmd) => cmd.execute(&mut session),
        Command::AddItem(cmd) => cmd.execute(&mut session),
        Command::AddPurse(cmd) => cmd.execute(&mut session),
        Command::Move(cmd) => cmd.execute(&mut session),
        Command::Rotate(cmd) => cmd.execute(&mut session),
        Command::RemoveItem(cmd) => cmd.execute(&mut session),
        Command::Pip(cmd) => cmd.execute(&mut session),
        Command::Purse(cmd) => cmd.execute(&mut session),
        Command::Catalog(cmd) => cmd.execute(&session),
    }
}

/// Log to stderr so command output on stdout stays clean.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
