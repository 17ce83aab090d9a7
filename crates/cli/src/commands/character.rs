//! Roster commands: creating, inspecting and moving characters around.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use sheet_runtime::{
    CharacterFactory, HirelingFactory, export_character, export_file_name, import_character,
};

use crate::render;
use crate::session::Session;

/// List saved characters
#[derive(Parser, Debug)]
pub struct List {}

impl List {
    pub fn execute(self, session: &Session) -> Result<()> {
        let characters = session.roster.characters();
        if characters.is_empty() {
            println!(
                "{}",
                style("No characters yet. Create one with `sheet new <name>`.").dim()
            );
            return Ok(());
        }

        let current = session.roster.current_id();
        for character in characters {
            let marker = if current == Some(character.id) { "*" } else { " " };
            println!(
                "{} {:<24} level {:<3} {} items  {}",
                style(marker).green().bold(),
                character.display_name(),
                character.level,
                character.inventory.len(),
                style(character.id).dim()
            );
        }
        Ok(())
    }
}

/// Create a new character and select it
#[derive(Parser, Debug)]
pub struct New {
    /// Character name
    pub name: String,

    /// Roll this many hirelings to travel with the character
    #[arg(long, default_value_t = 0)]
    pub hirelings: usize,
}

impl New {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let mut character = CharacterFactory::named(self.name);
        let mut rng = rand::thread_rng();
        character.hirelings = (1..=self.hirelings)
            .map(|n| HirelingFactory::create(format!("Hireling {n}"), &mut rng))
            .collect();

        let id = session.roster.add(character);
        session.save()?;

        println!(
            "{} Created {}",
            style("✓").green(),
            style(session.character(id)?.display_name()).bold()
        );
        Ok(())
    }
}

/// Show a character sheet and its inventory
#[derive(Parser, Debug)]
pub struct Show {
    /// Character name or id (defaults to the selected character)
    pub character: Option<String>,
}

impl Show {
    pub fn execute(self, session: &Session) -> Result<()> {
        let id = session.character_id(self.character.as_deref())?;
        let character = session.character(id)?;
        render::print_character(character, session.roster.current_id() == Some(id));
        render::print_inventory(&character.inventory, session.layout.dims());
        Ok(())
    }
}

/// Delete a character
#[derive(Parser, Debug)]
pub struct Delete {
    /// Character name or id
    pub character: String,
}

impl Delete {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let id = session.character_id(Some(&self.character))?;
        let removed = session.roster.delete(id)?;
        session.save()?;
        println!(
            "{} Deleted {}",
            style("✓").green(),
            style(removed.display_name()).bold()
        );
        Ok(())
    }
}

/// Select the character other commands act on
#[derive(Parser, Debug)]
pub struct Select {
    /// Character name or id
    pub character: Option<String>,

    /// Clear the selection instead
    #[arg(long, conflicts_with = "character")]
    pub clear: bool,
}

impl Select {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        if self.clear {
            session.roster.clear_selection();
            session.save()?;
            println!("{}", style("Selection cleared").dim());
            return Ok(());
        }

        let Some(query) = self.character else {
            anyhow::bail!("Name a character to select, or pass --clear");
        };
        let id = session.character_id(Some(&query))?;
        let name = session.roster.select(id)?.display_name().to_string();
        session.save()?;
        println!("{} Selected {}", style("✓").green(), style(name).bold());
        Ok(())
    }
}

/// Export a character to a JSON file
#[derive(Parser, Debug)]
pub struct Export {
    /// Character name or id (defaults to the selected character)
    pub character: Option<String>,

    /// Output path (defaults to a file named after the character)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

impl Export {
    pub fn execute(self, session: &Session) -> Result<()> {
        let id = session.character_id(self.character.as_deref())?;
        let character = session.character(id)?;
        let path = self
            .out
            .unwrap_or_else(|| PathBuf::from(export_file_name(character)));

        export_character(character, &path)?;
        println!(
            "{} Exported {} to {}",
            style("✓").green(),
            style(character.display_name()).bold(),
            style(path.display()).dim()
        );
        Ok(())
    }
}

/// Import a character from a JSON file
#[derive(Parser, Debug)]
pub struct Import {
    /// Path to an exported character
    pub path: PathBuf,
}

impl Import {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let character = import_character(&self.path)?;
        let id = session.roster.add(character);
        session.save()?;
        println!(
            "{} Imported {} as {}",
            style("✓").green(),
            style(session.character(id)?.display_name()).bold(),
            style(id).dim()
        );
        Ok(())
    }
}
