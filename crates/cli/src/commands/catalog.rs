use anyhow::Result;
use clap::Parser;
use console::style;
use sheet_core::{CatalogOracle, ItemCategory, ItemFactory};
use strum::IntoEnumIterator;

use crate::render;
use crate::session::Session;

/// List catalog entries
#[derive(Parser, Debug)]
pub struct CatalogList {
    /// Only list this category (weapon, armor, item, spell, condition, pip-purse)
    pub category: Option<ItemCategory>,
}

impl CatalogList {
    pub fn execute(self, session: &Session) -> Result<()> {
        for category in ItemCategory::iter() {
            if self.category.is_some_and(|wanted| wanted != category) {
                continue;
            }
            let entries = session.catalog.entries(category);
            if entries.is_empty() {
                continue;
            }

            println!("{}", style(category).yellow().bold());
            for entry in entries {
                let preview = ItemFactory::from_catalog(entry, category, None);
                println!(
                    "  {:<20} {}",
                    entry.name,
                    style(render::describe(&preview)).dim()
                );
            }
        }
        Ok(())
    }
}
