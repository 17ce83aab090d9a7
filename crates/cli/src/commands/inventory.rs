//! Inventory commands. Each one runs a single controller operation against
//! the character's current snapshot and saves the result.

use anyhow::{Result, bail};
use clap::{ArgGroup, Parser};
use console::style;
use sheet_core::{
    Cell, ItemCategory, ItemCollection, ItemFactory, ItemId, PixelPoint, Placement,
    RegionTransform,
};
use sheet_runtime::CharacterId;

use crate::render;
use crate::session::Session;

/// Character and inventory snapshot a command operates on.
fn target(session: &Session, character: Option<&str>) -> Result<(CharacterId, ItemCollection)> {
    let id = session.character_id(character)?;
    let items = session.character(id)?.inventory.clone();
    Ok((id, items))
}

fn report(session: &Session, character: CharacterId, item: ItemId, verb: &str) -> Result<()> {
    let items = &session.character(character)?.inventory;
    let Some(item) = items.get(item) else {
        println!("{} {}", style("✓").green(), verb);
        return Ok(());
    };
    let position = match (item.grid_cell(), item.scratch_position()) {
        (Some(cell), _) => format!("grid {cell}"),
        (None, Some(point)) => format!("scratch ({:.0}, {:.0})", point.x, point.y),
        (None, None) => String::new(),
    };
    println!(
        "{} {} {}  {}  {}",
        style("✓").green(),
        verb,
        style(&item.name).bold(),
        position,
        style(render::describe(item)).dim()
    );
    Ok(())
}

/// Add a catalog or custom item to the scratch area
#[derive(Parser, Debug)]
pub struct AddItem {
    /// Catalog name; unknown names become custom items
    pub name: String,

    /// Skip the catalog and create a custom item
    #[arg(long)]
    pub custom: bool,

    /// Character name or id (defaults to the selected character)
    #[arg(short, long)]
    pub character: Option<String>,
}

impl AddItem {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let (id, items) = target(session, self.character.as_deref())?;
        let position = Some(Placement::staggered(items.in_scratch().count()));
        let item = if self.custom {
            ItemFactory::custom(self.name, position)
        } else {
            ItemFactory::from_name(&session.catalog, &self.name, position)
        };
        let item_id = item.id;

        let outcome = session.controller().add_item(&items, item);
        session.commit(id, outcome)?;
        report(session, id, item_id, "Added")
    }
}

/// Add a pip purse to the scratch area
#[derive(Parser, Debug)]
pub struct AddPurse {
    /// Starting balance (clamped to the purse maximum)
    #[arg(long)]
    pub pips: Option<i64>,

    /// Character name or id (defaults to the selected character)
    #[arg(short, long)]
    pub character: Option<String>,
}

impl AddPurse {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let (id, items) = target(session, self.character.as_deref())?;
        let position = Some(Placement::staggered(items.in_scratch().count()));
        let mut purse = ItemFactory::pip_purse(&session.catalog, position);
        if let (Some(pips), Some(balance)) = (self.pips, purse.kind.pip_purse_mut()) {
            balance.set_value(pips);
        }
        let item_id = purse.id;

        let outcome = session.controller().add_item(&items, purse);
        session.commit(id, outcome)?;
        report(session, id, item_id, "Added")
    }
}

/// Move an item into a grid cell or the scratch area
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("destination").required(true).args(["cell", "scratch"])))]
pub struct Move {
    /// Item name or id
    pub item: String,

    /// Grid cell for the item's top-left corner
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub cell: Option<Vec<i32>>,

    /// Scratch position in pixels, relative to the scratch content box
    #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
    pub scratch: Option<Vec<f64>>,

    /// Character name or id (defaults to the selected character)
    #[arg(short, long)]
    pub character: Option<String>,
}

impl Move {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let (id, items) = target(session, self.character.as_deref())?;
        let item_id = Session::item_id(&items, &self.item)?;

        let mut controller = session.controller();
        controller.select_item(&items, item_id)?;
        let outcome = match (self.cell.as_deref(), self.scratch.as_deref()) {
            (Some(&[x, y]), _) => controller.tap_cell(&items, Cell::new(x, y)),
            (None, Some(&[x, y])) => {
                let point = controller
                    .viewport()
                    .scratch_region()
                    .logical_to_pixel(PixelPoint::new(x, y));
                controller.tap_scratch(&items, point)
            }
            _ => bail!("Pass either --cell X Y or --scratch X Y"),
        };

        session.commit(id, outcome)?;
        report(session, id, item_id, "Moved")
    }
}

/// Rotate an item by 90 degrees
#[derive(Parser, Debug)]
pub struct Rotate {
    /// Item name or id
    pub item: String,

    /// Character name or id (defaults to the selected character)
    #[arg(short, long)]
    pub character: Option<String>,
}

impl Rotate {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let (id, items) = target(session, self.character.as_deref())?;
        let item_id = Session::item_id(&items, &self.item)?;

        let outcome = session.controller().rotate_item(&items, item_id);
        session.commit(id, outcome)?;
        report(session, id, item_id, "Rotated")
    }
}

/// Remove an item from the inventory
#[derive(Parser, Debug)]
pub struct RemoveItem {
    /// Item name or id
    pub item: String,

    /// Character name or id (defaults to the selected character)
    #[arg(short, long)]
    pub character: Option<String>,
}

impl RemoveItem {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let (id, items) = target(session, self.character.as_deref())?;
        let item_id = Session::item_id(&items, &self.item)?;
        let name = items
            .get(item_id)
            .map(|item| item.name.clone())
            .unwrap_or_default();

        let outcome = session.controller().delete_item(&items, item_id);
        session.commit(id, outcome)?;
        println!("{} Removed {}", style("✓").green(), style(name).bold());
        Ok(())
    }
}

/// Toggle a usage pip on an item
#[derive(Parser, Debug)]
pub struct Pip {
    /// Item name or id
    pub item: String,

    /// Pip number, counting from 1
    #[arg(value_parser = clap::value_parser!(u8).range(1..))]
    pub pip: u8,

    /// Character name or id (defaults to the selected character)
    #[arg(short, long)]
    pub character: Option<String>,
}

impl Pip {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let (id, items) = target(session, self.character.as_deref())?;
        let item_id = Session::item_id(&items, &self.item)?;

        let outcome = session
            .controller()
            .toggle_usage_pip(&items, item_id, self.pip - 1);
        session.commit(id, outcome)?;
        report(session, id, item_id, "Updated")
    }
}

/// Set the balance of a pip purse
#[derive(Parser, Debug)]
pub struct Purse {
    /// New balance (clamped to 0..=max)
    #[arg(allow_negative_numbers = true)]
    pub value: i64,

    /// Purse name or id (defaults to the only purse)
    #[arg(long)]
    pub item: Option<String>,

    /// Character name or id (defaults to the selected character)
    #[arg(short, long)]
    pub character: Option<String>,
}

impl Purse {
    pub fn execute(self, session: &mut Session) -> Result<()> {
        let (id, items) = target(session, self.character.as_deref())?;
        let item_id = match &self.item {
            Some(query) => Session::item_id(&items, query)?,
            None => {
                let mut purses = items
                    .iter()
                    .filter(|item| item.category() == ItemCategory::PipPurse);
                match (purses.next(), purses.next()) {
                    (Some(purse), None) => purse.id,
                    (None, _) => bail!("No pip purse. Add one with `sheet add-purse`."),
                    (Some(_), Some(_)) => bail!("Several purses; pick one with --item"),
                }
            }
        };

        let outcome = session.controller().set_pip_value(&items, item_id, self.value);
        session.commit(id, outcome)?;
        report(session, id, item_id, "Updated")
    }
}
