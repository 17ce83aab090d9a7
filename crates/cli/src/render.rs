//! Terminal rendering of sheets and inventories.

use console::style;
use sheet_core::{GridDimensions, Item, ItemCollection, ItemId, ItemKind, OccupancyMap, Rotation};
use sheet_runtime::Character;

const LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn print_character(character: &Character, selected: bool) {
    let marker = if selected { "*" } else { " " };
    println!(
        "{} {}  {}",
        style(marker).green().bold(),
        style(character.display_name()).bold(),
        style(character.id).dim()
    );
    println!(
        "  Level {}  XP {}  Pips {}  Grit {}{}",
        character.level,
        character.experience,
        character.pips,
        character.grit,
        if character.alive { "" } else { "  (dead)" }
    );
    println!(
        "  STR {}/{}  DEX {}/{}  WIL {}/{}  HP {}/{}",
        character.strength,
        character.max_strength,
        character.dexterity,
        character.max_dexterity,
        character.will,
        character.max_will,
        character.hit_points,
        character.max_hit_points
    );
    for (label, value) in [
        ("Background", &character.background),
        ("Birthsign", &character.birthsign),
        ("Coat", &character.coat),
        ("Look", &character.look),
    ] {
        if !value.is_empty() {
            println!("  {}: {}", style(label).dim(), value);
        }
    }
    for hireling in &character.hirelings {
        println!(
            "  {} {}  STR {} DEX {} WIL {} HP {}/{}",
            style("hireling").cyan(),
            hireling.name,
            hireling.strength,
            hireling.dexterity,
            hireling.will,
            hireling.hit_points,
            hireling.max_hit_points
        );
    }
}

/// Draw the grid with one letter per item, followed by a legend and the
/// scratch area contents.
pub fn print_inventory(items: &ItemCollection, dims: GridDimensions) {
    let occupancy = OccupancyMap::build(dims, items.in_grid(), None);
    let grid_items: Vec<&Item> = items.in_grid().collect();
    let label_of = |id: ItemId| {
        grid_items
            .iter()
            .position(|item| item.id == id)
            .and_then(|index| LABELS.get(index % LABELS.len()))
            .map(|&byte| char::from(byte))
            .unwrap_or('?')
    };

    println!();
    println!("{}", style("Inventory").yellow().bold());
    let border = format!("+{}+", "---".repeat(dims.width as usize));
    println!("  {}", style(&border).dim());
    for y in 0..dims.height as i32 {
        let row: String = (0..dims.width as i32)
            .map(|x| match occupancy.occupant(sheet_core::Cell::new(x, y)) {
                Some(id) => format!(" {} ", label_of(id)),
                None => " . ".to_string(),
            })
            .collect();
        println!("  {}{}{}", style("|").dim(), row, style("|").dim());
    }
    println!("  {}", style(&border).dim());

    for (index, item) in grid_items.iter().enumerate() {
        let label = char::from(LABELS[index % LABELS.len()]);
        let cell = item
            .grid_cell()
            .map(|cell| cell.to_string())
            .unwrap_or_default();
        println!(
            "  {} {} at {}  {}",
            style(label).cyan().bold(),
            item.name,
            cell,
            style(describe(item)).dim()
        );
    }

    let scratch: Vec<&Item> = items.in_scratch().collect();
    if !scratch.is_empty() {
        println!();
        println!("{}", style("Scratch area").yellow().bold());
        for item in scratch {
            let position = item.scratch_position().unwrap_or_default();
            println!(
                "  - {} at ({:.0}, {:.0})  {}",
                item.name,
                position.x,
                position.y,
                style(describe(item)).dim()
            );
        }
    }
}

/// One-line summary of an item's size, kind details and usage.
pub fn describe(item: &Item) -> String {
    let mut parts = vec![format!("{} {}", item.size, item.footprint())];
    if item.rotation == Rotation::Deg90 {
        parts.push("rotated".to_string());
    }
    match &item.kind {
        ItemKind::Weapon { damage, class } => parts.push(format!("{class} weapon {damage}")),
        ItemKind::Armor { defense } => parts.push(format!("armor {defense}")),
        ItemKind::Item => {}
        ItemKind::Spell { description } if !description.is_empty() => {
            parts.push(format!("spell: {description}"))
        }
        ItemKind::Spell { .. } => parts.push("spell".to_string()),
        ItemKind::Condition {
            clear_instructions, ..
        } => parts.push(format!("condition ({clear_instructions})")),
        ItemKind::PipPurse(purse) => parts.push(format!("{}/{} pips", purse.value(), purse.max())),
    }
    if item.usage.capacity() > 0 {
        parts.push(pips(item.usage.used(), item.usage.capacity()));
    }
    parts.join(", ")
}

fn pips(used: u8, capacity: u8) -> String {
    (0..capacity)
        .map(|index| if index < used { '●' } else { '○' })
        .collect()
}
