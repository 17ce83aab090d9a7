//! Character records owned by the roster.
//!
//! A character carries its inventory as an [`ItemCollection`] snapshot; the
//! inventory controller produces new snapshots and the roster stores them
//! verbatim.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};
use sheet_core::ItemCollection;
use uuid::Uuid;

/// Stable unique identifier of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CharacterId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// A player character and everything on their sheet.
///
/// Missing fields fall back to the blank character when deserializing, so
/// partial records from older exports still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub level: u32,
    pub experience: u32,

    pub strength: u8,
    pub max_strength: u8,
    pub dexterity: u8,
    pub max_dexterity: u8,
    pub will: u8,
    pub max_will: u8,
    pub hit_points: u8,
    pub max_hit_points: u8,

    pub background: String,
    pub birthsign: String,
    pub coat: String,
    pub look: String,
    pub grit: u8,
    pub pips: u32,
    pub alive: bool,
    pub ignored_conditions: String,
    pub banked_items_and_pips: String,

    pub inventory: ItemCollection,
    pub hirelings: Vec<Hireling>,
}

impl Character {
    /// Display name, or a placeholder for unnamed characters.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Unnamed"
        } else {
            &self.name
        }
    }
}

impl Default for Character {
    fn default() -> Self {
        CharacterFactory::blank()
    }
}

/// Hired help travelling with a character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hireling {
    pub id: Uuid,
    pub name: String,
    pub strength: u8,
    pub dexterity: u8,
    pub will: u8,
    pub hit_points: u8,
    pub max_hit_points: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    pub cost: u32,
}

impl Default for Hireling {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: String::new(),
            strength: 0,
            dexterity: 0,
            will: 0,
            hit_points: 0,
            max_hit_points: 0,
            equipment: None,
            cost: 0,
        }
    }
}

/// Constructors for new and imported characters.
pub struct CharacterFactory;

impl CharacterFactory {
    pub const STARTING_LEVEL: u32 = 1;
    pub const STARTING_ATTRIBUTE: u8 = 8;
    pub const STARTING_HIT_POINTS: u8 = 4;

    /// Fresh level-1 character with an empty inventory.
    pub fn blank() -> Character {
        Character {
            id: CharacterId::new(),
            name: String::new(),
            level: Self::STARTING_LEVEL,
            experience: 0,
            strength: Self::STARTING_ATTRIBUTE,
            max_strength: Self::STARTING_ATTRIBUTE,
            dexterity: Self::STARTING_ATTRIBUTE,
            max_dexterity: Self::STARTING_ATTRIBUTE,
            will: Self::STARTING_ATTRIBUTE,
            max_will: Self::STARTING_ATTRIBUTE,
            hit_points: Self::STARTING_HIT_POINTS,
            max_hit_points: Self::STARTING_HIT_POINTS,
            background: String::new(),
            birthsign: String::new(),
            coat: String::new(),
            look: String::new(),
            grit: 0,
            pips: 0,
            alive: true,
            ignored_conditions: String::new(),
            banked_items_and_pips: String::new(),
            inventory: ItemCollection::new(),
            hirelings: Vec::new(),
        }
    }

    /// Blank character carrying `name`.
    pub fn named(name: impl Into<String>) -> Character {
        Character {
            name: name.into(),
            ..Self::blank()
        }
    }

    /// Accepts an imported record under a fresh id, so importing the same
    /// file twice never collides with an existing character.
    pub fn from_import(imported: Character) -> Character {
        Character {
            id: CharacterId::new(),
            ..imported
        }
    }
}

/// Rolls new hirelings.
pub struct HirelingFactory;

impl HirelingFactory {
    /// STR, DEX and WIL roll 2d6 each; HP rolls 1d6 and starts full.
    pub fn create<R: Rng + ?Sized>(name: impl Into<String>, rng: &mut R) -> Hireling {
        let hit_points = roll(rng, 1, 6);
        Hireling {
            id: Uuid::new_v4(),
            name: name.into(),
            strength: roll(rng, 2, 6),
            dexterity: roll(rng, 2, 6),
            will: roll(rng, 2, 6),
            hit_points,
            max_hit_points: hit_points,
            equipment: None,
            cost: 0,
        }
    }
}

fn roll<R: Rng + ?Sized>(rng: &mut R, count: u8, sides: u8) -> u8 {
    (0..count).map(|_| rng.gen_range(1..=sides)).sum()
}
