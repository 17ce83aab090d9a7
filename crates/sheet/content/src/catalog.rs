//! In-memory item catalog backing [`CatalogOracle`].

use sheet_core::{CatalogEntry, CatalogOracle, ItemCategory};

/// Static item tables grouped by category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ItemCatalog {
    pub weapons: Vec<CatalogEntry>,
    pub armor: Vec<CatalogEntry>,
    pub items: Vec<CatalogEntry>,
    pub spells: Vec<CatalogEntry>,
    pub conditions: Vec<CatalogEntry>,
    pub pip_purse: Option<CatalogEntry>,
}

impl ItemCatalog {
    /// Categories searched by name, in lookup order.
    const SEARCH_ORDER: [ItemCategory; 5] = [
        ItemCategory::Weapon,
        ItemCategory::Armor,
        ItemCategory::Item,
        ItemCategory::Spell,
        ItemCategory::Condition,
    ];

    pub fn len(&self) -> usize {
        Self::SEARCH_ORDER
            .iter()
            .map(|&category| self.entries(category).len())
            .sum::<usize>()
            + usize::from(self.pip_purse.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every named entry with its category, in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemCategory, &CatalogEntry)> {
        Self::SEARCH_ORDER
            .iter()
            .flat_map(move |&category| {
                self.entries(category)
                    .iter()
                    .map(move |entry| (category, entry))
            })
            .chain(
                self.pip_purse
                    .iter()
                    .map(|entry| (ItemCategory::PipPurse, entry)),
            )
    }
}

impl CatalogOracle for ItemCatalog {
    fn find(&self, name: &str) -> Option<(ItemCategory, &CatalogEntry)> {
        self.iter().find(|(_, entry)| entry.name == name)
    }

    fn entries(&self, category: ItemCategory) -> &[CatalogEntry] {
        match category {
            ItemCategory::Weapon => &self.weapons,
            ItemCategory::Armor => &self.armor,
            ItemCategory::Item => &self.items,
            ItemCategory::Spell => &self.spells,
            ItemCategory::Condition => &self.conditions,
            ItemCategory::PipPurse => self.pip_purse.as_slice(),
        }
    }

    fn pip_purse(&self) -> Option<&CatalogEntry> {
        self.pip_purse.as_ref()
    }
}
