//! Item construction.
//!
//! Factories never fail and never touch existing items: missing or malformed
//! template data falls back to defaults, and every output carries a fresh id.

use crate::catalog::{CatalogEntry, CatalogOracle};
use crate::geometry::{Rotation, SizeCategory};
use crate::item::{Item, ItemCategory, ItemId, ItemKind, PipPurse, Placement, UsageTrack};
use crate::layout::PixelPoint;

pub struct ItemFactory;

impl ItemFactory {
    /// Minimal small item of `category` with no usage track.
    pub fn blank(category: ItemCategory) -> Item {
        Self::assemble(
            String::new(),
            ItemKind::empty(category),
            SizeCategory::Small,
            UsageTrack::default(),
            None,
            None,
        )
    }

    /// Builds an item from a catalog template.
    pub fn from_catalog(
        entry: &CatalogEntry,
        category: ItemCategory,
        scratch_position: Option<PixelPoint>,
    ) -> Item {
        let kind = match category {
            ItemCategory::Weapon => ItemKind::Weapon {
                damage: entry
                    .damage
                    .clone()
                    .unwrap_or_else(|| ItemKind::DEFAULT_DAMAGE.to_string()),
                class: entry.weapon_class.unwrap_or_default(),
            },
            ItemCategory::Armor => ItemKind::Armor {
                defense: entry.defense.unwrap_or(0),
            },
            ItemCategory::Item => ItemKind::Item,
            ItemCategory::Spell => ItemKind::Spell {
                description: entry.description.clone().unwrap_or_default(),
            },
            ItemCategory::Condition => ItemKind::Condition {
                description: entry.description.clone().unwrap_or_default(),
                clear_instructions: entry.clear_instructions.clone().unwrap_or_default(),
            },
            ItemCategory::PipPurse => ItemKind::PipPurse(PipPurse::new(
                entry.pip_value.unwrap_or(0),
                entry.max_pip_value.unwrap_or(PipPurse::DEFAULT_MAX),
            )),
        };

        Self::assemble(
            entry.name.clone(),
            kind,
            SizeCategory::from_key(entry.size.as_deref()),
            UsageTrack::new(
                entry.usage_dots.unwrap_or(0),
                entry.max_usage_dots.unwrap_or(0),
            ),
            entry.image_key.clone(),
            scratch_position,
        )
    }

    /// User-authored gear that matches no catalog entry.
    pub fn custom(name: impl Into<String>, scratch_position: Option<PixelPoint>) -> Item {
        Self::assemble(
            name.into(),
            ItemKind::Item,
            SizeCategory::Small,
            UsageTrack::with_capacity(UsageTrack::CUSTOM_CAPACITY),
            None,
            scratch_position,
        )
    }

    /// Looks `name` up in the catalog, falling back to [`ItemFactory::custom`].
    pub fn from_name<C>(catalog: &C, name: &str, scratch_position: Option<PixelPoint>) -> Item
    where
        C: CatalogOracle + ?Sized,
    {
        match catalog.find(name) {
            Some((category, entry)) => Self::from_catalog(entry, category, scratch_position),
            None => Self::custom(name, scratch_position),
        }
    }

    /// Currency purse from the catalog template, or an empty 250-pip purse.
    pub fn pip_purse<C>(catalog: &C, scratch_position: Option<PixelPoint>) -> Item
    where
        C: CatalogOracle + ?Sized,
    {
        match catalog.pip_purse() {
            Some(entry) => Self::from_catalog(entry, ItemCategory::PipPurse, scratch_position),
            None => {
                let mut purse = Self::blank(ItemCategory::PipPurse);
                purse.name = "Pip Purse".to_string();
                if let Some(position) = scratch_position {
                    purse.placement = Placement::Scratch { position };
                }
                purse
            }
        }
    }

    fn assemble(
        name: String,
        kind: ItemKind,
        size: SizeCategory,
        usage: UsageTrack,
        image_key: Option<String>,
        scratch_position: Option<PixelPoint>,
    ) -> Item {
        Item {
            id: ItemId::new(),
            name,
            kind,
            size,
            rotation: Rotation::Deg0,
            placement: Placement::Scratch {
                position: scratch_position.unwrap_or(Placement::DEFAULT_SCRATCH),
            },
            usage,
            image_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::WeaponClass;

    struct OneSword {
        weapons: Vec<CatalogEntry>,
    }

    impl OneSword {
        fn new() -> Self {
            Self {
                weapons: vec![CatalogEntry {
                    size: Some("wide".into()),
                    damage: Some("d6/d8".into()),
                    weapon_class: Some(WeaponClass::Medium),
                    max_usage_dots: Some(3),
                    ..CatalogEntry::named("Sword")
                }],
            }
        }
    }

    impl CatalogOracle for OneSword {
        fn find(&self, name: &str) -> Option<(ItemCategory, &CatalogEntry)> {
            self.weapons
                .iter()
                .find(|entry| entry.name == name)
                .map(|entry| (ItemCategory::Weapon, entry))
        }

        fn entries(&self, category: ItemCategory) -> &[CatalogEntry] {
            match category {
                ItemCategory::Weapon => &self.weapons,
                _ => &[],
            }
        }

        fn pip_purse(&self) -> Option<&CatalogEntry> {
            None
        }
    }

    #[test]
    fn blank_items_start_small_in_scratch() {
        let item = ItemFactory::blank(ItemCategory::Armor);
        assert_eq!(item.size, SizeCategory::Small);
        assert_eq!(item.usage, UsageTrack::default());
        assert_eq!(item.scratch_position(), Some(PixelPoint::new(50.0, 50.0)));
    }

    #[test]
    fn catalog_entry_maps_weapon_fields() {
        let catalog = OneSword::new();
        let item = ItemFactory::from_name(&catalog, "Sword", Some(PixelPoint::new(200.0, 50.0)));
        assert_eq!(item.name, "Sword");
        assert_eq!(item.size, SizeCategory::Wide);
        assert_eq!(item.usage.capacity(), 3);
        assert_eq!(
            item.kind,
            ItemKind::Weapon {
                damage: "d6/d8".into(),
                class: WeaponClass::Medium
            }
        );
        assert_eq!(item.scratch_position(), Some(PixelPoint::new(200.0, 50.0)));
    }

    #[test]
    fn unknown_size_key_falls_back_to_small() {
        let entry = CatalogEntry {
            size: Some("enormous".into()),
            ..CatalogEntry::named("Boulder")
        };
        let item = ItemFactory::from_catalog(&entry, ItemCategory::Item, None);
        assert_eq!(item.size, SizeCategory::Small);
    }

    #[test]
    fn every_item_gets_a_fresh_id() {
        let entry = CatalogEntry::named("Torch");
        let a = ItemFactory::from_catalog(&entry, ItemCategory::Item, None);
        let b = ItemFactory::from_catalog(&entry, ItemCategory::Item, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn purse_falls_back_to_default_cap() {
        let item = ItemFactory::pip_purse(&OneSword::new(), None);
        let purse = item.kind.pip_purse().expect("purse kind");
        assert_eq!(purse.max(), PipPurse::DEFAULT_MAX);
        assert_eq!(purse.value(), 0);
    }
}
