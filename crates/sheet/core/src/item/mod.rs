//! Inventory item records.
//!
//! An [`Item`] pairs common fields (identity, size, rotation, placement,
//! usage) with an [`ItemKind`] carrying only the data its category needs.

mod kind;
mod usage;

use core::fmt;
use core::str::FromStr;

use uuid::Uuid;

pub use kind::{ItemCategory, ItemKind, PipPurse, WeaponClass};
pub use usage::UsageTrack;

use crate::geometry::{Cell, Footprint, Rotation, SizeCategory};
use crate::layout::PixelPoint;

/// Stable unique identifier of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub Uuid);

impl ItemId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Where an item currently lives. Exactly one position is meaningful.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "area", rename_all = "kebab-case"))]
pub enum Placement {
    /// Snapped to an integer cell of the inventory grid.
    Grid { cell: Cell },
    /// Free-form pixel position inside the scratch area's content box.
    Scratch { position: PixelPoint },
}

impl Placement {
    /// Where freshly created items land in the scratch area.
    pub const DEFAULT_SCRATCH: PixelPoint = PixelPoint::new(50.0, 50.0);

    pub const fn scratch_default() -> Self {
        Placement::Scratch {
            position: Self::DEFAULT_SCRATCH,
        }
    }

    /// Scratch position for the `index`-th item of a batch: three columns,
    /// new row every three items.
    pub fn staggered(index: usize) -> PixelPoint {
        let column = (index % 3) as f64;
        let row = (index / 3) as f64;
        PixelPoint::new(50.0 + column * 150.0, 50.0 + row * 100.0)
    }

    pub fn is_in_grid(&self) -> bool {
        matches!(self, Placement::Grid { .. })
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::scratch_default()
    }
}

/// A single inventory card.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub size: SizeCategory,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Rotation,
    #[cfg_attr(feature = "serde", serde(default))]
    pub placement: Placement,
    #[cfg_attr(feature = "serde", serde(default))]
    pub usage: UsageTrack,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub image_key: Option<String>,
}

impl Item {
    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }

    /// Stored footprint, ignoring rotation.
    pub fn base_footprint(&self) -> Footprint {
        self.size.footprint()
    }

    /// Footprint used for collision at the current rotation.
    pub fn footprint(&self) -> Footprint {
        self.footprint_at(self.rotation)
    }

    pub fn footprint_at(&self, rotation: Rotation) -> Footprint {
        self.base_footprint().rotated(rotation)
    }

    pub fn is_in_grid(&self) -> bool {
        self.placement.is_in_grid()
    }

    pub fn grid_cell(&self) -> Option<Cell> {
        match self.placement {
            Placement::Grid { cell } => Some(cell),
            Placement::Scratch { .. } => None,
        }
    }

    pub fn scratch_position(&self) -> Option<PixelPoint> {
        match self.placement {
            Placement::Scratch { position } => Some(position),
            Placement::Grid { .. } => None,
        }
    }

    /// Copy of this item committed to a grid cell.
    pub fn placed_at(&self, cell: Cell) -> Self {
        Self {
            placement: Placement::Grid { cell },
            ..self.clone()
        }
    }

    /// Copy of this item moved to a scratch position.
    pub fn moved_to_scratch(&self, position: PixelPoint) -> Self {
        Self {
            placement: Placement::Scratch { position },
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dagger() -> Item {
        Item {
            id: ItemId::new(),
            name: "Dagger".into(),
            kind: ItemKind::empty(ItemCategory::Weapon),
            size: SizeCategory::Wide,
            rotation: Rotation::Deg90,
            placement: Placement::Grid {
                cell: Cell::new(3, 0),
            },
            usage: UsageTrack::with_capacity(3),
            image_key: None,
        }
    }

    #[test]
    fn placement_states_are_exclusive() {
        let item = dagger();
        assert!(item.is_in_grid());
        assert_eq!(item.grid_cell(), Some(Cell::new(3, 0)));
        assert_eq!(item.scratch_position(), None);

        let moved = item.moved_to_scratch(PixelPoint::new(10.0, 20.0));
        assert!(!moved.is_in_grid());
        assert_eq!(moved.grid_cell(), None);
        assert_eq!(moved.id, item.id);
    }

    #[test]
    fn rotated_footprint_swaps_axes() {
        let item = dagger();
        assert_eq!(item.base_footprint(), Footprint::new(2, 1));
        assert_eq!(item.footprint(), Footprint::new(1, 2));
    }

    #[test]
    fn staggered_positions_wrap_every_three() {
        assert_eq!(Placement::staggered(0), PixelPoint::new(50.0, 50.0));
        assert_eq!(Placement::staggered(2), PixelPoint::new(350.0, 50.0));
        assert_eq!(Placement::staggered(4), PixelPoint::new(200.0, 150.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn item_round_trips_through_json() {
        let item = dagger();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["rotation"], 90);
        assert_eq!(json["kind"]["type"], "weapon");
        assert_eq!(json["placement"]["area"], "grid");

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
