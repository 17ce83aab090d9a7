//! Grid legality checks and rotation handling.
//!
//! The engine is stateless apart from the grid dimensions: every query takes
//! the current item snapshot and answers for that snapshot only. Collision
//! always uses each item's rotation-adjusted footprint.

mod error;
mod occupancy;

pub use error::{PlacementError, PlacementViolation};
pub use occupancy::OccupancyMap;

use crate::geometry::{Cell, GridDimensions, Rotation};
use crate::item::{Item, Placement};
use crate::translate::ScratchRegion;

/// Result of a rotation request.
#[derive(Clone, Debug, PartialEq)]
pub enum RotationOutcome {
    /// Rotated without leaving its cell (or its scratch spot, possibly clamped).
    Rotated(Item),
    /// Rotated, but the old cell could not hold the new footprint.
    Relocated { item: Item, from: Cell, to: Cell },
    /// No cell in the grid fits the rotated footprint; nothing changed.
    Rejected,
}

impl RotationOutcome {
    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Rotated(item) | Self::Relocated { item, .. } => Some(item),
            Self::Rejected => None,
        }
    }

    pub fn into_item(self) -> Option<Item> {
        match self {
            Self::Rotated(item) | Self::Relocated { item, .. } => Some(item),
            Self::Rejected => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementEngine {
    dims: GridDimensions,
}

impl PlacementEngine {
    pub fn new(dims: GridDimensions) -> Self {
        Self { dims }
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    /// Validates `item` at `target` using its current rotation.
    pub fn check_placement(
        &self,
        item: &Item,
        target: Cell,
        items: &[Item],
    ) -> Result<(), PlacementError> {
        self.check_rotated(item, item.rotation, target, items)
    }

    /// Validates `item` at `target` as if it had `rotation`. The item itself
    /// never blocks its own placement.
    pub fn check_rotated(
        &self,
        item: &Item,
        rotation: Rotation,
        target: Cell,
        items: &[Item],
    ) -> Result<(), PlacementError> {
        let occupancy = OccupancyMap::build(self.dims, items, Some(item.id));
        self.check_against(&occupancy, item, rotation, target)
    }

    pub fn can_place(&self, item: &Item, target: Cell, items: &[Item]) -> bool {
        self.check_placement(item, target, items).is_ok()
    }

    /// First cell in row-major order that holds `item` at `rotation`.
    pub fn first_fit(&self, item: &Item, rotation: Rotation, items: &[Item]) -> Option<Cell> {
        let occupancy = OccupancyMap::build(self.dims, items, Some(item.id));
        let footprint = item.footprint_at(rotation);
        let max_x = self.dims.width.checked_sub(footprint.width)? as i32;
        let max_y = self.dims.height.checked_sub(footprint.height)? as i32;

        (0..=max_y)
            .flat_map(|y| (0..=max_x).map(move |x| Cell::new(x, y)))
            .find(|&cell| self.check_against(&occupancy, item, rotation, cell).is_ok())
    }

    /// Toggles the item's rotation.
    ///
    /// Grid items keep their cell when the rotated footprint still fits there,
    /// otherwise they move to the first fitting cell, otherwise the rotation is
    /// rejected. Scratch items always rotate; when `scratch` is given their
    /// position is clamped so the new footprint stays inside it.
    pub fn rotate(
        &self,
        item: &Item,
        items: &[Item],
        scratch: Option<&ScratchRegion>,
    ) -> RotationOutcome {
        let rotation = item.rotation.toggled();

        match item.placement {
            Placement::Scratch { position } => {
                let position = match scratch {
                    Some(region) => region.clamp(position, item.footprint_at(rotation)),
                    None => position,
                };
                RotationOutcome::Rotated(Item {
                    rotation,
                    placement: Placement::Scratch { position },
                    ..item.clone()
                })
            }
            Placement::Grid { cell } => {
                let occupancy = OccupancyMap::build(self.dims, items, Some(item.id));
                if self.check_against(&occupancy, item, rotation, cell).is_ok() {
                    return RotationOutcome::Rotated(Item {
                        rotation,
                        ..item.clone()
                    });
                }

                match self.first_fit(item, rotation, items) {
                    Some(to) => RotationOutcome::Relocated {
                        item: Item {
                            rotation,
                            placement: Placement::Grid { cell: to },
                            ..item.clone()
                        },
                        from: cell,
                        to,
                    },
                    None => RotationOutcome::Rejected,
                }
            }
        }
    }

    /// Lists committed grid items that break the bounds or no-overlap rules.
    ///
    /// Items are visited in collection order; the earlier item of an
    /// overlapping pair is treated as the rightful occupant. Items that hang
    /// off the grid claim no cells.
    pub fn audit(&self, items: &[Item]) -> Vec<PlacementViolation> {
        let mut occupancy = OccupancyMap::new(self.dims);
        let mut violations = Vec::new();

        for item in items {
            let Some(origin) = item.grid_cell() else {
                continue;
            };
            let footprint = item.footprint();
            if !self.dims.fits(origin, footprint) {
                violations.push(PlacementViolation {
                    item: item.id,
                    error: PlacementError::OutOfBounds {
                        origin,
                        footprint,
                        grid: self.dims,
                    },
                });
            } else if let Some((cell, occupant)) = occupancy.mark(item.id, origin, footprint) {
                violations.push(PlacementViolation {
                    item: item.id,
                    error: PlacementError::Overlap { cell, occupant },
                });
            }
        }

        violations
    }

    fn check_against(
        &self,
        occupancy: &OccupancyMap,
        item: &Item,
        rotation: Rotation,
        target: Cell,
    ) -> Result<(), PlacementError> {
        let footprint = item.footprint_at(rotation);
        if !self.dims.fits(target, footprint) {
            return Err(PlacementError::OutOfBounds {
                origin: target,
                footprint,
                grid: self.dims,
            });
        }
        match occupancy.first_conflict(target, footprint) {
            Some((cell, occupant)) => Err(PlacementError::Overlap { cell, occupant }),
            None => Ok(()),
        }
    }
}
