//! Inventory rules for the character sheet.
//!
//! `sheet-core` owns the tactile inventory: item records, grid geometry, the
//! placement engine that enforces bounds and no-overlap, and the translator
//! between pointer pixels and grid cells or scratch positions. It performs no
//! I/O; the runtime persists what the [`controller::InventoryController`]
//! commits.
pub mod catalog;
pub mod collection;
pub mod controller;
pub mod error;
pub mod factory;
pub mod geometry;
pub mod item;
pub mod layout;
pub mod placement;
pub mod translate;

pub use catalog::{CatalogEntry, CatalogOracle};
pub use collection::ItemCollection;
pub use controller::{
    Detached, DragEnd, DragSession, DragStart, InteractionMode, InventoryController,
    InventoryOutcome, ItemsObserver, UnchangedReason,
};
pub use error::{ErrorSeverity, SheetError};
pub use factory::ItemFactory;
pub use geometry::{Cell, Footprint, GridDimensions, InvalidRotation, Rotation, SizeCategory};
pub use item::{
    Item, ItemCategory, ItemId, ItemKind, PipPurse, Placement, UsageTrack, WeaponClass,
};
pub use layout::{Insets, LayoutMetrics, LayoutProfile, PixelPoint, PixelRect, PixelSize};
pub use placement::{
    OccupancyMap, PlacementEngine, PlacementError, PlacementViolation, RotationOutcome,
};
pub use translate::{
    DropTarget, DropZone, GrabOffset, GridRegion, RegionTransform, ScratchRegion, Viewport,
    grid_container_size, grid_render_offset,
};
