//! Pointer coordinates ↔ logical item positions.
//!
//! Grid and scratch geometry share one abstraction, [`RegionTransform`], so
//! both regions derive padding and rounding the same way from
//! [`LayoutMetrics`]. [`Viewport`] ties the two regions to their on-screen
//! rectangles and resolves drops.

mod region;

pub use region::{GridRegion, RegionTransform, ScratchRegion};

use crate::geometry::{Cell, GridDimensions};
use crate::item::{Item, Placement};
use crate::layout::{LayoutMetrics, PixelPoint, PixelRect, PixelSize};

/// Region a pointer was released over.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DropZone {
    Grid,
    Scratch,
}

/// Pointer position relative to the grabbed item's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GrabOffset(pub PixelPoint);

/// Logical destination resolved from a drop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Nearest in-bounds cell; overlap is not yet checked.
    Grid(Cell),
    /// Clamped scratch position.
    Scratch(PixelPoint),
}

impl DropTarget {
    pub fn placement(self) -> Placement {
        match self {
            DropTarget::Grid(cell) => Placement::Grid { cell },
            DropTarget::Scratch(position) => Placement::Scratch { position },
        }
    }
}

/// Screen rectangles of the grid and scratch containers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub metrics: LayoutMetrics,
    pub dims: GridDimensions,
    pub grid: PixelRect,
    pub scratch: PixelRect,
}

impl Viewport {
    pub fn new(
        metrics: LayoutMetrics,
        dims: GridDimensions,
        grid: PixelRect,
        scratch: PixelRect,
    ) -> Self {
        Self {
            metrics,
            dims,
            grid,
            scratch,
        }
    }

    /// Grid at the origin with the scratch area stacked below it, both as
    /// wide as the padded grid. The scratch content box is two cells tall.
    pub fn stacked(metrics: LayoutMetrics, dims: GridDimensions) -> Self {
        let grid_size = grid_container_size(&metrics, dims);
        let padding = metrics.scratch_padding;
        let scratch = PixelRect::new(
            0.0,
            grid_size.height + metrics.grid_padding,
            grid_size.width,
            2.0 * metrics.cell_size + padding.vertical(),
        );
        Self::new(
            metrics,
            dims,
            PixelRect::new(0.0, 0.0, grid_size.width, grid_size.height),
            scratch,
        )
    }

    pub fn grid_region(&self) -> GridRegion {
        GridRegion::new(self.grid, &self.metrics, self.dims)
    }

    pub fn scratch_region(&self) -> ScratchRegion {
        ScratchRegion::new(self.scratch, &self.metrics)
    }

    /// Zone containing `point`. The grid wins where the rectangles overlap.
    pub fn hit_test(&self, point: PixelPoint) -> Option<DropZone> {
        if self.grid.contains(point) {
            Some(DropZone::Grid)
        } else if self.scratch.contains(point) {
            Some(DropZone::Scratch)
        } else {
            None
        }
    }

    /// On-screen top-left corner of `item` in whichever region holds it.
    pub fn item_origin(&self, item: &Item) -> PixelPoint {
        match item.placement {
            Placement::Grid { cell } => self.grid_region().logical_to_pixel(cell),
            Placement::Scratch { position } => self.scratch_region().logical_to_pixel(position),
        }
    }

    /// Remembers where on the item the pointer landed.
    pub fn grab_offset(&self, item: &Item, pointer: PixelPoint) -> GrabOffset {
        GrabOffset(pointer - self.item_origin(item))
    }

    /// Resolves the final pointer position into a destination for `item`,
    /// preserving the grab offset.
    pub fn resolve_drop(
        &self,
        item: &Item,
        zone: DropZone,
        pointer: PixelPoint,
        grab: GrabOffset,
    ) -> DropTarget {
        let top_left = pointer - grab.0;
        let footprint = item.footprint();
        match zone {
            DropZone::Grid => {
                DropTarget::Grid(self.grid_region().pixel_to_logical(top_left, footprint))
            }
            DropZone::Scratch => {
                DropTarget::Scratch(self.scratch_region().pixel_to_logical(top_left, footprint))
            }
        }
    }
}

/// Render offset of a grid item relative to the inventory container.
pub fn grid_render_offset(metrics: &LayoutMetrics, cell: Cell) -> PixelPoint {
    let stride = metrics.cell_stride();
    metrics.grid_offset + PixelPoint::new(cell.x as f64 * stride, cell.y as f64 * stride)
}

/// Outer size of the grid container: cells, gaps between them, padding.
pub fn grid_container_size(metrics: &LayoutMetrics, dims: GridDimensions) -> PixelSize {
    let span = |cells: u32| {
        let cells = cells as f64;
        cells * metrics.cell_size
            + (cells - 1.0).max(0.0) * metrics.grid_gap
            + 2.0 * metrics.grid_padding
    };
    PixelSize::new(span(dims.width), span(dims.height))
}
