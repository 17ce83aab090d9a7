use crate::geometry::{Cell, Footprint, GridDimensions};
use crate::layout::{Insets, LayoutMetrics, PixelPoint, PixelRect, PixelSize};

/// Mapping between screen pixels and a region's logical positions.
///
/// Both directions work on an item's top-left corner. `pixel_to_logical`
/// always yields a position at which `footprint` is fully contained.
pub trait RegionTransform {
    type Logical;

    fn pixel_to_logical(&self, top_left: PixelPoint, footprint: Footprint) -> Self::Logical;

    fn logical_to_pixel(&self, logical: Self::Logical) -> PixelPoint;
}

/// The inventory grid as laid out on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridRegion {
    content_origin: PixelPoint,
    stride: f64,
    dims: GridDimensions,
}

impl GridRegion {
    pub fn new(rect: PixelRect, metrics: &LayoutMetrics, dims: GridDimensions) -> Self {
        let padding = Insets::uniform(metrics.grid_padding);
        Self {
            content_origin: rect.origin + padding.top_left(),
            stride: metrics.cell_stride(),
            dims,
        }
    }

    pub fn dims(&self) -> GridDimensions {
        self.dims
    }

    /// Nearest cell to `top_left` with no bounds handling.
    pub fn snap(&self, top_left: PixelPoint) -> (i64, i64) {
        let local = top_left - self.content_origin;
        (
            (local.x / self.stride).round() as i64,
            (local.y / self.stride).round() as i64,
        )
    }

    /// Pulls `(x, y)` back so `footprint` stays inside the grid. Footprints
    /// larger than the grid pin to the origin.
    pub fn clamp(&self, x: i64, y: i64, footprint: Footprint) -> Cell {
        let max_x = (self.dims.width as i64 - footprint.width as i64).max(0);
        let max_y = (self.dims.height as i64 - footprint.height as i64).max(0);
        Cell::new(x.clamp(0, max_x) as i32, y.clamp(0, max_y) as i32)
    }
}

impl RegionTransform for GridRegion {
    type Logical = Cell;

    fn pixel_to_logical(&self, top_left: PixelPoint, footprint: Footprint) -> Cell {
        let (x, y) = self.snap(top_left);
        self.clamp(x, y, footprint)
    }

    fn logical_to_pixel(&self, cell: Cell) -> PixelPoint {
        self.content_origin
            + PixelPoint::new(cell.x as f64 * self.stride, cell.y as f64 * self.stride)
    }
}

/// The free-form scratch area. Logical positions are pixels relative to the
/// padded content box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScratchRegion {
    content_origin: PixelPoint,
    content_size: PixelSize,
    cell_size: f64,
}

impl ScratchRegion {
    pub fn new(rect: PixelRect, metrics: &LayoutMetrics) -> Self {
        let padding = metrics.scratch_padding;
        Self {
            content_origin: rect.origin + padding.top_left(),
            content_size: PixelSize::new(
                rect.size.width - padding.horizontal(),
                rect.size.height - padding.vertical(),
            ),
            cell_size: metrics.cell_size,
        }
    }

    /// Region whose content box is given directly.
    pub fn from_content(origin: PixelPoint, width: f64, height: f64, cell_size: f64) -> Self {
        Self {
            content_origin: origin,
            content_size: PixelSize::new(width, height),
            cell_size,
        }
    }

    pub fn content_size(&self) -> PixelSize {
        self.content_size
    }

    pub fn item_size(&self, footprint: Footprint) -> PixelSize {
        PixelSize::new(
            footprint.width as f64 * self.cell_size,
            footprint.height as f64 * self.cell_size,
        )
    }

    /// Clamps each axis into `[0, content - item]`. When the item is larger
    /// than the box the lower bound wins.
    pub fn clamp(&self, position: PixelPoint, footprint: Footprint) -> PixelPoint {
        let item = self.item_size(footprint);
        PixelPoint::new(
            position
                .x
                .min(self.content_size.width - item.width)
                .max(0.0),
            position
                .y
                .min(self.content_size.height - item.height)
                .max(0.0),
        )
    }

    /// Whether `footprint` at `position` lies inside the content box.
    pub fn contains(&self, position: PixelPoint, footprint: Footprint) -> bool {
        let item = self.item_size(footprint);
        position.x >= 0.0
            && position.y >= 0.0
            && position.x + item.width <= self.content_size.width
            && position.y + item.height <= self.content_size.height
    }
}

impl RegionTransform for ScratchRegion {
    type Logical = PixelPoint;

    fn pixel_to_logical(&self, top_left: PixelPoint, footprint: Footprint) -> PixelPoint {
        self.clamp(top_left - self.content_origin, footprint)
    }

    fn logical_to_pixel(&self, position: PixelPoint) -> PixelPoint {
        self.content_origin + position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_snaps_to_nearest_cell() {
        let metrics = LayoutMetrics::desktop();
        let region = GridRegion::new(
            PixelRect::new(100.0, 200.0, 680.0, 290.0),
            &metrics,
            GridDimensions::DEFAULT,
        );
        // content origin (116, 216), stride 130
        let pointer = PixelPoint::new(116.0 + 190.0, 216.0 + 60.0);
        assert_eq!(
            region.pixel_to_logical(pointer, Footprint::new(1, 1)),
            Cell::new(1, 0)
        );
        assert_eq!(
            region.logical_to_pixel(Cell::new(2, 1)),
            PixelPoint::new(376.0, 346.0)
        );
    }

    #[test]
    fn grid_clamps_footprint_inside_bounds() {
        let metrics = LayoutMetrics::desktop();
        let region = GridRegion::new(
            PixelRect::new(0.0, 0.0, 680.0, 290.0),
            &metrics,
            GridDimensions::DEFAULT,
        );
        let far = PixelPoint::new(2000.0, 2000.0);
        assert_eq!(
            region.pixel_to_logical(far, Footprint::new(2, 2)),
            Cell::new(3, 0)
        );
        let before = PixelPoint::new(-500.0, -500.0);
        assert_eq!(
            region.pixel_to_logical(before, Footprint::new(1, 1)),
            Cell::ORIGIN
        );
    }

    #[test]
    fn scratch_lower_bound_wins_for_oversized_items() {
        let region = ScratchRegion::from_content(PixelPoint::ZERO, 100.0, 100.0, 128.0);
        assert_eq!(
            region.clamp(PixelPoint::new(30.0, 30.0), Footprint::new(1, 1)),
            PixelPoint::ZERO
        );
    }

    #[test]
    fn scratch_round_trips_inside_content_box() {
        let metrics = LayoutMetrics::mobile();
        let region = ScratchRegion::new(PixelRect::new(10.0, 400.0, 600.0, 300.0), &metrics);
        let inside = PixelPoint::new(25.0, 40.0);
        let screen = region.logical_to_pixel(inside);
        assert_eq!(region.pixel_to_logical(screen, Footprint::new(1, 1)), inside);
        assert!(region.contains(inside, Footprint::new(2, 2)));
    }
}
