//! Pixel-space types and per-profile layout metrics.
//!
//! All offsets are linear in the cell size, so switching between the desktop
//! and mobile profiles only substitutes constants.

use core::ops::{Add, Sub};

/// Point in screen or region-local pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for PixelPoint {
    type Output = PixelPoint;
    fn add(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PixelPoint {
    type Output = PixelPoint;
    fn sub(self, rhs: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned screen rectangle, as reported by a bounding-box query.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub origin: PixelPoint,
    pub size: PixelSize,
}

impl PixelRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: PixelPoint::new(x, y),
            size: PixelSize::new(width, height),
        }
    }

    pub fn contains(&self, point: PixelPoint) -> bool {
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && point.x <= self.origin.x + self.size.width
            && point.y <= self.origin.y + self.size.height
    }
}

/// Per-edge padding. Values may be negative where the content box is allowed
/// to bleed past the container's border.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Insets {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            left: value,
            bottom: value,
            right: value,
        }
    }

    pub const fn top_left(&self) -> PixelPoint {
        PixelPoint::new(self.left, self.top)
    }

    pub const fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    pub const fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

/// Device class the layout is tuned for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LayoutProfile {
    #[default]
    Desktop,
    Mobile,
}

impl LayoutProfile {
    /// Viewports narrower than this are treated as mobile.
    pub const MOBILE_BREAKPOINT: f64 = 768.0;

    /// Picks a profile from the viewport width and touch capability.
    pub fn detect(viewport_width: f64, has_touch: bool) -> Self {
        if viewport_width < Self::MOBILE_BREAKPOINT || has_touch {
            LayoutProfile::Mobile
        } else {
            LayoutProfile::Desktop
        }
    }
}

/// Pixel metrics shared by the grid and scratch regions.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutMetrics {
    pub profile: LayoutProfile,
    pub cell_size: f64,
    /// Gap between adjacent grid cells.
    pub grid_gap: f64,
    /// Padding of the grid container on every edge.
    pub grid_padding: f64,
    /// Render offset of cell (0, 0) relative to the inventory container.
    pub grid_offset: PixelPoint,
    pub scratch_padding: Insets,
}

impl LayoutMetrics {
    pub const DESKTOP_CELL_SIZE: f64 = 128.0;
    pub const MOBILE_CELL_SIZE: f64 = 64.0;
    pub const GRID_GAP: f64 = 2.0;
    pub const DESKTOP_GRID_PADDING: f64 = 16.0;
    pub const MOBILE_GRID_PADDING: f64 = 8.0;

    pub fn desktop() -> Self {
        Self::from_cell_size(
            LayoutProfile::Desktop,
            Self::DESKTOP_CELL_SIZE,
            Self::DESKTOP_GRID_PADDING,
        )
    }

    pub fn mobile() -> Self {
        Self::from_cell_size(
            LayoutProfile::Mobile,
            Self::MOBILE_CELL_SIZE,
            Self::MOBILE_GRID_PADDING,
        )
    }

    pub fn for_profile(profile: LayoutProfile) -> Self {
        match profile {
            LayoutProfile::Desktop => Self::desktop(),
            LayoutProfile::Mobile => Self::mobile(),
        }
    }

    /// Derives every offset from `cell_size`.
    pub fn from_cell_size(profile: LayoutProfile, cell_size: f64, grid_padding: f64) -> Self {
        let scaled = |factor: f64| (cell_size * factor).round();
        Self {
            profile,
            cell_size,
            grid_gap: Self::GRID_GAP,
            grid_padding,
            grid_offset: PixelPoint::new(scaled(0.14), scaled(0.52)),
            scratch_padding: Insets {
                top: scaled(-0.58),
                left: scaled(-0.09),
                bottom: scaled(1.22),
                right: scaled(0.25),
            },
        }
    }

    /// Distance between the top-left corners of neighbouring cells.
    pub fn cell_stride(&self) -> f64 {
        self.cell_size + self.grid_gap
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::desktop()
    }
}
