//! Grid geometry expressed in cells, independent of pixels.
//!
//! Items occupy rectangular footprints drawn from a small fixed set of size
//! categories. Rotation swaps the effective width and height without touching
//! the stored category.

use core::fmt;

use arrayvec::ArrayVec;

/// Dimensions of the inventory grid in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub width: u32,
    pub height: u32,
}

impl GridDimensions {
    /// Paws (2 cells), body (2 cells) and six general slots.
    pub const DEFAULT: Self = Self::new(5, 2);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width as i32 && cell.y < self.height as i32
    }

    /// Returns true when `footprint` anchored at `origin` lies entirely inside the grid.
    pub fn fits(&self, origin: Cell, footprint: Footprint) -> bool {
        origin.x >= 0
            && origin.y >= 0
            && origin.x as i64 + footprint.width as i64 <= self.width as i64
            && origin.y as i64 + footprint.height as i64 <= self.height as i64
    }

    /// Row-major index of `cell`, or `None` when outside the grid.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.y as usize * self.width as usize + cell.x as usize)
    }

    /// Every anchor cell, top-to-bottom then left-to-right.
    pub fn row_major(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Integer grid coordinate of an item's top-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Cell shifted by `(dx, dy)`, or `None` when a coordinate overflows.
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Named size categories used by the catalog.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SizeCategory {
    /// 1×1
    #[default]
    Small,
    /// 2×1
    Wide,
    /// 1×2
    Tall,
    /// 2×2
    Large,
}

impl SizeCategory {
    pub const fn footprint(self) -> Footprint {
        match self {
            SizeCategory::Small => Footprint::new(1, 1),
            SizeCategory::Wide => Footprint::new(2, 1),
            SizeCategory::Tall => Footprint::new(1, 2),
            SizeCategory::Large => Footprint::new(2, 2),
        }
    }

    /// Parses a catalog size key, falling back to [`SizeCategory::Small`] for
    /// anything missing or unrecognised.
    pub fn from_key(key: Option<&str>) -> Self {
        key.and_then(|key| key.trim().parse().ok())
            .unwrap_or_default()
    }
}

/// Width × height of an item in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Footprint {
    pub width: u32,
    pub height: u32,
}

impl Footprint {
    /// Upper bound on cells covered by any size category.
    pub const MAX_CELLS: usize = 4;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn transposed(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// Effective footprint once `rotation` is applied.
    pub const fn rotated(self, rotation: Rotation) -> Self {
        match rotation {
            Rotation::Deg0 => self,
            Rotation::Deg90 => self.transposed(),
        }
    }

    /// Cells covered when anchored at `origin`. Cells whose coordinates
    /// would overflow `i32` are left out.
    pub fn cells(self, origin: Cell) -> ArrayVec<Cell, { Footprint::MAX_CELLS }> {
        let mut cells = ArrayVec::new();
        for dy in 0..self.height as i32 {
            for dx in 0..self.width as i32 {
                let Some(cell) = origin.offset(dx, dy) else {
                    continue;
                };
                // Size categories never exceed 2×2.
                if cells.try_push(cell).is_err() {
                    return cells;
                }
            }
        }
        cells
    }
}

impl fmt::Display for Footprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Quarter-turn rotation state.
///
/// Serialized as the number of degrees (`0` or `90`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
}

impl Rotation {
    pub const fn toggled(self) -> Self {
        match self {
            Rotation::Deg0 => Rotation::Deg90,
            Rotation::Deg90 => Rotation::Deg0,
        }
    }

    pub const fn degrees(self) -> u16 {
        match self {
            Rotation::Deg0 => 0,
            Rotation::Deg90 => 90,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("rotation must be 0 or 90 degrees, got {0}")]
pub struct InvalidRotation(pub u16);

impl TryFrom<u16> for Rotation {
    type Error = InvalidRotation;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Rotation::Deg0),
            90 => Ok(Rotation::Deg90),
            other => Err(InvalidRotation(other)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}
