//! Tunable layout parameters.
//!
//! Offsets stay linear in the cell size; only the base cell size and grid
//! padding of each profile, plus the grid dimensions, are configurable.

use sheet_core::{GridDimensions, LayoutMetrics, LayoutProfile};

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    pub grid: GridSection,
    pub desktop: ProfileSection,
    pub mobile: ProfileSection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSection {
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileSection {
    pub cell_size: f64,
    pub grid_padding: f64,
}

impl LayoutConfig {
    pub fn dims(&self) -> GridDimensions {
        GridDimensions::new(self.grid.width, self.grid.height)
    }

    pub fn metrics(&self, profile: LayoutProfile) -> LayoutMetrics {
        let section = match profile {
            LayoutProfile::Desktop => self.desktop,
            LayoutProfile::Mobile => self.mobile,
        };
        LayoutMetrics::from_cell_size(profile, section.cell_size, section.grid_padding)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid: GridSection::default(),
            desktop: ProfileSection {
                cell_size: LayoutMetrics::DESKTOP_CELL_SIZE,
                grid_padding: LayoutMetrics::DESKTOP_GRID_PADDING,
            },
            mobile: ProfileSection {
                cell_size: LayoutMetrics::MOBILE_CELL_SIZE,
                grid_padding: LayoutMetrics::MOBILE_GRID_PADDING,
            },
        }
    }
}

impl Default for GridSection {
    fn default() -> Self {
        let dims = GridDimensions::DEFAULT;
        Self {
            width: dims.width,
            height: dims.height,
        }
    }
}
