//! Layout override loader.

use std::path::Path;

use crate::layout::{LayoutConfig, ProfileSection};
use crate::loaders::{LoadResult, read_file};

/// Loader for layout parameters from TOML files.
pub struct LayoutLoader;

impl LayoutLoader {
    /// Load layout parameters from a TOML file. Missing sections keep their
    /// built-in values.
    pub fn load(path: &Path) -> LoadResult<LayoutConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LayoutConfig> {
        let config: LayoutConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse layout TOML: {}", e))?;
        if config.grid.width == 0 || config.grid.height == 0 {
            anyhow::bail!(
                "Layout grid must have at least one cell, got {}x{}",
                config.grid.width,
                config.grid.height
            );
        }
        for (name, section) in [("desktop", &config.desktop), ("mobile", &config.mobile)] {
            Self::check_profile(name, section)?;
        }
        Ok(config)
    }

    /// Cell sizes must be finite and positive; padding finite and non-negative.
    fn check_profile(name: &str, section: &ProfileSection) -> LoadResult<()> {
        let size = section.cell_size;
        if !(size.is_finite() && size > 0.0) {
            anyhow::bail!("Layout {name} cell_size must be a positive number, got {size}");
        }
        let padding = section.grid_padding;
        if !(padding.is_finite() && padding >= 0.0) {
            anyhow::bail!("Layout {name} grid_padding must be a non-negative number, got {padding}");
        }
        Ok(())
    }
}
