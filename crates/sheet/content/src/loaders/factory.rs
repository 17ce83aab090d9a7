//! Content factory for loading sheet data from a data directory.

use std::path::{Path, PathBuf};

use crate::catalog::ItemCatalog;
use crate::layout::LayoutConfig;
use crate::loaders::{CatalogLoader, LayoutLoader, LoadResult};

/// Content factory that loads sheet content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── catalog.ron   (optional, embedded catalog otherwise)
/// └── layout.toml   (optional, built-in metrics otherwise)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CATALOG_FILE: &'static str = "catalog.ron";
    pub const LAYOUT_FILE: &'static str = "layout.toml";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load the catalog from `catalog.ron`, falling back to the embedded one
    /// when the file does not exist.
    pub fn load_catalog(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join(Self::CATALOG_FILE);
        if path.exists() {
            CatalogLoader::load(&path)
        } else {
            CatalogLoader::embedded()
        }
    }

    /// Load layout overrides from `layout.toml`, falling back to defaults
    /// when the file does not exist.
    pub fn load_layout(&self) -> LoadResult<LayoutConfig> {
        let path = self.data_dir.join(Self::LAYOUT_FILE);
        if path.exists() {
            LayoutLoader::load(&path)
        } else {
            Ok(LayoutConfig::default())
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/sheet-data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/sheet-data"));
    }
}
