//! Item catalog loader.

use std::path::Path;

use crate::catalog::ItemCatalog;
use crate::loaders::{LoadResult, read_file};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.ron");

/// Loader for item catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load an item catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse catalog RON from a string.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))
    }

    /// Catalog compiled into the binary.
    pub fn embedded() -> LoadResult<ItemCatalog> {
        Self::parse(EMBEDDED_CATALOG)
    }
}
