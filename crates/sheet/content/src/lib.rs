//! Static sheet content and its loaders.
//!
//! - Item catalog (weapons, armor, gear, spells, conditions, pip purse) as RON
//! - Layout parameters (grid size, per-profile cell size and padding) as TOML
//!
//! Content is consumed through [`sheet_core::CatalogOracle`] and never ends up
//! in saved characters except as values copied onto new items.

pub mod catalog;
pub mod layout;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::ItemCatalog;
pub use layout::{GridSection, LayoutConfig, ProfileSection};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ContentFactory, LayoutLoader, LoadResult};
