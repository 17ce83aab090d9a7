//! Static item templates and the oracle used to look them up.

use crate::item::{ItemCategory, WeaponClass};

/// Read-only template describing a named item's default stats.
///
/// Every field except `name` is optional; the factory fills gaps with
/// defaults instead of rejecting the entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CatalogEntry {
    pub name: String,
    /// Size key (`small`, `wide`, `tall`, `large`); anything else means small.
    pub size: Option<String>,
    pub damage: Option<String>,
    pub weapon_class: Option<WeaponClass>,
    pub defense: Option<u8>,
    pub max_usage_dots: Option<u8>,
    pub usage_dots: Option<u8>,
    pub description: Option<String>,
    pub clear_instructions: Option<String>,
    pub pip_value: Option<u32>,
    pub max_pip_value: Option<u32>,
    pub image_key: Option<String>,
}

impl CatalogEntry {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Lookup over the static item tables.
pub trait CatalogOracle: Send + Sync {
    /// Exact-name lookup across every category.
    fn find(&self, name: &str) -> Option<(ItemCategory, &CatalogEntry)>;

    /// Entries listed under `category`, in catalog order.
    fn entries(&self, category: ItemCategory) -> &[CatalogEntry];

    /// Template used when adding a currency purse.
    fn pip_purse(&self) -> Option<&CatalogEntry>;
}
