//! Category-specific item data.

/// Flat category tag, as used by the catalog and the add-item UI.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum ItemCategory {
    Weapon,
    Armor,
    Item,
    Spell,
    Condition,
    PipPurse,
}

/// Weapon weight class.
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
pub enum WeaponClass {
    #[default]
    Light,
    Medium,
    Heavy,
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum ItemKind {
    Weapon {
        /// Damage die expression such as `d6` or `d6/d8`.
        damage: String,
        class: WeaponClass,
    },

    Armor {
        defense: u8,
    },

    /// Generic gear.
    Item,

    Spell {
        #[cfg_attr(feature = "serde", serde(default))]
        description: String,
    },

    /// Condition card occupying an inventory slot until cleared.
    Condition {
        description: String,
        clear_instructions: String,
    },

    PipPurse(PipPurse),
}

impl ItemKind {
    pub const DEFAULT_DAMAGE: &'static str = "d6";

    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Weapon { .. } => ItemCategory::Weapon,
            ItemKind::Armor { .. } => ItemCategory::Armor,
            ItemKind::Item => ItemCategory::Item,
            ItemKind::Spell { .. } => ItemCategory::Spell,
            ItemKind::Condition { .. } => ItemCategory::Condition,
            ItemKind::PipPurse(_) => ItemCategory::PipPurse,
        }
    }

    /// Minimal data for a category.
    pub fn empty(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Weapon => ItemKind::Weapon {
                damage: Self::DEFAULT_DAMAGE.to_string(),
                class: WeaponClass::default(),
            },
            ItemCategory::Armor => ItemKind::Armor { defense: 0 },
            ItemCategory::Item => ItemKind::Item,
            ItemCategory::Spell => ItemKind::Spell {
                description: String::new(),
            },
            ItemCategory::Condition => ItemKind::Condition {
                description: String::new(),
                clear_instructions: String::new(),
            },
            ItemCategory::PipPurse => ItemKind::PipPurse(PipPurse::default()),
        }
    }

    pub fn pip_purse(&self) -> Option<&PipPurse> {
        match self {
            ItemKind::PipPurse(purse) => Some(purse),
            _ => None,
        }
    }

    pub fn pip_purse_mut(&mut self) -> Option<&mut PipPurse> {
        match self {
            ItemKind::PipPurse(purse) => Some(purse),
            _ => None,
        }
    }
}

/// Currency balance bounded by a cap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "PipPurseFields"))]
pub struct PipPurse {
    value: u32,
    max: u32,
}

impl PipPurse {
    pub const DEFAULT_MAX: u32 = 250;

    /// Creates a purse, clamping `value` to `max`.
    pub fn new(value: u32, max: u32) -> Self {
        Self {
            value: value.min(max),
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Sets the balance, clamping into `[0, max]`.
    pub fn set_value(&mut self, value: i64) {
        self.value = value.clamp(0, self.max as i64) as u32;
    }
}

impl Default for PipPurse {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_MAX)
    }
}

/// Unvalidated wire shape; persisted purses are re-clamped on load.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct PipPurseFields {
    #[serde(default)]
    value: u32,
    #[serde(default = "default_pip_max")]
    max: u32,
}

#[cfg(feature = "serde")]
fn default_pip_max() -> u32 {
    PipPurse::DEFAULT_MAX
}

#[cfg(feature = "serde")]
impl From<PipPurseFields> for PipPurse {
    fn from(fields: PipPurseFields) -> Self {
        PipPurse::new(fields.value, fields.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pip_value_is_clamped() {
        let mut purse = PipPurse::default();
        purse.set_value(300);
        assert_eq!(purse.value(), 250);
        purse.set_value(-10);
        assert_eq!(purse.value(), 0);
        purse.set_value(42);
        assert_eq!(purse.value(), 42);
    }

    #[test]
    fn category_strings_are_kebab_case() {
        assert_eq!(ItemCategory::PipPurse.as_ref(), "pip-purse");
        assert_eq!("pip-purse".parse::<ItemCategory>(), Ok(ItemCategory::PipPurse));
        assert_eq!(
            ItemKind::empty(ItemCategory::Condition).category(),
            ItemCategory::Condition
        );
    }
}
