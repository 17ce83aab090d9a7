use crate::item::ItemId;
use crate::layout::{LayoutProfile, PixelPoint};
use crate::translate::{DropZone, GrabOffset};

/// Pointer pressed on an item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStart {
    pub item: ItemId,
    pub pointer: PixelPoint,
}

/// Pointer released. The final pointer is `pointer_origin + delta`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEnd {
    pub pointer_origin: PixelPoint,
    pub delta: PixelPoint,
    /// Zone under the pointer at release, if any.
    pub over: Option<DropZone>,
}

impl DragEnd {
    pub fn pointer(&self) -> PixelPoint {
        self.pointer_origin + self.delta
    }
}

/// Drag in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    pub item: ItemId,
    pub grab: GrabOffset,
}

/// How the user moves items.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum InteractionMode {
    /// Continuous pointer drag.
    #[default]
    Drag,
    /// Select an item, then tap its destination.
    Tap,
}

impl InteractionMode {
    pub fn for_profile(profile: LayoutProfile) -> Self {
        match profile {
            LayoutProfile::Desktop => InteractionMode::Drag,
            LayoutProfile::Mobile => InteractionMode::Tap,
        }
    }
}
