use crate::collection::ItemCollection;
use crate::error::{ErrorSeverity, SheetError};
use crate::placement::PlacementError;

/// Result of a controller operation.
#[derive(Clone, Debug, PartialEq)]
pub enum InventoryOutcome {
    /// New committed snapshot; the observer has already seen it.
    Changed(ItemCollection),
    /// Nothing was committed.
    Unchanged(UnchangedReason),
}

impl InventoryOutcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed(_))
    }

    pub fn items(&self) -> Option<&ItemCollection> {
        match self {
            Self::Changed(items) => Some(items),
            Self::Unchanged(_) => None,
        }
    }

    pub fn into_items(self) -> Option<ItemCollection> {
        match self {
            Self::Changed(items) => Some(items),
            Self::Unchanged(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&UnchangedReason> {
        match self {
            Self::Changed(_) => None,
            Self::Unchanged(reason) => Some(reason),
        }
    }
}

/// Why an operation left the collection as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UnchangedReason {
    #[error("no item with that id")]
    UnknownItem,

    #[error("released outside the grid and scratch area")]
    NoDropZone,

    #[error("no drag in progress")]
    NoDragSession,

    #[error("no item selected")]
    NoSelection,

    #[error("can't place here: {0}")]
    PlacementRejected(PlacementError),

    #[error("can't rotate here")]
    RotationBlocked,

    /// The operation does not apply to this item's kind.
    #[error("operation does not apply to this item")]
    NotApplicable,

    /// Every item already satisfied the requested constraint.
    #[error("nothing to update")]
    NothingToDo,
}

impl SheetError for UnchangedReason {
    fn severity(&self) -> ErrorSeverity {
        use UnchangedReason::*;
        match self {
            UnknownItem | NoDragSession | NoSelection | NotApplicable => ErrorSeverity::Validation,
            NoDropZone | PlacementRejected(_) | RotationBlocked | NothingToDo => {
                ErrorSeverity::Recoverable
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use UnchangedReason::*;
        match self {
            UnknownItem => "INVENTORY_UNKNOWN_ITEM",
            NoDropZone => "INVENTORY_NO_DROP_ZONE",
            NoDragSession => "INVENTORY_NO_DRAG_SESSION",
            NoSelection => "INVENTORY_NO_SELECTION",
            PlacementRejected(inner) => inner.error_code(),
            RotationBlocked => "INVENTORY_ROTATION_BLOCKED",
            NotApplicable => "INVENTORY_NOT_APPLICABLE",
            NothingToDo => "INVENTORY_NOTHING_TO_DO",
        }
    }
}
