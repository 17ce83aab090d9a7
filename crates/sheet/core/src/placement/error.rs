//! Placement errors.

use crate::error::{ErrorSeverity, SheetError};
use crate::geometry::{Cell, Footprint, GridDimensions};
use crate::item::ItemId;

/// Why an item cannot be committed to a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// Footprint hangs past the grid edge.
    #[error("{footprint} footprint at {origin} does not fit in the {grid} grid")]
    OutOfBounds {
        origin: Cell,
        footprint: Footprint,
        grid: GridDimensions,
    },

    /// At least one candidate cell is covered by another grid item.
    #[error("cell {cell} is already occupied by item {occupant}")]
    Overlap { cell: Cell, occupant: ItemId },
}

impl SheetError for PlacementError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "PLACEMENT_OUT_OF_BOUNDS",
            Self::Overlap { .. } => "PLACEMENT_OVERLAP",
        }
    }
}

/// Committed grid item that breaks the bounds or no-overlap invariant.
///
/// Only reachable through data that bypassed the engine, such as a hand
/// edited save file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("item {item} violates grid placement: {error}")]
pub struct PlacementViolation {
    pub item: ItemId,
    pub error: PlacementError,
}

impl SheetError for PlacementViolation {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self.error {
            PlacementError::OutOfBounds { .. } => "AUDIT_OUT_OF_BOUNDS",
            PlacementError::Overlap { .. } => "AUDIT_OVERLAP",
        }
    }
}
