//! Common error infrastructure for sheet-core.
//!
//! Domain errors (e.g. [`PlacementError`](crate::placement::PlacementError))
//! live next to the rules that produce them and implement [`SheetError`] so
//! callers can classify them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the user can try a different cell or rotation
/// - **Validation**: the request itself is malformed
/// - **Internal**: committed state violates an inventory invariant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: target cell occupied, footprint hangs off the grid.
    Recoverable,

    /// Examples: unknown item id.
    Validation,

    /// Examples: two committed grid items overlap after loading a save.
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all sheet-core errors.
pub trait SheetError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the variant, useful in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
