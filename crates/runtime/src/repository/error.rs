//! Error types raised by repository implementations.

use sheet_core::{ErrorSeverity, SheetError};
use thiserror::Error;

use crate::character::CharacterId;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("character repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),
}

impl From<serde_json::Error> for RepositoryError {
    fn from(error: serde_json::Error) -> Self {
        Self::Json(error.to_string())
    }
}

impl SheetError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::CharacterNotFound(_) => ErrorSeverity::Validation,
            Self::Io(_) => ErrorSeverity::Recoverable,
            Self::LockPoisoned | Self::Json(_) | Self::CorruptedData(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Io(_) => "REPOSITORY_IO",
            Self::Json(_) => "REPOSITORY_JSON",
            Self::CorruptedData(_) => "REPOSITORY_CORRUPTED_DATA",
            Self::CharacterNotFound(_) => "REPOSITORY_CHARACTER_NOT_FOUND",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
