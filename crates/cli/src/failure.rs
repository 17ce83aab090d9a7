//! Maps command failures onto exit codes and log levels.

use std::process::ExitCode;

use console::style;
use sheet_core::{ErrorSeverity, PlacementError, PlacementViolation, SheetError, UnchangedReason};
use sheet_runtime::RepositoryError;

/// Exit status for failures that carry no sheet error.
pub const EXIT_GENERAL: u8 = 1;

/// The first sheet error found along `err`'s cause chain.
pub fn classify(err: &anyhow::Error) -> Option<(ErrorSeverity, &'static str)> {
    err.chain().find_map(|cause| {
        let sheet: &dyn SheetError = if let Some(e) = cause.downcast_ref::<UnchangedReason>() {
            e
        } else if let Some(e) = cause.downcast_ref::<PlacementError>() {
            e
        } else if let Some(e) = cause.downcast_ref::<PlacementViolation>() {
            e
        } else if let Some(e) = cause.downcast_ref::<RepositoryError>() {
            e
        } else {
            return None;
        };
        Some((sheet.severity(), sheet.error_code()))
    })
}

pub fn exit_status(severity: Option<ErrorSeverity>) -> u8 {
    match severity {
        Some(ErrorSeverity::Recoverable) => 2,
        Some(ErrorSeverity::Validation) => 3,
        Some(ErrorSeverity::Internal) => 4,
        None => EXIT_GENERAL,
    }
}

/// Print `err` for the user and log it at a level matching its severity.
pub fn report(err: &anyhow::Error) -> ExitCode {
    let classified = classify(err);
    let severity = classified.map(|(severity, _)| severity);

    match classified {
        Some((severity, code)) if severity.is_internal() => {
            tracing::error!(code, severity = severity.as_str(), "{err:#}");
        }
        Some((severity, code)) => {
            tracing::debug!(code, severity = severity.as_str(), "{err:#}");
        }
        None => tracing::debug!("{err:#}"),
    }

    let hint = match severity {
        Some(severity) if severity.is_recoverable() => " (nothing was changed)",
        _ => "",
    };
    eprintln!("{} {err:#}{hint}", style("error:").red().bold());
    ExitCode::from(exit_status(severity))
}
