use std::process::ExitCode;

use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Area(#[from] rect_area::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether the usage line should be printed after this error.
    pub fn wants_usage(&self) -> bool {
        matches!(self, AppError::Area(e) if e.is_usage())
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}
