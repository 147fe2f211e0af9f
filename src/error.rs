//! Crate-level error type and `Result` alias.
//! Covers the two fatal argument conditions and output failures; unknown
//! tokens are not errors and never surface here.
use thiserror::Error;

use crate::types::Flag;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("expected {expected} arguments, got {got}")]
    Usage { expected: usize, got: usize },

    #[error("missing value for {flag}")]
    MissingValue { flag: Flag },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the errors that should be followed by the usage line.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. } | Error::MissingValue { .. })
    }
}
