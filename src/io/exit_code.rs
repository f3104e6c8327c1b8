//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - element rendered (an empty class is still a success)
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::{AnalysisError, ElementError};

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Class not found in the referenced file (code 3)
    NotFound = 3,

    /// Element definition or source file could not be parsed (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert an `ElementError` to the appropriate exit code.
    pub fn from_error(error: &ElementError) -> Self {
        match error {
            ElementError::ClassNotFound { .. } => ExitCode::NotFound,
            ElementError::MalformedElement { .. } => ExitCode::ParseError,
            ElementError::Analysis(AnalysisError::FileRead { .. }) => ExitCode::IoError,
            ElementError::Analysis(AnalysisError::ParseFailed { .. }) => ExitCode::ParseError,
            _ => ExitCode::GeneralError,
        }
    }

    /// Check if this exit code indicates success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }
}
