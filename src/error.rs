//! Error types for class annotation rendering
//!
//! This module provides structured error types using thiserror. Every error
//! here is local to one element: the host-facing entry point logs it and
//! drops the element instead of aborting the whole documentation scan.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the source-analysis service
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to read source file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    #[error("Failed to parse {language} file '{path}'")]
    ParseFailed { path: PathBuf, language: String },
}

impl AnalysisError {
    /// Get a stable status code for this error type.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::ParserInit { .. } => "PARSER_INIT_ERROR",
            Self::ParseFailed { .. } => "PARSE_ERROR",
        }
        .to_string()
    }
}

/// Errors that abort the expansion of a single element
#[derive(Error, Debug)]
pub enum ElementError {
    /// Delimiters missing or out of order in the raw element definition
    #[error("Malformed element definition '{content}': {reason}")]
    MalformedElement { content: String, reason: String },

    #[error("Class '{class_name}' not found in '{path}'")]
    ClassNotFound { class_name: String, path: PathBuf },

    /// A class reappeared on the active recursion path
    #[error("Cyclic class reference: {}", chain.join(" -> "))]
    CyclicClassReference { chain: Vec<String> },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl ElementError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::MalformedElement { .. } => "MALFORMED_ELEMENT".to_string(),
            Self::ClassNotFound { .. } => "CLASS_NOT_FOUND".to_string(),
            Self::CyclicClassReference { .. } => "CYCLIC_CLASS_REFERENCE".to_string(),
            Self::Analysis(e) => e.status_code(),
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::MalformedElement { .. } => vec![
                "Use the form '@apiSuccessClass (path/to/file.ts) {ClassName}'",
                "The file path goes in parentheses and must come before the class name in braces",
            ],
            Self::ClassNotFound { .. } => vec![
                "Check that the class is declared at the top level of the referenced file",
                "Interfaces and type aliases are not expanded, only classes",
            ],
            Self::CyclicClassReference { .. } => vec![
                "Break the cycle by typing the recursive property as an interface",
            ],
            Self::Analysis(AnalysisError::FileRead { .. }) => vec![
                "Check that the file exists and you have read permissions",
                "Relative paths are resolved against the configured project_root",
            ],
            Self::Analysis(_) => vec![],
        }
    }
}

/// Result type alias for source-analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Result type alias for element expansion
pub type ElementResult<T> = Result<T, ElementError>;
