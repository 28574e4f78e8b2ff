//! Error types for the suite runner
//!
//! Structural and configuration problems are fatal and abort the run.
//! Individual test failures never surface here; they are absorbed into
//! the category verdicts.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the suite runner
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    #[error("Invalid configuration file '{path}': {message}")]
    ConfigParse { path: String, message: String },

    #[error("No script library path defined. Pass --library-path or set test_library_path in the configuration file")]
    LibraryPathUndefined,

    // === Suite File Errors ===
    #[error("No suite file defined. Pass --suite-path or set test_suite_path in the configuration file")]
    SuiteFileUndefined,

    #[error("Suite file '{0}' does not exist")]
    SuiteFileMissing(String),

    #[error("Invalid suite file '{path}': {message}")]
    SuiteParse { path: String, message: String },

    #[error("Invalid suite definition: {0}")]
    SuiteInvalid(String),

    // === Resolution Errors ===
    #[error("Category token '{token}' of requested path '{path}' was not found in the suite")]
    CategoryNotFound { token: String, path: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create a file read error
    pub fn file_read(path: &std::path::Path, error: &io::Error) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a category not found error
    pub fn category_not_found(token: &str, path: &str) -> Self {
        Self::CategoryNotFound {
            token: token.to_string(),
            path: path.to_string(),
        }
    }
}
