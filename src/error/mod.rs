//! Error types and handling for section imports
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`locate`]: Resource lookup errors (no match, several matches, bad patterns)
//! - [`patch`]: Aggregator patching errors
//! - [`request`]: Import request validation errors
//! - [`config`]: Layout configuration errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod locate;
pub mod patch;
pub mod request;

use miette::Diagnostic;
use thiserror::Error;

use crate::domain::ResourceKind;

/// Main error type for section import operations
#[derive(Error, Diagnostic, Debug)]
pub enum ImportError {
    // Locate errors
    #[error("Section {kind} not found: no file matching '{pattern}' in {directory}")]
    #[diagnostic(
        code(section_import::locate::not_found),
        help("Check the section name and that the source project follows the expected layout")
    )]
    ResourceNotFound {
        kind: ResourceKind,
        directory: String,
        pattern: String,
    },

    #[error(
        "Section {kind} is ambiguous: {} files match '{pattern}' in {directory} ({})",
        .candidates.len(),
        .candidates.join(", ")
    )]
    #[diagnostic(
        code(section_import::locate::ambiguous),
        help("Remove or rename the extra files so exactly one {kind} remains")
    )]
    AmbiguousResource {
        kind: ResourceKind,
        directory: String,
        pattern: String,
        candidates: Vec<String>,
    },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(section_import::locate::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    // Request errors
    #[error("Invalid section name: '{name}'")]
    #[diagnostic(
        code(section_import::request::invalid_name),
        help(
            "Section names start with a letter and contain only letters, digits, '_' or '-'"
        )
    )]
    InvalidSectionName { name: String },

    #[error("Unknown resource kind: '{kind}'")]
    #[diagnostic(
        code(section_import::request::invalid_kind),
        help("Supported kinds: template, script, stylesheet")
    )]
    InvalidResourceKind { kind: String },

    #[error("Invalid import request: {message}")]
    #[diagnostic(code(section_import::request::invalid))]
    InvalidRequest { message: String },

    // Patch errors
    #[error("Anchor not found in {path}: '{anchor}'")]
    #[diagnostic(
        code(section_import::patch::anchor_not_found),
        help("Restore the marker line in the aggregator file, then re-run the import")
    )]
    AnchorNotFound { path: String, anchor: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(section_import::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(section_import::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(section_import::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(section_import::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(section_import::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(section_import::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(section_import::fs::io_error))]
    IoError { message: String },
}

impl ImportError {
    /// Whether the error belongs to the I/O class (copy or write failures)
    #[cfg(test)]
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ImportError::FileNotFound { .. }
                | ImportError::FileReadFailed { .. }
                | ImportError::FileWriteFailed { .. }
                | ImportError::IoError { .. }
        )
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ImportError {
    fn from(err: serde_yaml::Error) -> Self {
        ImportError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ImportError>;
