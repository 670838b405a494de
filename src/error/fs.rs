//! File system errors

use std::path::Path;

use super::ImportError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> ImportError {
    ImportError::FileNotFound { path: path.into() }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ImportError {
    ImportError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> ImportError {
    ImportError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Maps an I/O error raised while reading `path`
pub fn read_error(path: &Path, e: &std::io::Error) -> ImportError {
    read_failed(path.display().to_string(), e.to_string())
}

/// Maps an I/O error raised while writing `path`
pub fn write_error(path: &Path, e: &std::io::Error) -> ImportError {
    write_failed(path.display().to_string(), e.to_string())
}
