//! Resource lookup errors

use super::ImportError;
use crate::domain::ResourceKind;

/// Creates a resource not found error
pub fn not_found(
    kind: ResourceKind,
    directory: impl Into<String>,
    pattern: impl Into<String>,
) -> ImportError {
    ImportError::ResourceNotFound {
        kind,
        directory: directory.into(),
        pattern: pattern.into(),
    }
}

/// Creates an ambiguous resource error
pub fn ambiguous(
    kind: ResourceKind,
    directory: impl Into<String>,
    pattern: impl Into<String>,
    candidates: Vec<String>,
) -> ImportError {
    ImportError::AmbiguousResource {
        kind,
        directory: directory.into(),
        pattern: pattern.into(),
        candidates,
    }
}

/// Creates an invalid glob pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> ImportError {
    ImportError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
