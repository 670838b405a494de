//! Import request validation errors

use super::ImportError;

/// Creates an invalid section name error
pub fn invalid_name(name: impl Into<String>) -> ImportError {
    ImportError::InvalidSectionName { name: name.into() }
}

/// Creates an unknown resource kind error
pub fn invalid_kind(kind: impl Into<String>) -> ImportError {
    ImportError::InvalidResourceKind { kind: kind.into() }
}

/// Creates an invalid request error
pub fn invalid(message: impl Into<String>) -> ImportError {
    ImportError::InvalidRequest {
        message: message.into(),
    }
}
