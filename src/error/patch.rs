//! Aggregator patching errors

use super::ImportError;

/// Creates an anchor not found error
pub fn anchor_not_found(path: impl Into<String>, anchor: impl Into<String>) -> ImportError {
    ImportError::AnchorNotFound {
        path: path.into(),
        anchor: anchor.into(),
    }
}
