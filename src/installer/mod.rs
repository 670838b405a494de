//! File installation logic for section imports
//!
//! This module handles:
//! - Locating a section's files in the source project ([`discovery`])
//! - Copying them into the target project ([`file_ops`])
//! - Registering the section in aggregator files ([`patch`])

pub mod discovery;
pub mod file_ops;
pub mod patch;

pub use discovery::Locator;
pub use file_ops::Copier;
pub use patch::{PatchMode, PatchTarget};
