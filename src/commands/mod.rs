//! Command implementations for the section-import CLI

pub mod completions;
pub mod import;
pub mod version;
