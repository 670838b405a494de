//! Operations module for importing sections
//!
//! This module provides high-level operations that coordinate:
//! - Installer: locating, copying and patching files (from installer module)
//! - Config: the project layout (from config module)
//! - UI: Progress reporting (from ui module)

pub mod import;

pub use import::ImportOperation;
