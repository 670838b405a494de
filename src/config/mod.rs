//! Configuration handling for section imports
//!
//! This module contains:
//! - [`Layout`]: where sections and aggregator files live inside a project
//! - [`LayoutSource`]: how a layout is obtained for a target project
//!   (`.section-import.yaml`, an explicit file, or the built-in defaults)

pub mod layout;
pub mod source;

pub use layout::{DEFAULT_ANCHOR, Layout};
pub use source::{CONFIG_ENV, FileLayoutSource, LAYOUT_FILE_NAME, LayoutSource};
