//! Layout resolution for a target project

use std::path::{Path, PathBuf};

use super::Layout;
use crate::error::Result;

/// Layout file looked up at the root of the target project
pub const LAYOUT_FILE_NAME: &str = ".section-import.yaml";

/// Environment variable naming an explicit layout file
pub const CONFIG_ENV: &str = "SECTION_IMPORT_CONFIG";

/// Provides the layout used for an import into `target_root`
pub trait LayoutSource {
    fn load(&self, target_root: &Path) -> Result<Layout>;
}

/// A fixed layout, used as-is for every target
impl LayoutSource for Layout {
    fn load(&self, _target_root: &Path) -> Result<Layout> {
        Ok(self.clone())
    }
}

/// Reads the layout from disk
///
/// Resolution order:
/// 1. the explicit file (`--config` / `SECTION_IMPORT_CONFIG`), which must exist
/// 2. `<target>/.section-import.yaml`, when present
/// 3. the built-in defaults
#[derive(Debug, Clone, Default)]
pub struct FileLayoutSource {
    explicit: Option<PathBuf>,
}

impl FileLayoutSource {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self { explicit }
    }
}

impl LayoutSource for FileLayoutSource {
    fn load(&self, target_root: &Path) -> Result<Layout> {
        if let Some(path) = &self.explicit {
            return Layout::load(path);
        }

        let project_file = target_root.join(LAYOUT_FILE_NAME);
        if project_file.is_file() {
            return Layout::load(&project_file);
        }

        Ok(Layout::default())
    }
}
