//! Project layout (`.section-import.yaml`) data structures
//!
//! Source and target projects share the same directory convention. Every
//! field has a default, so a layout file only lists what differs.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::ResourceKind;
use crate::error::{ImportError, Result, config as config_error};

/// Marker line the registry patches anchor on
pub const DEFAULT_ANCHOR: &str = "// Register sections here. DO NOT REMOVE OR UPDATE THIS LINE";

/// Directory convention shared by source and target projects
///
/// All paths are relative to a project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    /// Directory holding section templates
    pub templates_dir: PathBuf,

    /// Directory holding section scripts
    pub scripts_dir: PathBuf,

    /// Directory holding section stylesheets
    pub styles_dir: PathBuf,

    /// Script index accumulating one export line per section
    pub script_index: PathBuf,

    /// Script registry receiving one `registerSection` line per section
    pub script_registry: PathBuf,

    /// Style registry receiving one `@import` line per section
    pub style_registry: PathBuf,

    /// Marker line in the script registry
    pub script_anchor: String,

    /// Marker line in the style registry
    pub style_anchor: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            templates_dir: PathBuf::from(ResourceKind::Template.default_dir()),
            scripts_dir: PathBuf::from(ResourceKind::Script.default_dir()),
            styles_dir: PathBuf::from(ResourceKind::Stylesheet.default_dir()),
            script_index: PathBuf::from("app/assets/javascripts/sections/index.js"),
            script_registry: PathBuf::from("app/assets/javascripts/app.js"),
            style_registry: PathBuf::from("app/assets/stylesheets/app.scss"),
            script_anchor: DEFAULT_ANCHOR.to_string(),
            style_anchor: DEFAULT_ANCHOR.to_string(),
        }
    }
}

impl Layout {
    /// Directory of a resource kind, relative to a project root
    pub fn dir_for(&self, kind: ResourceKind) -> &Path {
        match kind {
            ResourceKind::Template => &self.templates_dir,
            ResourceKind::Script => &self.scripts_dir,
            ResourceKind::Stylesheet => &self.styles_dir,
        }
    }

    /// Parse a layout from YAML; an empty document yields the defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let layout: Self = serde_yaml::from_str(yaml)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Load and validate a layout file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                config_error::not_found(path.display().to_string())
            } else {
                config_error::parse_failed(path.display().to_string(), e.to_string())
            }
        })?;

        Self::from_yaml(&content).map_err(|e| match e {
            ImportError::ConfigParseFailed { reason, .. } => {
                config_error::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Validate the layout
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("templates_dir", &self.templates_dir),
            ("scripts_dir", &self.scripts_dir),
            ("styles_dir", &self.styles_dir),
            ("script_index", &self.script_index),
            ("script_registry", &self.script_registry),
            ("style_registry", &self.style_registry),
        ];

        for (field, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(config_error::invalid(format!("{field} cannot be empty")));
            }
            if !is_contained_relative(path) {
                return Err(config_error::invalid(format!(
                    "{field} must be a relative path inside the project: {}",
                    path.display()
                )));
            }
        }

        for (field, anchor) in [
            ("script_anchor", &self.script_anchor),
            ("style_anchor", &self.style_anchor),
        ] {
            if anchor.trim().is_empty() {
                return Err(config_error::invalid(format!("{field} cannot be blank")));
            }
            if anchor.contains('\n') || anchor.contains('\r') {
                return Err(config_error::invalid(format!(
                    "{field} must be a single line"
                )));
            }
        }

        Ok(())
    }
}

/// Relative, without `..` or root/prefix components
fn is_contained_relative(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
