//! Resource domain types
//!
//! A section is made of one file per [`ResourceKind`]. Each kind knows where it
//! lives by default and which file names count as a match for a section name.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{ImportError, request};

/// The fixed categories of files belonging to a section
///
/// The declaration order is the processing order: template, script, stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    /// Liquid template (`app/views/sections/<name>.liquid*`)
    Template,
    /// Javascript module (`app/assets/javascripts/sections/<name>.js*`)
    Script,
    /// Stylesheet (`app/assets/stylesheets/sections/<name>.{css,sass,scss}*`)
    Stylesheet,
}

impl ResourceKind {
    /// All kinds in processing order
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Template,
        ResourceKind::Script,
        ResourceKind::Stylesheet,
    ];

    /// Identifier used on the command line and in messages
    pub fn id(self) -> &'static str {
        match self {
            ResourceKind::Template => "template",
            ResourceKind::Script => "script",
            ResourceKind::Stylesheet => "stylesheet",
        }
    }

    /// Directory holding this kind, relative to a project root
    pub fn default_dir(self) -> &'static str {
        match self {
            ResourceKind::Template => "app/views/sections",
            ResourceKind::Script => "app/assets/javascripts/sections",
            ResourceKind::Stylesheet => "app/assets/stylesheets/sections",
        }
    }

    /// Glob fragment matched against everything after `<name>.`
    ///
    /// The trailing `*` admits chained extensions such as `hero.liquid.haml`
    /// or `hero.js.coffee`.
    pub fn suffix_pattern(self) -> &'static str {
        match self {
            ResourceKind::Template => "liquid*",
            ResourceKind::Script => "js*",
            ResourceKind::Stylesheet => "{css,sass,scss}*",
        }
    }

    /// Full file name glob for a section
    pub fn file_pattern(self, section: &str) -> String {
        format!("{}.{}", section, self.suffix_pattern())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ResourceKind {
    type Err = ImportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" | "templates" => Ok(ResourceKind::Template),
            "script" | "scripts" | "js" | "javascript" => Ok(ResourceKind::Script),
            "stylesheet" | "stylesheets" | "css" | "style" | "styles" => {
                Ok(ResourceKind::Stylesheet)
            }
            _ => Err(request::invalid_kind(s)),
        }
    }
}

/// A source file resolved for one resource kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFile {
    /// Kind the file was located for
    pub kind: ResourceKind,

    /// Absolute path to the file in the source project
    pub absolute_path: PathBuf,

    /// File name for messages; lossy when the name is not valid UTF-8
    pub file_name: String,
}

/// Whether a copy actually wrote the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Destination was created or overwritten
    Copied,
    /// Destination already held identical bytes and was left alone
    Unchanged,
}

/// A file placed into the target project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedFile {
    pub kind: ResourceKind,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub outcome: CopyOutcome,
}
