//! Import request

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::{ResourceKind, SectionName};

/// Everything needed to import one section, immutable for the duration of the import
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Section to import
    pub name: SectionName,

    /// Root of the project the section is taken from
    pub source_root: PathBuf,

    /// Root of the project the section is imported into
    pub target_root: PathBuf,

    /// Restrict the import to these kinds (`None` means every kind)
    pub kinds: Option<BTreeSet<ResourceKind>>,
}

impl ImportRequest {
    pub fn new(
        name: SectionName,
        source_root: impl Into<PathBuf>,
        target_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name,
            source_root: source_root.into(),
            target_root: target_root.into(),
            kinds: None,
        }
    }

    /// Limit processing to the given kinds; an empty filter means no limit
    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = ResourceKind>) -> Self {
        let kinds: BTreeSet<_> = kinds.into_iter().collect();
        self.kinds = if kinds.is_empty() { None } else { Some(kinds) };
        self
    }

    /// Whether a kind takes part in this import
    pub fn includes(&self, kind: ResourceKind) -> bool {
        self.kinds.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }

    /// Kinds to process, in the fixed processing order
    pub fn requested_kinds(&self) -> Vec<ResourceKind> {
        ResourceKind::ALL
            .into_iter()
            .filter(|kind| self.includes(*kind))
            .collect()
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn target_root(&self) -> &Path {
        &self.target_root
    }
}
