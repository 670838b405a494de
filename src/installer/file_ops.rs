//! Copying located section files into the target project
//!
//! The destination mirrors the kind's directory under the target root and
//! keeps the source file name. Writes are all-or-nothing.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::config::Layout;
use crate::domain::{CopiedFile, CopyOutcome, LocatedFile};
use crate::error::Result;
use crate::hash;

/// Places located files into a target project
pub struct Copier<'a> {
    layout: &'a Layout,
}

impl<'a> Copier<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }

    /// Where `located` lands under `target_root`
    ///
    /// The on-disk name is used as is, so non-UTF-8 names survive the copy.
    pub fn destination_for(&self, located: &LocatedFile, target_root: &Path) -> PathBuf {
        let file_name = located
            .absolute_path
            .file_name()
            .unwrap_or_else(|| OsStr::new(&located.file_name));
        target_root
            .join(self.layout.dir_for(located.kind))
            .join(file_name)
    }

    /// Copy `located` into `target_root`, overwriting a previous import
    ///
    /// A destination that already holds the same bytes is left untouched.
    pub fn copy(&self, located: &LocatedFile, target_root: &Path) -> Result<CopiedFile> {
        let destination = self.destination_for(located, target_root);

        let outcome = if hash::same_contents(&located.absolute_path, &destination)? {
            CopyOutcome::Unchanged
        } else {
            fs::copy_atomic(&located.absolute_path, &destination)?;
            CopyOutcome::Copied
        };

        Ok(CopiedFile {
            kind: located.kind,
            source: located.absolute_path.clone(),
            destination,
            outcome,
        })
    }
}
