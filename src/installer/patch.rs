//! Idempotent text patches for aggregator files
//!
//! Two mutations are supported:
//! - append a line to a list file unless an identical line exists
//! - insert a line right after a marker (anchor) line unless the text exists
//!
//! New content is computed in memory and written back atomically. Applying a
//! patch a second time leaves the file untouched.

use std::path::{Path, PathBuf};

use crate::common::fs;
use crate::domain::PatchOutcome;
use crate::error::{Result, fs as fs_error, patch as patch_error};

/// How a [`PatchTarget`] mutates its file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchMode {
    /// Append at the end of the file, creating it if needed
    Append,
    /// Insert after the line holding `anchor`; the file must exist
    InsertAfterAnchor { anchor: String },
}

/// One idempotent text mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchTarget {
    pub file_path: PathBuf,
    /// Single line of text, without terminator
    pub inserted_text: String,
    pub mode: PatchMode,
}

impl PatchTarget {
    pub fn append(file_path: impl Into<PathBuf>, line: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            inserted_text: line.into(),
            mode: PatchMode::Append,
        }
    }

    pub fn insert_after(
        file_path: impl Into<PathBuf>,
        anchor: impl Into<String>,
        line: impl Into<String>,
    ) -> Self {
        Self {
            file_path: file_path.into(),
            inserted_text: line.into(),
            mode: PatchMode::InsertAfterAnchor {
                anchor: anchor.into(),
            },
        }
    }

    pub fn apply(&self) -> Result<PatchOutcome> {
        match &self.mode {
            PatchMode::Append => append_unique_line(&self.file_path, &self.inserted_text),
            PatchMode::InsertAfterAnchor { anchor } => {
                insert_after_anchor(&self.file_path, anchor, &self.inserted_text)
            }
        }
    }
}

/// In-memory result of computing a patch
#[derive(Debug, PartialEq, Eq)]
enum Edit {
    Unchanged,
    Updated(String),
}

/// Line terminator used by `content`, `\n` unless it already uses `\r\n`
fn newline_style(content: &str) -> &'static str {
    if content.contains("\r\n") { "\r\n" } else { "\n" }
}

fn append_edit(content: &str, line: &str) -> Edit {
    if content.lines().any(|existing| existing == line) {
        return Edit::Unchanged;
    }

    let newline = newline_style(content);
    let mut updated = String::with_capacity(content.len() + line.len() + 2 * newline.len());
    updated.push_str(content);
    if !content.is_empty() && !content.ends_with('\n') {
        updated.push_str(newline);
    }
    updated.push_str(line);
    updated.push_str(newline);
    Edit::Updated(updated)
}

/// `None` when `anchor` does not occur in `content`
fn insert_edit(content: &str, anchor: &str, line: &str) -> Option<Edit> {
    let anchor_start = content.find(anchor)?;
    if content.contains(line) {
        return Some(Edit::Unchanged);
    }

    let anchor_end = anchor_start + anchor.len();
    let (insert_at, newline, break_before) = match content[anchor_end..].find('\n') {
        Some(offset) => {
            let line_end = anchor_end + offset;
            let newline = if content[..line_end].ends_with('\r') {
                "\r\n"
            } else {
                "\n"
            };
            (line_end + 1, newline, false)
        }
        // Anchor sits on a final line without terminator
        None => (content.len(), newline_style(content), true),
    };

    let mut updated = String::with_capacity(content.len() + line.len() + 2 * newline.len());
    updated.push_str(&content[..insert_at]);
    if break_before {
        updated.push_str(newline);
    }
    updated.push_str(line);
    updated.push_str(newline);
    updated.push_str(&content[insert_at..]);
    Some(Edit::Updated(updated))
}

/// Append `line` to `path` unless an identical line is already present
///
/// Creates the file (and its parent directories) when missing.
pub fn append_unique_line(path: &Path, line: &str) -> Result<PatchOutcome> {
    let content = fs::read_optional(path)?.unwrap_or_default();

    match append_edit(&content, line) {
        Edit::Unchanged => Ok(PatchOutcome::AlreadyPresent),
        Edit::Updated(updated) => {
            fs::write_atomic(path, updated.as_bytes())?;
            Ok(PatchOutcome::Applied)
        }
    }
}

/// Insert `line` right after the first line containing `anchor`
///
/// Nothing is written when `line` already occurs anywhere in the file. Fails
/// without touching the file when the anchor is missing.
pub fn insert_after_anchor(path: &Path, anchor: &str, line: &str) -> Result<PatchOutcome> {
    let content = fs::read_optional(path)?
        .ok_or_else(|| fs_error::not_found(path.display().to_string()))?;

    match insert_edit(&content, anchor, line) {
        None => Err(patch_error::anchor_not_found(
            path.display().to_string(),
            anchor,
        )),
        Some(Edit::Unchanged) => Ok(PatchOutcome::AlreadyPresent),
        Some(Edit::Updated(updated)) => {
            fs::write_atomic(path, updated.as_bytes())?;
            Ok(PatchOutcome::Applied)
        }
    }
}
