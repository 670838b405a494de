//! Common file system operations with unified error handling
//!
//! Every write goes through a temp file created next to the destination and
//! then renamed over it, so readers see either the old or the new content,
//! never a truncated file.

use std::fs::{self, File, Permissions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Result, fs as fs_error};

/// Directory a temp file for `path` must live in (same filesystem as `path`)
fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}

/// Ensure parent directory exists for a path
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = parent_dir(path);
    fs::create_dir_all(parent).map_err(|e| fs_error::write_error(parent, &e))
}

/// Read a UTF-8 file, returning `None` when it does not exist
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(fs_error::read_error(path, &e)),
    }
}

/// Fill a temp file beside `target` and rename it over `target`
fn replace_with<F>(target: &Path, permissions: Option<Permissions>, fill: F) -> Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    ensure_parent_dir(target)?;

    let mut temp =
        NamedTempFile::new_in(parent_dir(target)).map_err(|e| fs_error::write_error(target, &e))?;

    fill(temp.as_file_mut()).map_err(|e| fs_error::write_error(target, &e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| fs_error::write_error(target, &e))?;

    if let Some(permissions) = permissions.or_else(default_permissions) {
        fs::set_permissions(temp.path(), permissions)
            .map_err(|e| fs_error::write_error(target, &e))?;
    }

    temp.persist(target)
        .map_err(|e| fs_error::write_error(target, &e.error))?;
    Ok(())
}

/// Atomically replace `path` with `contents`
///
/// Creates parent directories. An existing file keeps its permissions.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    let permissions = fs::metadata(path).ok().map(|m| m.permissions());
    replace_with(path, permissions, |file| file.write_all(contents))
}

/// Atomically copy `source` to `target`, overwriting `target`
///
/// Creates parent directories and carries the source permissions over.
pub fn copy_atomic(source: &Path, target: &Path) -> Result<()> {
    let mut reader = File::open(source).map_err(|e| fs_error::read_error(source, &e))?;
    let permissions = reader
        .metadata()
        .map_err(|e| fs_error::read_error(source, &e))?
        .permissions();

    replace_with(target, Some(permissions), |file| {
        io::copy(&mut reader, file).map(|_| ())
    })
}
