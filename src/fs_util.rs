//! Filesystem predicates used when inspecting a project root.

use std::path::Path;

/// Returns `true` if the path is a regular directory (not a symlink).
///
/// Uses `symlink_metadata()` so a symlinked `.git` is not mistaken for a
/// repository of our own.
#[must_use]
pub(crate) fn is_regular_dir(path: &Path) -> bool {
    path.symlink_metadata()
        .map(|m| m.file_type().is_dir())
        .unwrap_or(false)
}

/// Returns `true` if `dir` has no entries, hidden ones included.
pub(crate) fn is_empty_dir(dir: &Path) -> std::io::Result<bool> {
    Ok(std::fs::read_dir(dir)?.next().is_none())
}
