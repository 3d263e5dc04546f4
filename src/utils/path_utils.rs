//! Path helpers shared by the file based commands

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{ToolkitError, ToolkitResult};

/// Strip whitespace and one layer of surrounding quotes from a user-supplied path
///
/// Paths copied from a file manager often arrive as `"C:\My Books\a.pdf"`.
pub fn clean_path_arg(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"').and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed);
    PathBuf::from(unquoted)
}

/// Ensure `path` is an existing directory
pub fn require_dir(path: &Path) -> ToolkitResult<()> {
    if !path.is_dir() {
        return Err(ToolkitError::InvalidInput(format!(
            "Path '{}' does not exist or is not a directory", path.display()
        )));
    }
    Ok(())
}

/// Whether the file extension matches `ext`, ignoring case
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Regular files directly inside `dir` with the given extension
pub fn files_with_extension(dir: &Path, ext: &str) -> ToolkitResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_extension(&path, ext) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Regular files below `dir` (any depth) with the given extension
pub fn files_with_extension_recursive(dir: &Path, ext: &str) -> ToolkitResult<Vec<PathBuf>> {
    let mut files = files_with_extension(dir, ext)?;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(files_with_extension_recursive(&path, ext)?);
        }
    }
    Ok(files)
}

/// File name without its extension, lossily converted
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
