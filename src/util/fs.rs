//! Filesystem utilities.

use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }
    Ok(())
}

/// Read a file to string, with nice error messages.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read file: {}", path.display()))
}

/// Read a file as text, replacing invalid UTF-8 with U+FFFD.
///
/// Headers may carry legacy encodings in comments the parser never
/// looks at; only real I/O failures are errors.
pub fn read_lossy(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("failed to read file: {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write a string to a file in one shot.
///
/// The contents go to a temporary file next to the destination which is
/// then renamed over it, so readers see either the old file or the new
/// one. Parent directories are created as needed.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    ensure_dir(&parent)?;

    let mut tmp = NamedTempFile::new_in(&parent)
        .with_context(|| format!("failed to create temporary file in {}", parent.display()))?;
    tmp.write_all(contents.as_bytes())
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to write file: {}", path.display()))?;
    Ok(())
}

/// Find every file below `root` whose file name matches `pattern`.
///
/// The whole subtree is walked without following symlinks, so each path
/// is visited once. Paths listed in `exclude` are skipped. Results are
/// sorted.
pub fn discover_files(root: &Path, pattern: &str, exclude: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let pattern =
        Pattern::new(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;
    let exclude: Vec<PathBuf> = exclude.iter().map(|p| normalize_path(p)).collect();

    let mut results = BTreeSet::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry
            .with_context(|| format!("failed to walk directory: {}", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !pattern.matches(&name) {
            continue;
        }

        let path = entry.into_path();
        if exclude.contains(&normalize_path(&path)) {
            tracing::debug!("skipping generated file {}", path.display());
            continue;
        }
        results.insert(path);
    }

    Ok(results.into_iter().collect())
}

/// Canonicalize a path, but don't fail if it doesn't exist yet.
/// Returns the path as-is if canonicalization fails.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// Get `path` relative to `base` when it lies below it.
pub fn relative_path(base: &Path, path: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
