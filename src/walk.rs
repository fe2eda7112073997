//! Traversal helpers shared by the text rewriters.

use log::warn;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::{constants::DEPENDENCY_CACHE_DIR, error::Result};

fn is_dependency_cache(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() && entry.file_name() == DEPENDENCY_CACHE_DIR
}

/// Checks whether the lowercase file name ends with one of `suffixes`.
pub fn has_suffix(path: &Path, suffixes: &[&str]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| suffixes.iter().any(|suffix| name.ends_with(suffix)))
}

/// Collects every file under `root` whose name ends with one of `suffixes`.
///
/// `node_modules` directories are never entered.
pub fn files_with_suffix(root: &Path, suffixes: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_dependency_cache(entry));
    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_file() && has_suffix(entry.path(), suffixes) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Reads a file as UTF-8 text. Files that are not valid UTF-8 yield `None`.
pub fn read_text(path: &Path) -> Result<Option<String>> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(Some(text)),
        Err(_) => {
            warn!("Skipping non UTF-8 file '{}'", path.display());
            Ok(None)
        }
    }
}
