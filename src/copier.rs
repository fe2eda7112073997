//! Template tree cloning.
//! Produces a byte-for-byte copy of the template in a freshly wiped destination,
//! leaving out every path matched by the ignore set.

use globset::GlobSet;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    error::{Error, Result},
    ignore::is_ignored,
};

/// Checks that the template root exists and is a directory.
///
/// # Errors
/// * `Error::TemplateError` if the path is missing or not a directory
pub fn ensure_template_root(template_root: &Path) -> Result<()> {
    if !template_root.is_dir() {
        return Err(Error::TemplateError(format!(
            "template directory '{}' does not exist",
            template_root.display()
        )));
    }
    Ok(())
}

/// Resolves `path` to an absolute path with symlinks resolved, even when its
/// trailing components do not exist yet.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut existing = absolute.as_path();
    let mut missing = Vec::new();
    while !existing.exists() {
        match (existing.parent(), existing.file_name()) {
            (Some(parent), Some(name)) => {
                missing.push(name.to_os_string());
                existing = parent;
            }
            _ => break,
        }
    }

    let mut resolved = existing.canonicalize()?;
    resolved.extend(missing.into_iter().rev());
    Ok(resolved)
}

/// Checks that the template and the output do not contain one another.
///
/// The output root is wiped before copying, so an output that encloses the
/// template would delete it, and an output inside the template would be copied
/// into itself.
///
/// # Errors
/// * `Error::TemplateError` if either path lies inside the other
pub fn ensure_disjoint(template_root: &Path, output_root: &Path) -> Result<()> {
    let template = resolve_path(template_root)?;
    let output = resolve_path(output_root)?;
    if output.starts_with(&template) || template.starts_with(&output) {
        return Err(Error::TemplateError(format!(
            "output directory '{}' overlaps template directory '{}'",
            output.display(),
            template.display()
        )));
    }
    Ok(())
}

/// Removes any existing destination and recreates it empty.
///
/// Nothing from a previous run at the same path survives, so a failed run is
/// recovered by simply running again.
pub fn prepare_destination(output_root: &Path) -> Result<()> {
    if output_root.exists() {
        warn!("Removing existing directory '{}'", output_root.display());
        if output_root.is_dir() {
            fs::remove_dir_all(output_root)?;
        } else {
            fs::remove_file(output_root)?;
        }
    }
    fs::create_dir_all(output_root)?;
    Ok(())
}

/// Copies every non-ignored entry of `template_root` into `output_root`.
///
/// # Arguments
/// * `template_root` - Source template directory
/// * `output_root` - Existing destination directory
/// * `ignored` - Patterns matched against template-relative paths
///
/// # Returns
/// * `Result<usize>` - Number of files copied
///
/// # Notes
/// An ignored directory is pruned: nothing beneath it is visited.
pub fn copy_tree(template_root: &Path, output_root: &Path, ignored: &GlobSet) -> Result<usize> {
    let mut copied = 0;
    let walker = WalkDir::new(template_root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            let relative = entry.path().strip_prefix(template_root).unwrap_or(entry.path());
            let keep = !is_ignored(ignored, &relative.to_string_lossy());
            if !keep {
                debug!("Skipping '{}' from ignore patterns", relative.display());
            }
            keep
        });

    for entry in walker {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(template_root)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let target = output_root.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            debug!("Copied '{}'", relative.display());
            copied += 1;
        }
    }

    info!("Copied {copied} files into '{}'", output_root.display());
    Ok(copied)
}
