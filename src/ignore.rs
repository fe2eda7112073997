//! File and directory ignore pattern handling for templates.
//! This module processes the `.monogenignore` file and extra command-line globs
//! to exclude specific paths from the copy, similar to .gitignore functionality.

use crate::constants::IGNORE_FILE;
use crate::error::{Error, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use log::debug;
use std::{fs::read_to_string, path::Path};

/// Normalizes a relative path for matching: backslashes become `/` and leading
/// separators are stripped.
pub fn normalize_relative_path(relative_path: &str) -> String {
    relative_path.replace('\\', "/").trim_start_matches('/').to_string()
}

/// Builds the ignore set for a template.
///
/// # Arguments
/// * `template_root` - Template directory that may contain a `.monogenignore` file
/// * `extra_patterns` - Additional patterns given on the command line
///
/// # Returns
/// * `Result<GlobSet>` - Set of compiled glob patterns for path matching
///
/// # Notes
/// - A missing ignore file contributes no patterns
/// - Each non-empty line not starting with `#` is a separate glob pattern
/// - The ignore file itself is always excluded
/// - `*` does not match across `/`
///
/// # Example
/// ```ignore
/// # Contents of .monogenignore:
/// **/dist
/// **/*.log
/// ```
pub fn parse_ignore_file<P: AsRef<Path>>(
    template_root: P,
    extra_patterns: &[String],
) -> Result<GlobSet> {
    let ignore_path = template_root.as_ref().join(IGNORE_FILE);
    let mut patterns = vec![IGNORE_FILE.to_string()];

    if let Ok(contents) = read_to_string(&ignore_path) {
        patterns.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    } else {
        debug!("{IGNORE_FILE} does not exist");
    }
    patterns.extend(extra_patterns.iter().cloned());

    build_glob_set(&patterns)
}

/// Compiles patterns into a [`GlobSet`].
pub fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .map_err(|e| Error::IgnoreError(format!("invalid pattern '{pattern}': {e}")))?;
        debug!("Ignoring pattern: {pattern}");
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::IgnoreError(format!("ignore set loading failed: {e}")))
}

/// Checks a template-relative path against the ignore set.
pub fn is_ignored(ignored: &GlobSet, relative_path: &str) -> bool {
    ignored.is_match(normalize_relative_path(relative_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_relative_path() {
        assert_eq!(normalize_relative_path("apps\\server\\x.ts"), "apps/server/x.ts");
        assert_eq!(normalize_relative_path("//apps/web"), "apps/web");
        assert_eq!(normalize_relative_path("README.md"), "README.md");
    }
}
