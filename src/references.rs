//! Cross-package import rewriting.
//!
//! Template sources import the server package by its template name. Once the
//! server manifest is rescoped those imports must follow, or the web package
//! would resolve a package that no longer exists.

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::{
    constants::SOURCE_EXTENSIONS,
    error::Result,
    naming::Scope,
    walk::{files_with_suffix, read_text},
    workspace::PackageRole,
};

/// Rewrites one source text.
///
/// Returns `None` unless the text contains the template server name as a single- or
/// double-quoted literal; otherwise every occurrence is replaced.
pub fn rewrite_source(content: &str, from: &str, to: &str) -> Option<String> {
    let single = format!("'{from}'");
    let double = format!("\"{from}\"");
    if content.contains(&single) || content.contains(&double) {
        Some(content.replace(from, to))
    } else {
        None
    }
}

/// Rewrites server imports in every source file under `workspace_root`.
///
/// # Returns
/// * `Result<usize>` - Number of files rewritten; untouched files stay byte-identical
pub fn rewrite_source_references(workspace_root: &Path, scope: &Scope) -> Result<usize> {
    let from = PackageRole::Server.template_name();
    let to = PackageRole::Server.scoped_name(scope);
    let mut rewritten = 0;

    for path in files_with_suffix(workspace_root, &SOURCE_EXTENSIONS)? {
        let Some(content) = read_text(&path)? else {
            continue;
        };
        if let Some(next) = rewrite_source(&content, from, &to) {
            fs::write(&path, next)?;
            debug!("Rewrote imports in '{}'", path.display());
            rewritten += 1;
        }
    }

    info!("Rewrote cross-package imports in {rewritten} files");
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_source_requires_quoted_literal() {
        assert_eq!(rewrite_source("see @app/server docs", "@app/server", "@x/server"), None);
        assert_eq!(
            rewrite_source("import t from '@app/server'", "@app/server", "@x/server").as_deref(),
            Some("import t from '@x/server'")
        );
        assert_eq!(
            rewrite_source("import \"@app/server\"; // @app/server", "@app/server", "@x/server")
                .as_deref(),
            Some("import \"@x/server\"; // @x/server")
        );
    }
}
