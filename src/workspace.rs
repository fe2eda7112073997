//! Workspace package layout and manifest rewriting.
//!
//! The template ships its packages under fixed subpaths. Server, web and cli are
//! renamed into the project scope; the contracts package keeps a fixed name. Every
//! dependency between them is relinked to the new names with a workspace link, so
//! no edge of the template's dependency graph is left dangling.

use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::{
    constants::{MANIFEST_FILE, REWRITTEN_SCRIPTS},
    error::Result,
    manifest::ManifestDocument,
    naming::Scope,
};

/// A package of the template workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageRole {
    Server,
    Web,
    Cli,
    Contracts,
}

impl PackageRole {
    pub const ALL: [PackageRole; 4] = [Self::Server, Self::Web, Self::Cli, Self::Contracts];

    /// Package directory relative to the workspace root.
    pub fn directory(&self) -> PathBuf {
        match self {
            Self::Server => Path::new("apps").join("server"),
            Self::Web => Path::new("apps").join("web"),
            Self::Cli => Path::new("apps").join("cli"),
            Self::Contracts => Path::new("packages").join("contracts"),
        }
    }

    pub fn manifest_path(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(self.directory()).join(MANIFEST_FILE)
    }

    /// Name the package carries inside the template.
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Server => "@app/server",
            Self::Web => "@app/web",
            Self::Cli => "@app/cli",
            Self::Contracts => "@contracts/core",
        }
    }

    /// Whether the package changes name in the generated project.
    pub fn is_renamed(&self) -> bool {
        !matches!(self, Self::Contracts)
    }

    /// Name the package carries in the generated project.
    pub fn scoped_name(&self, scope: &Scope) -> String {
        match self {
            Self::Server => scope.package_name("server"),
            Self::Web => scope.package_name("web"),
            Self::Cli => scope.package_name("cli"),
            Self::Contracts => self.template_name().to_string(),
        }
    }
}

/// Rewrites the root manifest and every package manifest present.
///
/// # Arguments
/// * `workspace_root` - Root of the materialized project
/// * `scope` - Sanitized project scope
///
/// # Returns
/// * `Result<usize>` - Number of manifests rewritten
///
/// # Errors
/// * `Error::IoError` if the root manifest is missing or a manifest cannot be written
/// * `Error::ManifestError` if a manifest is not valid JSON
pub fn rewrite_manifests(workspace_root: &Path, scope: &Scope) -> Result<usize> {
    let mut root = ManifestDocument::load(workspace_root.join(MANIFEST_FILE))?;
    rewrite_root_manifest(&mut root, scope);
    root.save()?;
    let mut rewritten = 1;

    for role in PackageRole::ALL {
        let Some(mut manifest) = ManifestDocument::load_if_exists(role.manifest_path(workspace_root))?
        else {
            continue;
        };
        rewrite_package_manifest(&mut manifest, role, scope);
        manifest.save()?;
        rewritten += 1;
    }

    info!("Rewrote {rewritten} manifests for scope '{scope}'");
    Ok(rewritten)
}

/// Names the root manifest after the scope and rescopes package filters in scripts.
pub fn rewrite_root_manifest(manifest: &mut ManifestDocument, scope: &Scope) {
    manifest.set_name(scope.as_str());
    for script in REWRITTEN_SCRIPTS {
        for role in PackageRole::ALL.into_iter().filter(PackageRole::is_renamed) {
            if manifest.rewrite_script(script, role.template_name(), &role.scoped_name(scope)) {
                debug!("Rescoped {} in '{script}' script", role.template_name());
            }
        }
    }
    relink_workspace_dependencies(manifest, scope);
}

/// Gives a package manifest its scoped identity and relinks its in-repo dependencies.
pub fn rewrite_package_manifest(manifest: &mut ManifestDocument, role: PackageRole, scope: &Scope) {
    manifest.set_name(&role.scoped_name(scope));
    relink_workspace_dependencies(manifest, scope);
}

fn relink_workspace_dependencies(manifest: &mut ManifestDocument, scope: &Scope) {
    for role in PackageRole::ALL {
        manifest.relink_dependency(role.template_name(), &role.scoped_name(scope));
    }
}
