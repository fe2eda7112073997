//! Invocation options for a materialization run.
//! Built once from the parsed command line and never mutated afterwards.

use std::{fmt, path::PathBuf, str::FromStr};

use crate::{
    cli::Args,
    error::{Error, Result},
};

/// Supported dependency installers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Pnpm,
    Npm,
    Yarn,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [Self::Pnpm, Self::Npm, Self::Yarn];

    /// Program name of the installer.
    pub fn program(&self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Yarn => "yarn",
        }
    }

    /// Arguments that install all workspace dependencies.
    pub fn install_args(&self) -> &'static [&'static str] {
        match self {
            Self::Pnpm | Self::Npm => &["install"],
            Self::Yarn => &[],
        }
    }
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL.into_iter().find(|pm| pm.program() == s).ok_or_else(|| {
            Error::ConfigError(format!(
                "unsupported package manager '{s}' (expected one of: pnpm, npm, yarn)"
            ))
        })
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Everything a run needs to know, resolved up front.
#[derive(Debug, Clone)]
pub struct Options {
    pub project_name: String,
    pub target_dir: PathBuf,
    pub template_dir: PathBuf,
    pub ignore_patterns: Vec<String>,
    pub package_manager: PackageManager,
    pub install_deps: bool,
    pub init_git: bool,
}

impl Options {
    /// Converts parsed arguments into options.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the package manager is not supported
    pub fn from_args(args: Args) -> Result<Self> {
        let package_manager = args.package_manager.parse()?;
        let target_dir = match args.dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };

        Ok(Self {
            project_name: args.name,
            target_dir,
            template_dir: args.template,
            ignore_patterns: args.ignore,
            package_manager,
            install_deps: args.install,
            init_git: args.git,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_commands() {
        assert_eq!(PackageManager::Pnpm.install_args(), ["install"]);
        assert_eq!(PackageManager::Npm.install_args(), ["install"]);
        assert!(PackageManager::Yarn.install_args().is_empty());
    }

    #[test]
    fn test_display_matches_program() {
        for pm in PackageManager::ALL {
            assert_eq!(pm.to_string(), pm.program());
        }
    }
}
