//! Project name normalization.
//!
//! Raw user input becomes a [`Scope`]: lowercase, restricted to `[a-z0-9_-]`,
//! never empty. The scope prefixes every generated package name and feeds the
//! database identifier.

use regex::Regex;
use std::{fmt, sync::LazyLock};

use crate::constants::DEFAULT_SCOPE;

static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9_-]+").unwrap());
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-{2,}").unwrap());
static NON_ALNUM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]").unwrap());

/// A sanitized project identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope(String);

impl Scope {
    /// Sanitizes arbitrary input into a scope. Never fails.
    pub fn sanitize(input: &str) -> Self {
        let lowered = input.trim().to_lowercase();
        let replaced = DISALLOWED.replace_all(&lowered, "-");
        let collapsed = HYPHEN_RUNS.replace_all(&replaced, "-");
        let trimmed = collapsed.trim_matches('-');

        if trimmed.is_empty() {
            Self(DEFAULT_SCOPE.to_string())
        } else {
            Self(trimmed.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Database identifier: every character outside `[a-z0-9]` becomes `_`.
    pub fn database_name(&self) -> String {
        NON_ALNUM.replace_all(&self.0, "_").into_owned()
    }

    /// `@<scope>/<package>`
    pub fn package_name(&self, package: &str) -> String {
        format!("@{}/{}", self.0, package)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
