//! Placeholder token substitution.
//!
//! Every text file in the materialized tree is scanned once for the tokens of a
//! [`PlaceholderMapping`]. All tokens are matched in a single pass, so a
//! replacement value is never itself scanned for tokens.

use indexmap::IndexMap;
use log::{debug, info};
use regex::{Captures, Regex};
use std::fs;
use std::path::Path;

use crate::{
    constants::{DB_NAME_TOKEN, PROJECT_NAME_TOKEN, SCOPE_TOKEN, TEXT_EXTENSIONS},
    error::{Error, Result},
    naming::Scope,
    walk::{files_with_suffix, read_text},
};

/// Ordered mapping from literal token to replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceholderMapping(IndexMap<String, String>);

impl PlaceholderMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed project tokens: project name, scope and database name.
    pub fn for_scope(scope: &Scope) -> Self {
        let mut mapping = Self::new();
        mapping.insert(PROJECT_NAME_TOKEN, scope.as_str());
        mapping.insert(SCOPE_TOKEN, scope.as_str());
        mapping.insert(DB_NAME_TOKEN, &scope.database_name());
        mapping
    }

    /// Appends a token. Re-inserting a token replaces its value but keeps its position.
    pub fn insert(&mut self, token: &str, replacement: &str) {
        self.0.insert(token.to_string(), replacement.to_string());
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.0.get(token).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Applies a mapping to text.
#[derive(Debug)]
pub struct PlaceholderSubstitutor {
    mapping: PlaceholderMapping,
    pattern: Option<Regex>,
}

impl PlaceholderSubstitutor {
    /// Compiles the tokens of `mapping` into one matcher.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the token set exceeds the matcher's size limits
    pub fn new(mapping: PlaceholderMapping) -> Result<Self> {
        // Alternation is leftmost-first: at a given position the earlier token wins.
        let tokens: Vec<String> = mapping
            .0
            .keys()
            .filter(|token| !token.is_empty())
            .map(|token| regex::escape(token))
            .collect();
        let pattern = if tokens.is_empty() {
            None
        } else {
            let pattern = Regex::new(&tokens.join("|"))
                .map_err(|e| Error::ConfigError(format!("invalid placeholder set: {e}")))?;
            Some(pattern)
        };
        Ok(Self { mapping, pattern })
    }

    /// Returns the substituted text, or `None` if no token occurs in `content`.
    pub fn substitute(&self, content: &str) -> Option<String> {
        let pattern = self.pattern.as_ref()?;
        if !pattern.is_match(content) {
            return None;
        }
        let replaced = pattern.replace_all(content, |caps: &Captures| {
            self.mapping.get(&caps[0]).unwrap_or(&caps[0]).to_string()
        });
        Some(replaced.into_owned())
    }

    /// Substitutes tokens in every text file under `workspace_root`.
    ///
    /// # Returns
    /// * `Result<usize>` - Number of files rewritten; files without tokens are not written
    pub fn substitute_tree(&self, workspace_root: &Path) -> Result<usize> {
        let mut rewritten = 0;
        for path in files_with_suffix(workspace_root, &TEXT_EXTENSIONS)? {
            let Some(content) = read_text(&path)? else {
                continue;
            };
            if let Some(next) = self.substitute(&content) {
                fs::write(&path, next)?;
                debug!("Substituted placeholders in '{}'", path.display());
                rewritten += 1;
            }
        }
        info!("Substituted placeholders in {rewritten} files");
        Ok(rewritten)
    }
}
