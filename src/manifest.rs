//! Package manifest (`package.json`) editing.
//!
//! A [`ManifestDocument`] is loaded, mutated in place and saved back. Only the
//! fields touched through its methods change; every other key keeps its value and
//! its position.

use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    constants::{DEPENDENCY_SECTIONS, WORKSPACE_LINK},
    error::{Error, Result},
};

/// A parsed package manifest bound to the file it came from.
#[derive(Debug, Clone)]
pub struct ManifestDocument {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl ManifestDocument {
    /// Parses manifest content. `path` is only used for error reporting and saving.
    pub fn parse<P: AsRef<Path>>(path: P, content: &str) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let fields = serde_json::from_str(content).map_err(|source| Error::ManifestError {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, fields })
    }

    /// Reads and parses the manifest at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse(path, &content)
    }

    /// Like [`ManifestDocument::load`], but a missing file yields `None`.
    pub fn load_if_exists<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!("No manifest at '{}'", path.display());
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn set_name(&mut self, name: &str) {
        self.fields.insert("name".to_string(), Value::String(name.to_string()));
    }

    pub fn script(&self, script: &str) -> Option<&str> {
        self.fields.get("scripts")?.get(script)?.as_str()
    }

    /// Replaces every occurrence of `from` with `to` in a string-valued script.
    ///
    /// Returns `true` if the script text changed.
    pub fn rewrite_script(&mut self, script: &str, from: &str, to: &str) -> bool {
        let Some(Value::String(text)) = self
            .fields
            .get_mut("scripts")
            .and_then(|scripts| scripts.get_mut(script))
        else {
            return false;
        };
        if !text.contains(from) {
            return false;
        }
        *text = text.replace(from, to);
        true
    }

    /// Version constraint of `name` in a dependency section, if declared there.
    pub fn dependency(&self, section: &str, name: &str) -> Option<&str> {
        self.fields.get(section)?.get(name)?.as_str()
    }

    /// Iterates over every dependency name declared in any dependency section.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        DEPENDENCY_SECTIONS
            .into_iter()
            .filter_map(|section| self.fields.get(section).and_then(Value::as_object))
            .flat_map(|deps| deps.keys().map(String::as_str))
    }

    /// Re-points a dependency on `old_name` to `new_name` with a workspace link.
    ///
    /// Applies to every dependency section. The renamed entry keeps its position.
    /// Returns `true` if any section declared `old_name`.
    pub fn relink_dependency(&mut self, old_name: &str, new_name: &str) -> bool {
        let mut relinked = false;
        for section in DEPENDENCY_SECTIONS {
            let Some(Value::Object(deps)) = self.fields.get_mut(section) else {
                continue;
            };
            if !deps.contains_key(old_name) {
                continue;
            }
            let entries = std::mem::take(deps);
            *deps = entries
                .into_iter()
                .map(|(key, value)| {
                    if key == old_name {
                        (new_name.to_string(), Value::String(WORKSPACE_LINK.to_string()))
                    } else {
                        (key, value)
                    }
                })
                .collect();
            debug!("Relinked {section} '{old_name}' -> '{new_name}' in '{}'", self.path.display());
            relinked = true;
        }
        relinked
    }

    /// Serializes with two-space indentation and a trailing newline.
    pub fn to_json_string(&self) -> Result<String> {
        let mut out = serde_json::to_string_pretty(&self.fields).map_err(|source| {
            Error::ManifestError {
                path: self.path.clone(),
                source,
            }
        })?;
        out.push('\n');
        Ok(out)
    }

    /// Writes the manifest back to the file it was loaded from.
    pub fn save(&self) -> Result<()> {
        fs::write(&self.path, self.to_json_string()?)?;
        Ok(())
    }
}
