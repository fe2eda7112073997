//! Core materialization orchestration.
//! Runs every stage in order; each stage finishes over the whole tree before the
//! next one starts, since the rewriters depend on the rescoped manifests.

use log::{debug, info};
use std::path::PathBuf;

use crate::{
    copier::{copy_tree, ensure_disjoint, ensure_template_root, prepare_destination},
    env_sample::{write_env_sample, RuntimeConfig},
    error::Result,
    ignore::parse_ignore_file,
    naming::Scope,
    options::Options,
    placeholder::{PlaceholderMapping, PlaceholderSubstitutor},
    references::rewrite_source_references,
    renderer::TemplateRenderer,
    workspace::rewrite_manifests,
};

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub output_root: PathBuf,
    pub scope: Scope,
    pub files_copied: usize,
    pub manifests_rewritten: usize,
    pub sources_rewritten: usize,
    pub files_substituted: usize,
    pub env_sample: PathBuf,
}

/// Turns a template tree into a project for one set of options.
pub struct Materializer<'a> {
    options: &'a Options,
    renderer: &'a dyn TemplateRenderer,
    scope: Scope,
}

impl<'a> Materializer<'a> {
    pub fn new(options: &'a Options, renderer: &'a dyn TemplateRenderer) -> Self {
        let scope = Scope::sanitize(&options.project_name);
        Self {
            options,
            renderer,
            scope,
        }
    }

    /// `<target-dir>/<scope>`
    pub fn output_root(&self) -> PathBuf {
        self.options.target_dir.join(self.scope.as_str())
    }

    /// Runs the whole pipeline.
    ///
    /// # Flow
    /// 1. Validates the template root, its separation from the output, and ignore patterns
    /// 2. Wipes and recreates the output directory
    /// 3. Copies the template tree
    /// 4. Rewrites package manifests
    /// 5. Rewrites cross-package imports
    /// 6. Substitutes placeholder tokens
    /// 7. Writes the environment sample
    ///
    /// # Errors
    /// Any error aborts the run; the output directory may be left partially written
    /// and is wiped by the next run.
    pub fn run(&self) -> Result<MaterializeReport> {
        let template_root = &self.options.template_dir;
        let output_root = self.output_root();
        debug!(
            "Materializing '{}' from '{}' into '{}'",
            self.scope,
            template_root.display(),
            output_root.display()
        );

        ensure_template_root(template_root)?;
        ensure_disjoint(template_root, &output_root)?;
        let ignored = parse_ignore_file(template_root, &self.options.ignore_patterns)?;

        prepare_destination(&output_root)?;
        let files_copied = copy_tree(template_root, &output_root, &ignored)?;

        let manifests_rewritten = rewrite_manifests(&output_root, &self.scope)?;
        let sources_rewritten = rewrite_source_references(&output_root, &self.scope)?;

        let substitutor = PlaceholderSubstitutor::new(PlaceholderMapping::for_scope(&self.scope))?;
        let files_substituted = substitutor.substitute_tree(&output_root)?;

        let runtime_config = RuntimeConfig::with_database(&self.scope.database_name());
        let env_sample = write_env_sample(&output_root, &runtime_config, self.renderer)?;

        info!("Materialized '{}' in '{}'", self.scope, output_root.display());
        Ok(MaterializeReport {
            output_root,
            scope: self.scope.clone(),
            files_copied,
            manifests_rewritten,
            sources_rewritten,
            files_substituted,
            env_sample,
        })
    }
}
