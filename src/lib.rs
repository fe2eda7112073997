//! monogen materializes a multi-package workspace from a template tree.
//! It copies the template, renames and relinks the workspace packages, rewrites
//! cross-package imports and substitutes placeholder tokens, all from a single
//! project name.

/// Command-line interface module for the monogen application
pub mod cli;

/// Common constants used throughout the application
pub mod constants;

/// Template tree cloning into a freshly wiped destination
pub mod copier;

/// Environment sample generation for the generated server
pub mod env_sample;

/// Error types and handling for the monogen application
pub mod error;

/// File and directory ignore patterns
/// Processes .monogenignore files and `--ignore` globs to exclude specific paths
pub mod ignore;

/// Logger initialization
pub mod logger;

/// Package manifest (`package.json`) editing
pub mod manifest;

/// Core materialization orchestration
/// Combines all stages to generate the final output
pub mod materializer;

/// Project name sanitization
pub mod naming;

/// Invocation options
pub mod options;

/// Placeholder token substitution
pub mod placeholder;

/// Version control init and dependency install after materialization
pub mod post_actions;

/// Cross-package import rewriting in source files
pub mod references;

/// Rendering of generated text
pub mod renderer;

mod walk;

/// Workspace package layout and manifest rewriting
pub mod workspace;
