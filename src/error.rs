//! Error handling for monogen.
//! Defines the error type and result alias used throughout the materialization pipeline.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can abort a materialization run.
///
/// Every variant is fatal: the pipeline has no partial-success state, and a failed run
/// is recovered by rerunning, which wipes the destination first.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while traversing a directory tree
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Represents a missing or unusable template root
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents invalid invocation options
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents an invalid ignore pattern
    #[error("Ignore error: {0}.")]
    IgnoreError(String),

    /// Represents a package manifest that could not be parsed or serialized
    #[error("Manifest error in '{}': {source}.", .path.display())]
    ManifestError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Represents errors raised while rendering generated files
    #[error("Render error: {0}.")]
    RenderError(#[from] minijinja::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
