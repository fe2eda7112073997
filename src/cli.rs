//! Command-line interface implementation for monogen.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_PROJECT_NAME, DEFAULT_TEMPLATE_DIR};

/// Command-line arguments structure for monogen.
#[derive(Parser, Debug)]
#[command(author, version, about = "monogen: materialize a multi-package workspace from a template", long_about = None)]
pub struct Args {
    /// Name of the project to create
    #[arg(value_name = "NAME", default_value = DEFAULT_PROJECT_NAME)]
    pub name: String,

    /// Directory in which the project directory is created (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Package manager used for installing dependencies
    #[arg(long = "pm", value_name = "PM", default_value = "pnpm", value_parser = ["pnpm", "npm", "yarn"])]
    pub package_manager: String,

    /// Install dependencies after the project is created
    #[arg(long)]
    pub install: bool,

    /// Initialize a git repository in the created project
    #[arg(long)]
    pub git: bool,

    /// Path to the template directory
    #[arg(long, value_name = "DIR", env = "MONOGEN_TEMPLATE_DIR", default_value = DEFAULT_TEMPLATE_DIR)]
    pub template: PathBuf,

    /// Additional glob pattern excluded from the copy (may be repeated)
    #[arg(long, value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments, `--help` and `--version`
pub fn get_args() -> Args {
    Args::parse()
}
