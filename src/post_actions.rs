//! Post-materialization actions.
//!
//! Version control init and dependency install run as child processes in the
//! generated project. Their outcome is reported, never propagated: the project is
//! already complete when they start.

use log::{info, warn};
use std::fmt;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::options::{Options, PackageManager};

const GIT_INIT_ARGS: &[&str] = &["init"];

/// An external command run after materialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    InitGit,
    Install(PackageManager),
}

/// Result of one post action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostActionOutcome {
    Completed,
    Skipped(String),
    Failed(String),
}

impl PostAction {
    /// Actions requested by `options`, in execution order.
    pub fn requested(options: &Options) -> Vec<PostAction> {
        let mut actions = Vec::new();
        if options.init_git {
            actions.push(PostAction::InitGit);
        }
        if options.install_deps {
            actions.push(PostAction::Install(options.package_manager));
        }
        actions
    }

    /// Program and arguments of the action.
    pub fn command_line(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            PostAction::InitGit => ("git", GIT_INIT_ARGS),
            PostAction::Install(pm) => (pm.program(), pm.install_args()),
        }
    }

    /// Runs the action in `project_root` with inherited stdio.
    pub fn run(&self, project_root: &Path) -> PostActionOutcome {
        if *self == PostAction::InitGit && project_root.join(".git").exists() {
            return PostActionOutcome::Skipped("repository already initialized".to_string());
        }

        let (program, args) = self.command_line();
        let status = Command::new(program)
            .args(args)
            .current_dir(project_root)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status();

        match status {
            Ok(status) if status.success() => PostActionOutcome::Completed,
            Ok(status) => PostActionOutcome::Failed(format!("{self} exited with {status}")),
            Err(e) => PostActionOutcome::Failed(format!("{self} could not be started: {e}")),
        }
    }
}

impl fmt::Display for PostAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (program, args) = self.command_line();
        write!(f, "'{program}")?;
        for arg in args {
            write!(f, " {arg}")?;
        }
        write!(f, "'")
    }
}

/// Runs every requested action and logs its outcome.
pub fn run_post_actions(
    project_root: &Path,
    options: &Options,
) -> Vec<(PostAction, PostActionOutcome)> {
    PostAction::requested(options)
        .into_iter()
        .map(|action| {
            let outcome = action.run(project_root);
            match &outcome {
                PostActionOutcome::Completed => info!("{action} completed"),
                PostActionOutcome::Skipped(reason) => info!("{action} skipped: {reason}"),
                PostActionOutcome::Failed(reason) => warn!("{reason}"),
            }
            (action, outcome)
        })
        .collect()
}
