//! monogen's main application entry point and orchestration logic.
//! Handles command-line argument parsing, the materialization flow,
//! post actions and the final summary.

use monogen::{
    cli::{get_args, Args},
    error::{default_error_handler, Result},
    logger::init_logger,
    materializer::{MaterializeReport, Materializer},
    options::Options,
    post_actions::run_post_actions,
    renderer::{render_with, MiniJinjaRenderer, TemplateRenderer},
    workspace::PackageRole,
};
use serde::Serialize;

const NEXT_STEPS_TEMPLATE: &str = "\
Created monorepo at: {{ output_root }}
Next steps:
  1) cd {{ output_root }}
  2) Copy {{ env_sample }} -> {{ env_file }} and fill values
  3) {{ package_manager }} install
  4) Build contracts: pnpm --filter {{ contracts }} build
     Or watch during dev: pnpm --filter {{ contracts }} dev
     Tip: include contracts watch in root dev script to avoid missing dist
  5) Run: pnpm dev
";

#[derive(Serialize)]
struct NextSteps {
    output_root: String,
    env_sample: String,
    env_file: String,
    package_manager: String,
    contracts: &'static str,
}

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates options; nothing is written if they are invalid
/// 2. Materializes the project
/// 3. Runs the requested post actions, whose failures are reported but not fatal
/// 4. Prints the next steps
fn run(args: Args) -> Result<()> {
    let options = Options::from_args(args)?;
    let renderer = MiniJinjaRenderer::new();

    let report = Materializer::new(&options, &renderer).run()?;
    run_post_actions(&report.output_root, &options);

    print!("{}", next_steps(&renderer, &report, &options)?);
    Ok(())
}

fn next_steps(
    renderer: &dyn TemplateRenderer,
    report: &MaterializeReport,
    options: &Options,
) -> Result<String> {
    let env_sample = report
        .env_sample
        .strip_prefix(&report.output_root)
        .unwrap_or(&report.env_sample);
    let env_file = env_sample.with_file_name(".env");
    let context = NextSteps {
        output_root: report.output_root.display().to_string(),
        env_sample: env_sample.display().to_string(),
        env_file: env_file.display().to_string(),
        package_manager: options.package_manager.to_string(),
        contracts: PackageRole::Contracts.template_name(),
    };
    render_with(renderer, NEXT_STEPS_TEMPLATE, &context)
}
