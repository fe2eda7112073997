//! Logger setup for the command-line binary.
//! Everything logs through the `log` facade; only `main` picks the backend.

use log::LevelFilter;

/// Installs `env_logger`: debug output with `--verbose`, info otherwise.
/// Timestamps and targets are left out since output goes to a terminal.
pub fn init_logger(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
