// CLI module
// Command-line arguments, logging setup and the interactive menu driver

mod args;
pub mod menu;

pub use args::{CliArgs, StrategyType};
pub use menu::run_menu;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Parse command-line arguments using clap
///
/// On invalid arguments or `--help`, clap prints the message and exits.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Install the stderr log subscriber
///
/// Reads the filter from `RUST_LOG`, defaulting to `warn` so stdout only
/// carries results.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
