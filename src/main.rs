// logscan - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Command dispatch into the scanning engine

use clap::Parser as _;
use logscan::cli::{self, args::Cli};
use logscan::util;

fn main() {
    // clap renders its own usage/help text; argument errors and unknown
    // commands exit with code 1, --help/--version with 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    util::logging::init(cli.debug);

    tracing::debug!(
        version = util::constants::APP_VERSION,
        file = %cli.file.display(),
        "logscan starting"
    );

    if let Err(e) = cli::run(&cli) {
        tracing::error!(error = %e, "Failed to write report output");
        eprintln!("Error: failed to write output: {e}");
        std::process::exit(1);
    }
}
