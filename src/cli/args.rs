// logscan - cli/args.rs
//
// Command-line argument definitions. clap generates the usage text and
// exits with code 1 on argument errors or an unknown command.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// logscan - Command-line log file inspector.
///
/// Point logscan at a log file to count lines, search for keywords,
/// filter by severity level, or report aggregate statistics.
#[derive(Parser, Debug)]
#[command(name = "logscan", version, about)]
pub struct Cli {
    /// Log file to inspect.
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug", global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count total lines in the file.
    Count,

    /// Print lines containing a keyword (case-sensitive substring match).
    Search {
        /// Keyword to search for.
        keyword: String,
    },

    /// Print lines matching a log level (INFO, WARN, ERROR).
    Level {
        /// Level name; lines containing "<LEVEL>:" match.
        level: String,
    },

    /// Show a file summary with per-level statistics.
    Summary,

    /// Show time statistics (earliest/latest date found).
    Timestats,
}
