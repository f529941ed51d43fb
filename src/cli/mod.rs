// logscan - cli/mod.rs
//
// Presentation glue: construct the scanner, invoke one engine operation,
// and render the result to the terminal. The engine never depends on this
// layer.

pub mod args;
pub mod render;

use crate::core::report::{self, Summary, TimeStats};
use crate::core::scanner::LogScanner;
use args::{Cli, Command};
use std::io::{self, IsTerminal, Write};

/// Execute the parsed command against the target file.
///
/// A missing file is not an argument error: the engine's return-value
/// conventions apply (sentinel or empty output) and the process exits 0.
/// Err is only returned when writing the report output itself fails.
pub fn run(cli: &Cli) -> io::Result<()> {
    let scanner = LogScanner::new(&cli.file);
    let color = io::stdout().is_terminal();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Count => {
            let count = scanner.count_lines();
            // The sentinel -1 means the file could not be opened; the
            // original tool prints nothing in that case.
            if count >= 0 {
                render::print_count(&mut out, scanner.path(), count, color)?;
            }
        }
        Command::Search { keyword } => {
            let results = scanner.search(keyword);
            render::print_match_header(
                &mut out,
                &format!("Found {} lines with '{}':", results.len(), keyword),
                color,
            )?;
            for line in &results {
                render::print_line(&mut out, line, color)?;
            }
        }
        Command::Level { level } => {
            let results = scanner.filter_by_level(level);
            render::print_match_header(
                &mut out,
                &format!("Found {} lines with level '{}':", results.len(), level),
                color,
            )?;
            for line in &results {
                render::print_line(&mut out, line, color)?;
            }
        }
        Command::Summary => {
            let summary = Summary::collect(&scanner);
            report::render_summary(&mut out, &scanner, &summary)?;
        }
        Command::Timestats => {
            let stats = TimeStats::collect(&scanner);
            report::render_time_stats(&mut out, &stats)?;
        }
    }

    out.flush()
}
