// logscan - core/report.rs
//
// Aggregate reports composed from the primitive scans, and their text
// rendering. Rendering is parameterised over any io::Write sink so the
// CLI can print to stdout while tests capture the exact output.

use crate::core::model::{Level, LevelStats};
use crate::core::scanner::LogScanner;
use std::io::{self, Write};

// =============================================================================
// Summary
// =============================================================================

/// Aggregate of total line count and per-level counts for one file.
///
/// `total` keeps the -1 sentinel from count_lines when the file cannot be
/// opened, so the rendered report shows the same figures the original tool
/// printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: i64,
    pub stats: LevelStats,
}

impl Summary {
    /// Run the two primitive scans and combine the results.
    pub fn collect(scanner: &LogScanner) -> Self {
        Self {
            total: scanner.count_lines(),
            stats: scanner.level_stats(),
        }
    }

    /// Lines matching no level pattern: `total - (info+warn+error)`.
    /// Shown in the report only when strictly positive.
    pub fn other(&self) -> i64 {
        self.total - self.stats.matched() as i64
    }
}

/// Render the summary block for `scanner`'s file into `out`.
pub fn render_summary<W: Write>(out: &mut W, scanner: &LogScanner, summary: &Summary) -> io::Result<()> {
    writeln!(out, "=== Log File Summary ===")?;
    writeln!(out, "File: {}", scanner.path().display())?;
    writeln!(out, "Total lines: {}", summary.total)?;
    for level in [Level::Info, Level::Warn, Level::Error] {
        writeln!(out, "{}: {} lines", level, summary.stats.get(level))?;
    }
    let other = summary.other();
    if other > 0 {
        writeln!(out, "Other: {other} lines")?;
    }
    Ok(())
}

// =============================================================================
// Time statistics
// =============================================================================

/// Earliest and latest date token found in the file.
///
/// Min/max are lexicographic, which is chronological for the fixed-width,
/// zero-padded YYYY-MM-DD token shape. `range` is None when the file has
/// no date-shaped lines (or cannot be opened — the two cases are
/// indistinguishable by design).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub range: Option<(String, String)>,
}

impl TimeStats {
    /// Extract all date tokens and reduce them to the earliest/latest pair.
    pub fn collect(scanner: &LogScanner) -> Self {
        let dates = scanner.extract_all_dates();
        let range = match (dates.iter().min(), dates.iter().max()) {
            (Some(earliest), Some(latest)) => Some((earliest.clone(), latest.clone())),
            _ => None,
        };
        Self { range }
    }
}

/// Render the time-statistics block into `out`.
pub fn render_time_stats<W: Write>(out: &mut W, stats: &TimeStats) -> io::Result<()> {
    writeln!(out, "=== Time Statistics ===")?;
    match &stats.range {
        Some((earliest, latest)) => {
            writeln!(out, "Earliest date: {earliest}")?;
            writeln!(out, "Latest date: {latest}")?;
            writeln!(out, "Period: {earliest} to {latest}")?;
        }
        None => {
            writeln!(out, "No valid dates found")?;
        }
    }
    Ok(())
}
