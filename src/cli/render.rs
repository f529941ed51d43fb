// logscan - cli/render.rs
//
// Colour-coded terminal rendering of scan results.
//
// Result lines are coloured by level-prefix detection using the same
// "LEVEL:" substring rule the engine uses for filtering, priority
// ERROR > WARN > INFO: errors red, warnings yellow, info green, anything
// else uncoloured. Colours are suppressed when stdout is not a terminal
// so piped output stays clean.

use crate::core::model::Level;
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::path::Path;

/// Print one result line, coloured by its detected level.
pub fn print_line<W: Write>(out: &mut W, line: &str, color: bool) -> io::Result<()> {
    if !color {
        return writeln!(out, "{line}");
    }
    match Level::classify(line) {
        Some(Level::Error) => writeln!(out, "{}", line.red()),
        Some(Level::Warn) => writeln!(out, "{}", line.yellow()),
        Some(Level::Info) => writeln!(out, "{}", line.green()),
        None => writeln!(out, "{line}"),
    }
}

/// Print the "Found N lines with ..." header above a result listing.
pub fn print_match_header<W: Write>(out: &mut W, header: &str, color: bool) -> io::Result<()> {
    if color {
        writeln!(out, "{}", header.blue())
    } else {
        writeln!(out, "{header}")
    }
}

/// Print the line-count result for the count command.
pub fn print_count<W: Write>(out: &mut W, file: &Path, count: i64, color: bool) -> io::Result<()> {
    if color {
        writeln!(
            out,
            "{} {}",
            format!("Total lines in {}:", file.display()).blue(),
            count.green()
        )
    } else {
        writeln!(out, "Total lines in {}: {}", file.display(), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn rendered(line: &str, color: bool) -> String {
        let mut buf = Vec::new();
        print_line(&mut buf, line, color).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let text = rendered("ERROR: boom", false);
        assert_eq!(text, "ERROR: boom\n");
    }

    #[test]
    fn test_error_line_coloured_red() {
        let text = rendered("2024-01-01 ERROR: boom", true);
        assert!(text.contains("\x1b[31m"), "output was: {text:?}");
    }

    #[test]
    fn test_warn_line_coloured_yellow() {
        let text = rendered("WARN: disk low", true);
        assert!(text.contains("\x1b[33m"), "output was: {text:?}");
    }

    #[test]
    fn test_info_line_coloured_green() {
        let text = rendered("INFO: started", true);
        assert!(text.contains("\x1b[32m"), "output was: {text:?}");
    }

    /// A line with both ERROR: and INFO: renders red (same priority rule
    /// as classification).
    #[test]
    fn test_mixed_line_uses_highest_priority_colour() {
        let text = rendered("x ERROR: a INFO: b", true);
        assert!(text.contains("\x1b[31m"), "output was: {text:?}");
        assert!(!text.contains("\x1b[32m"), "output was: {text:?}");
    }

    #[test]
    fn test_unlevelled_line_uncoloured() {
        let text = rendered("plain line", true);
        assert_eq!(text, "plain line\n");
    }

    #[test]
    fn test_count_plain_format() {
        let mut buf = Vec::new();
        print_count(&mut buf, &PathBuf::from("app.log"), 42, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Total lines in app.log: 42\n");
    }
}
