// logscan - core/model.rs
//
// Core data model types: severity levels, per-level statistics, and the
// date-token shape check. Pure data definitions with no I/O.

use crate::util::constants::{DATE_SEPARATOR_OFFSETS, DATE_TOKEN_LEN};

// =============================================================================
// Level
// =============================================================================

/// The three severity levels recognised by the scanner, ordered from most
/// to least severe. A line is classified by the first level whose
/// `"LEVEL:"` pattern it contains as a substring, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Error,
    Warn,
    Info,
}

impl Level {
    /// All variants in classification priority order (most severe first).
    pub fn all() -> &'static [Level] {
        &[Level::Error, Level::Warn, Level::Info]
    }

    /// Display name, e.g. "ERROR".
    pub fn name(&self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
        }
    }

    /// The literal substring used to classify a log line, e.g. "ERROR:".
    /// Matched anywhere in the line, not anchored to the line start.
    pub fn pattern(&self) -> &'static str {
        match self {
            Level::Error => "ERROR:",
            Level::Warn => "WARN:",
            Level::Info => "INFO:",
        }
    }

    /// Classify a line by the first matching level pattern, priority
    /// ERROR > WARN > INFO. A line containing both "ERROR:" and "INFO:"
    /// classifies as Error. Returns None when no pattern matches.
    pub fn classify(line: &str) -> Option<Level> {
        Level::all()
            .iter()
            .copied()
            .find(|level| line.contains(level.pattern()))
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// LevelStats
// =============================================================================

/// Per-level line counts. All three levels are always present, zero on an
/// empty or unreadable file. Each line increments at most one counter
/// (first-match priority ERROR > WARN > INFO), so
/// `info + warn + error <= total line count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevelStats {
    pub info: u64,
    pub warn: u64,
    pub error: u64,
}

impl LevelStats {
    /// Count for a single level.
    pub fn get(&self, level: Level) -> u64 {
        match level {
            Level::Info => self.info,
            Level::Warn => self.warn,
            Level::Error => self.error,
        }
    }

    /// Classify `line` and increment the matching counter, if any.
    pub fn record(&mut self, line: &str) {
        match Level::classify(line) {
            Some(Level::Error) => self.error += 1,
            Some(Level::Warn) => self.warn += 1,
            Some(Level::Info) => self.info += 1,
            None => {}
        }
    }

    /// Total lines that matched any level pattern.
    pub fn matched(&self) -> u64 {
        self.info + self.warn + self.error
    }
}

// =============================================================================
// Date token
// =============================================================================

/// Return the 10-character date-shaped prefix of `line`, if present.
///
/// A line yields a token iff it is at least 10 bytes long and the bytes at
/// offsets 4 and 7 are both '-' (loose YYYY-MM-DD shape). No calendar
/// validation is performed: "2024-13-45" is a valid token. Lines whose
/// 10-byte prefix is not a UTF-8 character boundary are skipped like
/// short lines.
pub fn date_token(line: &str) -> Option<&str> {
    let bytes = line.as_bytes();
    if bytes.len() < DATE_TOKEN_LEN {
        return None;
    }
    if DATE_SEPARATOR_OFFSETS.iter().any(|&i| bytes[i] != b'-') {
        return None;
    }
    if !line.is_char_boundary(DATE_TOKEN_LEN) {
        return None;
    }
    Some(&line[..DATE_TOKEN_LEN])
}
