// logscan - core/scanner.rs
//
// Single-pass, line-oriented scans over one target log file.
//
// The scanner is stateless apart from the file path: every operation opens
// the file afresh, streams it line by line, and releases the handle on
// every exit path (drop of the BufReader). Calls are independent and
// reentrant; no result is cached across calls.
//
// Failure convention (reproduced faithfully from the original tool):
// count_lines signals an unopenable file with the sentinel -1; every other
// operation returns an empty result, indistinguishable from "file opened
// but nothing matched". The typed ScanError is logged at the swallowing
// site so the real cause is still visible with --debug.

use crate::core::model::{date_token, LevelStats};
use crate::util::error::ScanError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Read-only analysis operations over the lines of one log file.
#[derive(Debug, Clone)]
pub struct LogScanner {
    path: PathBuf,
}

impl LogScanner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the target file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<BufReader<File>, ScanError> {
        File::open(&self.path)
            .map(BufReader::new)
            .map_err(|source| ScanError::Open {
                path: self.path.clone(),
                source,
            })
    }

    /// Stream the file line by line, invoking `visit` for each line with
    /// the trailing newline (and any '\r' before it) stripped. Lines are
    /// read as raw bytes and converted lossily, so non-UTF-8 content is
    /// scanned rather than aborting the pass.
    ///
    /// Returns the number of lines visited. Err only when the file cannot
    /// be opened; a read error mid-file ends the scan with the lines
    /// visited so far.
    fn scan_lines<F: FnMut(&str)>(&self, mut visit: F) -> Result<u64, ScanError> {
        let mut reader = self.open()?;
        let mut buf = Vec::new();
        let mut count: u64 = 0;
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {
                    if buf.last() == Some(&b'\n') {
                        buf.pop();
                        if buf.last() == Some(&b'\r') {
                            buf.pop();
                        }
                    }
                    count += 1;
                    visit(&String::from_utf8_lossy(&buf));
                }
                Err(e) => {
                    tracing::warn!(
                        file = %self.path.display(),
                        error = %e,
                        lines_read = count,
                        "Read error mid-scan; stopping early"
                    );
                    break;
                }
            }
        }
        Ok(count)
    }

    /// Count the newline-delimited records in the file.
    ///
    /// Returns -1 if the file cannot be opened. This is the only operation
    /// with a sentinel-error convention; counts are otherwise non-negative.
    pub fn count_lines(&self) -> i64 {
        let scanned = self.scan_lines(|_| {});
        match scanned {
            Ok(count) => {
                tracing::debug!(file = %self.path.display(), lines = count, "Count complete");
                count as i64
            }
            Err(e) => {
                tracing::warn!(error = %e, "count_lines: returning -1");
                -1
            }
        }
    }

    /// Lines containing `keyword` as a contiguous, case-sensitive
    /// substring, in file order with the original text untrimmed. The
    /// empty keyword matches every line. Empty result if the file cannot
    /// be opened.
    pub fn search(&self, keyword: &str) -> Vec<String> {
        let mut hits = Vec::new();
        let scanned = self.scan_lines(|line| {
            if line.contains(keyword) {
                hits.push(line.to_string());
            }
        });
        match scanned {
            Ok(lines) => {
                tracing::debug!(
                    file = %self.path.display(),
                    keyword,
                    lines,
                    hits = hits.len(),
                    "Search complete"
                );
            }
            Err(e) => tracing::warn!(error = %e, "search: returning empty result"),
        }
        hits
    }

    /// Lines containing the substring `level + ":"` anywhere (e.g.
    /// level="ERROR" matches any line containing "ERROR:"). The level
    /// string is not validated. Empty result if the file cannot be opened.
    pub fn filter_by_level(&self, level: &str) -> Vec<String> {
        let pattern = format!("{level}:");
        let mut hits = Vec::new();
        let scanned = self.scan_lines(|line| {
            if line.contains(&pattern) {
                hits.push(line.to_string());
            }
        });
        match scanned {
            Ok(lines) => {
                tracing::debug!(
                    file = %self.path.display(),
                    level,
                    lines,
                    hits = hits.len(),
                    "Level filter complete"
                );
            }
            Err(e) => tracing::warn!(error = %e, "filter_by_level: returning empty result"),
        }
        hits
    }

    /// Per-level line counts under first-match priority ERROR > WARN >
    /// INFO; at most one counter is incremented per line. All-zero stats
    /// if the file cannot be opened.
    pub fn level_stats(&self) -> LevelStats {
        let mut stats = LevelStats::default();
        let scanned = self.scan_lines(|line| stats.record(line));
        match scanned {
            Ok(lines) => {
                tracing::debug!(
                    file = %self.path.display(),
                    lines,
                    info = stats.info,
                    warn = stats.warn,
                    error = stats.error,
                    "Level stats complete"
                );
            }
            Err(e) => tracing::warn!(error = %e, "level_stats: returning zero stats"),
        }
        stats
    }

    /// The 10-character date-shaped tokens found at the start of lines, in
    /// file order. Lines shorter than 10 bytes or not matching the shape
    /// are skipped. Empty result if the file cannot be opened.
    pub fn extract_all_dates(&self) -> Vec<String> {
        let mut dates = Vec::new();
        let scanned = self.scan_lines(|line| {
            if let Some(token) = date_token(line) {
                dates.push(token.to_string());
            }
        });
        match scanned {
            Ok(lines) => {
                tracing::debug!(
                    file = %self.path.display(),
                    lines,
                    dates = dates.len(),
                    "Date extraction complete"
                );
            }
            Err(e) => tracing::warn!(error = %e, "extract_all_dates: returning empty result"),
        }
        dates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_log(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_count_lines_newline_terminated() {
        let file = write_log("a\nb\nc\n");
        assert_eq!(LogScanner::new(file.path()).count_lines(), 3);
    }

    /// A trailing record without a final newline still counts.
    #[test]
    fn test_count_lines_no_trailing_newline() {
        let file = write_log("a\nb");
        assert_eq!(LogScanner::new(file.path()).count_lines(), 2);
    }

    #[test]
    fn test_count_lines_empty_file() {
        let file = write_log("");
        assert_eq!(LogScanner::new(file.path()).count_lines(), 0);
    }

    #[test]
    fn test_count_lines_missing_file_sentinel() {
        let scanner = LogScanner::new("/nonexistent/logscan-test.log");
        assert_eq!(scanner.count_lines(), -1);
    }

    #[test]
    fn test_search_case_sensitive_file_order() {
        let file = write_log("alpha one\nBETA two\nalpha three\n");
        let scanner = LogScanner::new(file.path());
        assert_eq!(scanner.search("alpha"), vec!["alpha one", "alpha three"]);
        assert!(scanner.search("beta").is_empty(), "search is case-sensitive");
    }

    /// The empty keyword matches every line.
    #[test]
    fn test_search_empty_keyword_matches_all() {
        let file = write_log("a\nb\n");
        let scanner = LogScanner::new(file.path());
        assert_eq!(scanner.search(""), vec!["a", "b"]);
    }

    #[test]
    fn test_search_preserves_original_text() {
        let file = write_log("  padded INFO: line  \n");
        let scanner = LogScanner::new(file.path());
        assert_eq!(scanner.search("padded"), vec!["  padded INFO: line  "]);
    }

    #[test]
    fn test_search_missing_file_returns_empty() {
        let scanner = LogScanner::new("/nonexistent/logscan-test.log");
        assert!(scanner.search("anything").is_empty());
    }

    #[test]
    fn test_filter_by_level_unanchored_pattern() {
        let file = write_log("2024-01-01 INFO: start\n2024-01-02 ERROR: boom\n");
        let scanner = LogScanner::new(file.path());
        assert_eq!(
            scanner.filter_by_level("ERROR"),
            vec!["2024-01-02 ERROR: boom"]
        );
    }

    /// The level argument is not validated; any string forms a pattern.
    #[test]
    fn test_filter_by_level_arbitrary_level() {
        let file = write_log("TRACE: deep detail\nINFO: hello\n");
        let scanner = LogScanner::new(file.path());
        assert_eq!(scanner.filter_by_level("TRACE"), vec!["TRACE: deep detail"]);
    }

    #[test]
    fn test_filter_by_level_missing_file_returns_empty() {
        let scanner = LogScanner::new("/nonexistent/logscan-test.log");
        assert!(scanner.filter_by_level("ERROR").is_empty());
    }

    #[test]
    fn test_level_stats_first_match_priority() {
        let file = write_log("x ERROR: a INFO: b\n");
        let stats = LogScanner::new(file.path()).level_stats();
        assert_eq!(stats.error, 1);
        assert_eq!(stats.warn, 0);
        assert_eq!(stats.info, 0);
    }

    #[test]
    fn test_level_stats_sum_bounded_by_line_count() {
        let file = write_log("INFO: a\nWARN: b\nplain\nERROR: c\n");
        let scanner = LogScanner::new(file.path());
        let stats = scanner.level_stats();
        assert_eq!(stats.matched(), 3);
        assert!(stats.matched() as i64 <= scanner.count_lines());
    }

    #[test]
    fn test_level_stats_missing_file_all_zero() {
        let stats = LogScanner::new("/nonexistent/logscan-test.log").level_stats();
        assert_eq!(stats, LevelStats::default());
    }

    #[test]
    fn test_extract_all_dates_file_order() {
        let file = write_log("2024-01-05 INFO: a\nno date here\n2024-01-01 WARN: b\n");
        let dates = LogScanner::new(file.path()).extract_all_dates();
        assert_eq!(dates, vec!["2024-01-05", "2024-01-01"]);
    }

    /// Shape-only acceptance: invalid calendar dates are extracted.
    #[test]
    fn test_extract_all_dates_no_calendar_check() {
        let file = write_log("2024-13-45 garbage\n");
        let dates = LogScanner::new(file.path()).extract_all_dates();
        assert_eq!(dates, vec!["2024-13-45"]);
    }

    #[test]
    fn test_extract_all_dates_missing_file_returns_empty() {
        let scanner = LogScanner::new("/nonexistent/logscan-test.log");
        assert!(scanner.extract_all_dates().is_empty());
    }

    /// CRLF line endings are stripped before matching, so the pattern at
    /// end-of-line still matches and counts are unaffected.
    #[test]
    fn test_crlf_line_endings() {
        let file = write_log("INFO: one\r\nERROR: two\r\n");
        let scanner = LogScanner::new(file.path());
        assert_eq!(scanner.count_lines(), 2);
        assert_eq!(scanner.search("one"), vec!["INFO: one"]);
    }

    /// Non-UTF-8 bytes must not abort the scan; the line is converted
    /// lossily and still counted.
    #[test]
    fn test_non_utf8_line_still_counted() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"INFO: ok\n\xff\xfe bad bytes\nERROR: end\n")
            .unwrap();
        file.flush().unwrap();
        let scanner = LogScanner::new(file.path());
        assert_eq!(scanner.count_lines(), 3);
        let stats = scanner.level_stats();
        assert_eq!(stats.info, 1);
        assert_eq!(stats.error, 1);
    }

    /// Repeated calls on an unmodified file return identical results.
    #[test]
    fn test_idempotence() {
        let file = write_log("2024-01-01 INFO: a\n2024-01-02 ERROR: b\n");
        let scanner = LogScanner::new(file.path());
        assert_eq!(scanner.count_lines(), scanner.count_lines());
        assert_eq!(scanner.search("a"), scanner.search("a"));
        assert_eq!(scanner.level_stats(), scanner.level_stats());
        assert_eq!(scanner.extract_all_dates(), scanner.extract_all_dates());
    }
}
