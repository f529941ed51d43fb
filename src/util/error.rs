// logscan - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// The scanning engine has exactly one failure kind: the target file cannot
// be opened for reading. Public scan operations swallow it into the
// documented return-value conventions (-1 from count_lines, empty results
// elsewhere); the typed error exists so the swallowing site can log the
// real cause before discarding it.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors produced by the scanning engine.
#[derive(Debug)]
pub enum ScanError {
    /// The target log file could not be opened for reading
    /// (missing file, permissions, etc).
    Open { path: PathBuf, source: io::Error },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "Cannot open file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
        }
    }
}

/// Convenience type alias for engine results.
pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_open_error_display_includes_path() {
        let err = ScanError::Open {
            path: PathBuf::from("missing.log"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let msg = err.to_string();
        assert!(msg.contains("missing.log"), "message was: {msg}");
    }

    #[test]
    fn test_open_error_preserves_source_chain() {
        let err = ScanError::Open {
            path: PathBuf::from("missing.log"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert!(err.source().is_some());
    }
}
