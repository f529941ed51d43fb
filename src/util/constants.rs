// logscan - util/constants.rs
//
// Single source of truth for named constants and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "logscan";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Date token geometry
// =============================================================================

/// Length in bytes of a date token (the "YYYY-MM-DD" prefix of a line).
pub const DATE_TOKEN_LEN: usize = 10;

/// Byte offsets within the token that must hold a '-' separator.
pub const DATE_SEPARATOR_OFFSETS: [usize; 2] = [4, 7];
