// logscan - util/mod.rs
//
// Shared utilities: errors, constants, logging.

pub mod constants;
pub mod error;
pub mod logging;
