// logscan - core/mod.rs
//
// Scanning engine layer.
// Performs its own scoped file I/O but must NOT depend on: cli, terminal
// colouring, or argument handling.

pub mod model;
pub mod report;
pub mod scanner;
