// logscan - lib.rs
//
// Library entry point, exposing the scanning engine and the CLI glue for
// integration testing.

pub mod cli;
pub mod core;
pub mod util;
