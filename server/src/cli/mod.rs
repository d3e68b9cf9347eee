// server/src/cli/mod.rs

// This file declares the modules within the 'cli' directory and re-exports
// the entry point for main.rs.

pub mod banner;
pub mod cli;
pub mod commands;
pub mod logging;

pub use cli::{resolve_config, run, start_cli};
pub use commands::CliArgs;
pub use logging::init_logging;
