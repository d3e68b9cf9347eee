// server/src/main.rs

// This is the main entry point for the MST analysis CLI.
// It handles command-line argument parsing and dispatches to the CLI logic.

use anyhow::Result;
use mst_server::cli::start_cli;

#[tokio::main]
async fn main() -> Result<()> {
    start_cli().await
}
