// server/src/cli/cli.rs

use anyhow::{Context, Result};
use clap::Parser;
use lib::{load_analysis_config, AnalysisConfig, AnalysisService};
use log::{error, info};

use crate::cli::banner::print_banner;
use crate::cli::commands::CliArgs;
use crate::cli::logging::init_logging;

/// CLI entry point: one full analysis pass per run.
pub async fn start_cli() -> Result<()> {
    let args = CliArgs::parse();
    run(args).await
}

pub async fn run(args: CliArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    init_logging(config.debug);
    print_banner();

    info!("Starting Transportation Network Optimization Analysis");
    info!("Input: {}", config.input_path.display());
    info!("Output: {}", config.output_path.display());

    let service = AnalysisService::new(config);
    match service.perform_complete_analysis().await {
        Ok(report) => {
            info!("Analysis completed successfully! {} graphs analyzed", report.len());
            Ok(())
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            Err(e).context("Analysis failed")
        }
    }
}

/// Config file (or defaults), then command-line overrides on top.
pub fn resolve_config(args: &CliArgs) -> Result<AnalysisConfig> {
    let config = load_analysis_config(args.config.as_deref()).context("Failed to load configuration")?;
    Ok(config
        .with_input_path(args.input.clone())
        .with_output_path(args.output.clone())
        .with_execution_time_precision(args.precision)
        .with_debug(args.debug))
}
