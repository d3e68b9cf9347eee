// server/src/cli/commands.rs

// This file defines the command-line arguments for the MST analysis CLI
// using the `clap` crate.
use clap::Parser;
use std::path::PathBuf;

/// Minimum spanning tree analysis for transportation networks.
#[derive(Parser, Debug, PartialEq)]
#[command(name = "mst-cli")]
#[command(version = "0.1.0")]
#[command(about = "Compare Prim's and Kruskal's algorithms on a batch of road networks")]
pub struct CliArgs {
    /// JSON file with the graphs to analyze.
    #[arg(short = 'i', long = "input", value_name = "FILE", env = "MST_INPUT")]
    pub input: Option<PathBuf>,

    /// JSON file the results are written to.
    #[arg(short = 'o', long = "output", value_name = "FILE", env = "MST_OUTPUT")]
    pub output: Option<PathBuf>,

    /// TOML config file with an `[analysis]` section.
    #[arg(short = 'c', long = "config", value_name = "FILE", env = "MST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Decimal places kept for execution times in the output file.
    #[arg(short = 'p', long = "precision", value_name = "DIGITS")]
    pub precision: Option<u32>,

    /// Enable debug logging.
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_without_arguments() {
        let args = CliArgs::try_parse_from(["mst-cli"]).unwrap();
        assert_eq!(args.output, None);
        assert_eq!(args.precision, None);
        assert!(!args.debug);
    }

    #[test]
    fn should_parse_overrides() {
        let args = CliArgs::try_parse_from([
            "mst-cli",
            "--input",
            "graphs.json",
            "-o",
            "out.json",
            "--precision",
            "3",
            "--debug",
        ])
        .unwrap();
        assert_eq!(args.input, Some(PathBuf::from("graphs.json")));
        assert_eq!(args.output, Some(PathBuf::from("out.json")));
        assert_eq!(args.precision, Some(3));
        assert!(args.debug);
    }

    #[test]
    fn should_reject_non_numeric_precision() {
        assert!(CliArgs::try_parse_from(["mst-cli", "--precision", "two"]).is_err());
    }
}
