//! CLI argument parsing for pldcalc

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the timing table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
    /// Standalone HTML report
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "pldcalc")]
#[command(version)]
#[command(
    about = "Multi-PLD ASL timing calculator: label durations and post-label delays",
    long_about = None
)]
pub struct Cli {
    /// CV4: shortest post-label delay in ms (default 1000)
    #[arg(long = "min-delay", value_name = "MS", allow_negative_numbers = true)]
    pub min_delay: Option<f64>,

    /// CV5: total perfusion labeling time in ms (default 3500)
    #[arg(long = "label-duration", value_name = "MS", allow_negative_numbers = true)]
    pub label_duration: Option<f64>,

    /// CV6: number of post-label delays to acquire (default 7)
    #[arg(short = 'n', long = "steps", value_name = "N")]
    pub steps: Option<usize>,

    /// CV7: delay linearity, 1.0 = linear, 0.0 = exponential (default 0.5)
    #[arg(short = 'l', long = "linearity", value_name = "W", allow_negative_numbers = true)]
    pub linearity: Option<f64>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Load defaults and input limits from a TOML file
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Skip the scanner input-range checks
    #[arg(long = "no-limits")]
    pub no_limits: bool,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Page title for HTML output
    #[arg(long = "title", value_name = "TEXT")]
    pub title: Option<String>,

    /// Enable debug tracing on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["pldcalc"]);
        assert!(cli.min_delay.is_none());
        assert!(cli.label_duration.is_none());
        assert!(cli.steps.is_none());
        assert!(cli.linearity.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(!cli.no_limits);
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_parses_parameters() {
        let cli = Cli::parse_from([
            "pldcalc",
            "--min-delay",
            "1500",
            "--label-duration",
            "3000",
            "-n",
            "3",
            "-l",
            "0.25",
        ]);
        assert_eq!(cli.min_delay, Some(1500.0));
        assert_eq!(cli.label_duration, Some(3000.0));
        assert_eq!(cli.steps, Some(3));
        assert_eq!(cli.linearity, Some(0.25));
    }

    #[test]
    fn test_cli_format_json() {
        let cli = Cli::parse_from(["pldcalc", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_negative_linearity_parses() {
        let cli = Cli::parse_from(["pldcalc", "--linearity", "-0.5", "--no-limits"]);
        assert_eq!(cli.linearity, Some(-0.5));
        assert!(cli.no_limits);
    }

    #[test]
    fn test_cli_rejects_negative_steps() {
        assert!(Cli::try_parse_from(["pldcalc", "--steps", "-3"]).is_err());
    }

    #[test]
    fn test_cli_config_and_output_paths() {
        let cli = Cli::parse_from(["pldcalc", "-c", "site.toml", "-o", "out.html"]);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
    }
}
