//! Command-line interface components.

use crate::config::{ConverterConfig, HeaderStyle, OutputFormat};
use crate::constants::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
use crate::processor::{ConversionSummary, parse_bytes, write_output};
use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "dxa-processor")]
#[command(about = "Convert DXA scanner exports (UTF-16, tab-delimited) to JSON or CSV")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Scanner export file to convert
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file (defaults to <FILE>.<format>)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Use positional CSV column names (Mass_0_Total, Value_0, ...)
    #[arg(long)]
    pub generic_headers: bool,

    /// Decimal places for numbers in CSV output (0-17)
    #[arg(
        long,
        value_name = "N",
        default_value_t = DEFAULT_DECIMAL_PLACES,
        value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_DECIMAL_PLACES))
    )]
    pub precision: u8,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Build the conversion configuration from the parsed arguments
    pub fn to_config(&self) -> ConverterConfig {
        let header_style = if self.generic_headers {
            HeaderStyle::Generic
        } else {
            HeaderStyle::Friendly
        };

        let config = ConverterConfig::default()
            .with_format(self.format)
            .with_header_style(header_style)
            .with_decimal_places(self.precision);

        match &self.output {
            Some(path) => config.with_output_path(path),
            None => config,
        }
    }

    /// Log level implied by -v/-q
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dxa_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Run a conversion for the parsed arguments.
///
/// Each stage adds its own context so failures name the stage and path.
pub fn run(args: &Args) -> Result<ConversionSummary> {
    let start_time = Instant::now();
    let config = args.to_config();
    debug!("Conversion configuration: {:?}", config);

    let bytes = fs::read(&args.input)
        .with_context(|| format!("Error opening input file {}", args.input.display()))?;

    let parsed = parse_bytes(&bytes)
        .with_context(|| format!("Error parsing file {}", args.input.display()))?;

    let output_path = config.resolve_output_path(&args.input);
    let summary = write_output(&args.input, parsed, &config, start_time)
        .with_context(|| format!("Error writing output {}", output_path.display()))?;

    if !args.quiet {
        report(&summary)?;
    }

    Ok(summary)
}

fn report(summary: &ConversionSummary) -> Result<()> {
    let absolute = std::path::absolute(&summary.output_path).with_context(|| {
        format!(
            "Failed to resolve output path {}",
            summary.output_path.display()
        )
    })?;

    let stats = &summary.parsed.stats;
    println!(
        "  {} {} ({} records, {} rows skipped)",
        "Detected:".bright_cyan(),
        summary.parsed.modality,
        stats.rows_accepted.to_string().bright_white().bold(),
        stats.rows_skipped()
    );
    println!("{} {}", "Wrote:".bright_green().bold(), absolute.display());
    Ok(())
}
