//! Command implementations for the SimpleNem12 CLI
//!
//! This module contains command execution, output rendering, and logging
//! setup for the CLI interface.

use crate::SimpleNem12Parser;
use crate::app::models::MeterRead;
use crate::app::services::nem12_parser::ParseStats;
use crate::cli::args::{Args, Commands, OutputFormat, ParseArgs, ValidateArgs};
use anyhow::{Context, Result, bail};
use colored::*;
use std::path::Path;
use tracing::{debug, info};

/// Main command runner
///
/// Dispatches to the subcommand handler. Callers handle the no-subcommand
/// case before getting here.
pub fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Commands::Parse(parse_args)) => run_parse(&parse_args),
        Some(Commands::Validate(validate_args)) => run_validate(&validate_args),
        None => bail!("No command given. Run with --help for usage."),
    }
}

/// Parse a file and print its meter reads in the requested format
///
/// A file that fails to parse yields no meter reads; the failure itself is
/// logged at error level.
pub fn run_parse(args: &ParseArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.build_config().context("Failed to load parser configuration")?;
    let parser = SimpleNem12Parser::with_config(config);

    let reads = parser.parse_simple_nem12(&args.file);
    info!("Read {} meters from {}", reads.len(), args.file.display());

    let output = match args.output_format {
        OutputFormat::Human => render_human(&args.file, &reads),
        OutputFormat::Json => render_json(&reads)?,
        OutputFormat::Csv => render_csv(&reads),
    };
    print!("{}", output);

    Ok(())
}

/// Check a file and fail with the first failure reason
pub fn run_validate(args: &ValidateArgs) -> Result<()> {
    setup_logging(args.get_log_level(), args.quiet)?;

    let config = args.build_config().context("Failed to load parser configuration")?;
    let parser = SimpleNem12Parser::with_config(config);

    match parser.parse_file_with_stats(&args.file) {
        Ok((reads, stats)) => {
            if !args.quiet {
                print!("{}", render_validation_summary(&args.file, &reads, &stats));
            }
            Ok(())
        }
        Err(e) => bail!("{} is not a valid SimpleNem12 file: {}", args.file.display(), e),
    }
}

/// Set up structured logging on stderr
fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("simple_nem12={}", log_level)));

    if quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .context("Failed to initialise logging")?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// One block per meter: identifier, unit, interval count and total, then
/// one line per day
fn render_human(file: &Path, reads: &[MeterRead]) -> String {
    let mut output = format!("{} {}\n", "SimpleNem12 file:".bold(), file.display());

    if reads.is_empty() {
        output.push_str(&format!("{}\n", "No meter reads found".yellow()));
        return output;
    }

    for read in reads {
        output.push_str(&format!(
            "\n{} {} ({}) - {} days, total {}\n",
            "Meter".green().bold(),
            read.nmi().bold(),
            read.energy_unit(),
            read.len(),
            read.total_volume()
        ));
        for (date, volume) in read.volumes() {
            output.push_str(&format!(
                "  {}  {:>12}  {}\n",
                date.format("%Y-%m-%d"),
                volume.volume.to_string(),
                volume.quality
            ));
        }
    }

    output
}

fn render_json(reads: &[MeterRead]) -> Result<String> {
    let mut json =
        serde_json::to_string_pretty(reads).context("Failed to serialise meter reads")?;
    json.push('\n');
    Ok(json)
}

/// One row per interval record, in file order
fn render_csv(reads: &[MeterRead]) -> String {
    let mut csv = String::from("nmi,energy_unit,date,volume,quality\n");
    for read in reads {
        for (date, volume) in read.volumes() {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                read.nmi(),
                read.energy_unit(),
                date.format("%Y-%m-%d"),
                volume.volume,
                volume.quality
            ));
        }
    }
    csv
}

fn render_validation_summary(file: &Path, reads: &[MeterRead], stats: &ParseStats) -> String {
    let mut output = format!(
        "{} {} is a valid SimpleNem12 file\n\
         Meters: {}\n\
         Interval records: {}\n\
         Lines read: {}\n",
        "✓".green(),
        file.display(),
        reads.len(),
        stats.child_records,
        stats.total_lines
    );

    if stats.ignored_lines() > 0 {
        output.push_str(&format!(
            "{} {} lines ignored ({} orphan interval records, {} unrecognised)\n",
            "!".yellow(),
            stats.ignored_lines(),
            stats.orphan_child_records,
            stats.unrecognised_lines
        ));
    }

    output
}
