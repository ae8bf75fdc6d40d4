//! # poolsafe CLI entry point
//!
//! Parses command-line arguments, loads the standards table, and dispatches
//! to subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use poolsafe_cli::closure::{run_closure, ClosureArgs};
use poolsafe_cli::report::{run_report, ReportArgs};
use poolsafe_cli::standards::run_standards;
use poolsafe_cli::validate::{run_validate, ValidateArgs};
use poolsafe_cli::{exit_code, OutputFormat};
use poolsafe_compliance::MahcEvaluator;
use poolsafe_core::StandardsTable;

/// poolsafe: pool chemistry compliance against MAHC standards.
///
/// Validates single readings, generates compliance reports, and decides
/// whether a pool must close.
#[derive(Parser, Debug)]
#[command(name = "poolsafe", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML or JSON standards table. Defaults to the built-in MAHC table.
    #[arg(long, global = true)]
    standards: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify a single reading.
    Validate(ValidateArgs),

    /// Generate a compliance report over a set of readings.
    Report(ReportArgs),

    /// Decide whether a pool must close.
    Closure(ClosureArgs),

    /// Print the active standards table.
    Standards,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(exit_code::ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let table = match &cli.standards {
        Some(path) => StandardsTable::load(path)
            .with_context(|| format!("failed to load standards from {}", path.display()))?,
        None => StandardsTable::mahc(),
    };
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let table = Arc::new(table);
    let evaluator = MahcEvaluator::new(Arc::clone(&table));
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match &cli.command {
        Commands::Validate(args) => run_validate(args, &evaluator, format, &mut out)?,
        Commands::Report(args) => run_report(args, &evaluator, format, &mut out)?,
        Commands::Closure(args) => run_closure(args, &evaluator, format, &mut out)?,
        Commands::Standards => run_standards(&table, format, &mut out)?,
    };
    out.flush()?;
    Ok(code)
}
