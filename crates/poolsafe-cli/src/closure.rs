//! # Closure Subcommand
//!
//! Decides whether a pool must close from a file of chemical readings.
//!
//! Exit codes: 0 pool stays open, 3 pool must close.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use poolsafe_compliance::ChemicalEvaluator;
use poolsafe_core::{latest_per_parameter, ChemicalReading, PoolId};

use crate::input::read_document;
use crate::{exit_code, OutputFormat};

/// Arguments for the closure subcommand.
#[derive(Args, Debug)]
pub struct ClosureArgs {
    /// JSON or YAML list of chemical readings.
    #[arg(long)]
    pub input: PathBuf,

    /// Reduce the input to the newest reading per pool and parameter first.
    #[arg(long)]
    pub latest: bool,

    /// Only consider readings for this pool.
    #[arg(long)]
    pub pool: Option<String>,
}

/// Execute the closure subcommand.
pub fn run_closure(
    args: &ClosureArgs,
    evaluator: &dyn ChemicalEvaluator,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8> {
    let mut readings: Vec<ChemicalReading> = read_document(&args.input)?;

    if let Some(pool) = &args.pool {
        let pool = PoolId::new(pool.as_str())?;
        readings.retain(|r| r.pool_id() == &pool);
        if readings.is_empty() {
            bail!("no readings found for pool {pool}");
        }
    }
    if args.latest {
        readings = latest_per_parameter(&readings).into_iter().cloned().collect();
    }
    tracing::debug!(readings = readings.len(), "evaluating pool closure");

    let decision = evaluator.should_close_pool(&readings)?;

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&decision)?)?,
        OutputFormat::Text => {
            if decision.should_close {
                writeln!(out, "CLOSE POOL")?;
                for reason in &decision.reasons {
                    writeln!(out, "  - {reason}")?;
                }
            } else {
                writeln!(out, "Pool may remain open ({} readings checked)", readings.len())?;
            }
        }
    }

    Ok(if decision.should_close {
        exit_code::CRITICAL
    } else {
        exit_code::OK
    })
}
