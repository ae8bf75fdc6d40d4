//! # Report Subcommand
//!
//! Builds a compliance report from a reading file and/or inline pairs.
//! Inline pairs override file entries for the same parameter.
//!
//! Exit codes: 0 compliant, 2 non-compliant, 3 critical.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use poolsafe_compliance::{ChemicalEvaluator, ComplianceReport, OverallCompliance};
use poolsafe_core::ReadingSet;

use crate::input::{parse_pair, read_document};
use crate::{exit_code, OutputFormat};

/// Arguments for the report subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// JSON or YAML map of parameter name to value.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Inline readings as PARAM=VALUE.
    #[arg(value_parser = parse_pair, allow_negative_numbers = true)]
    pub readings: Vec<(String, f64)>,
}

/// Execute the report subcommand.
pub fn run_report(
    args: &ReportArgs,
    evaluator: &dyn ChemicalEvaluator,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8> {
    let mut set: ReadingSet = match &args.input {
        Some(path) => read_document(path)?,
        None => ReadingSet::new(),
    };
    for (name, value) in &args.readings {
        set.insert(name.clone(), *value);
    }
    if set.is_empty() {
        bail!("no readings supplied; pass --input FILE or PARAM=VALUE pairs");
    }

    let report = evaluator.generate_compliance_report(&set)?;

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?,
        OutputFormat::Text => render_text(&report, out)?,
    }

    Ok(match report.overall {
        OverallCompliance::Compliant => exit_code::OK,
        OverallCompliance::NonCompliant => exit_code::WARNING,
        OverallCompliance::Critical => exit_code::CRITICAL,
    })
}

fn render_text(report: &ComplianceReport, out: &mut dyn Write) -> Result<()> {
    writeln!(
        out,
        "Overall: {} (pool {})",
        report.overall,
        report.pool_status()
    )?;
    writeln!(
        out,
        "Tests: {} passed, {} warning, {} critical, {} emergency",
        report.passed, report.warnings, report.critical, report.emergency
    )?;
    writeln!(out)?;
    for detail in &report.details {
        writeln!(
            out,
            "  {:<18} {:<8} {}",
            detail.parameter.as_str(),
            detail.verdict.status.as_str(),
            detail.verdict.message
        )?;
    }
    if !report.required_actions.is_empty() {
        writeln!(out)?;
        writeln!(out, "Required actions:")?;
        for action in &report.required_actions {
            writeln!(out, "  - {action}")?;
        }
    }
    Ok(())
}
