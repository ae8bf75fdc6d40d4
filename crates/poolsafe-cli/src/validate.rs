//! # Validate Subcommand
//!
//! Classifies a single reading, the way the entry form validates one field.
//!
//! Exit codes: 0 good, 2 warning, 3 critical.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use poolsafe_compliance::{ChemicalEvaluator, ValidationStatus};

use crate::{exit_code, OutputFormat};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Parameter name (e.g. free_chlorine, ph, calciumHardness).
    pub parameter: String,

    /// Observed value.
    #[arg(allow_negative_numbers = true)]
    pub value: f64,
}

/// Execute the validate subcommand.
pub fn run_validate(
    args: &ValidateArgs,
    evaluator: &dyn ChemicalEvaluator,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8> {
    let verdict = evaluator.validate_chemical(args.value, &args.parameter)?;
    tracing::debug!(
        parameter = %args.parameter,
        value = args.value,
        status = %verdict.status,
        "validated reading"
    );

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&verdict)?)?,
        OutputFormat::Text => {
            writeln!(out, "[{}] {}", verdict.status, verdict.message)?;
            if verdict.requires_closure {
                writeln!(out, "ACTION: close the pool")?;
            } else if verdict.requires_action {
                writeln!(out, "ACTION: adjust {}", args.parameter)?;
            }
        }
    }

    Ok(match verdict.status {
        ValidationStatus::Good => exit_code::OK,
        ValidationStatus::Warning => exit_code::WARNING,
        ValidationStatus::Critical => exit_code::CRITICAL,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolsafe_compliance::{MahcEvaluator, ReadingBand, ScriptedEvaluator};
    use poolsafe_core::ChemicalParameter;

    fn run(parameter: &str, value: f64, format: OutputFormat) -> (Result<u8>, String) {
        let mut out = Vec::new();
        let args = ValidateArgs {
            parameter: parameter.into(),
            value,
        };
        let code = run_validate(&args, &MahcEvaluator::default(), format, &mut out);
        (code, String::from_utf8(out).unwrap())
    }

    #[test]
    fn good_reading_exits_zero() {
        let (code, out) = run("freeChlorine", 2.0, OutputFormat::Text);
        assert_eq!(code.unwrap(), exit_code::OK);
        assert!(out.starts_with("[good] Free chlorine 2.0 ppm"));
    }

    #[test]
    fn closure_reading_prints_action() {
        let (code, out) = run("ph", 8.5, OutputFormat::Text);
        assert_eq!(code.unwrap(), exit_code::CRITICAL);
        assert!(out.contains("ACTION: close the pool"));
    }

    #[test]
    fn json_output_is_verdict() {
        let (code, out) = run("calciumHardness", 450.0, OutputFormat::Json);
        assert_eq!(code.unwrap(), exit_code::CRITICAL);
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["status"], "critical");
        assert_eq!(json["requires_closure"], false);
    }

    #[test]
    fn unknown_parameter_is_error() {
        let (code, out) = run("unknownChemical", 1.0, OutputFormat::Text);
        assert!(code.unwrap_err().to_string().contains("unknownChemical"));
        assert!(out.is_empty());
    }

    #[test]
    fn warning_exit_code_with_scripted_evaluator() {
        let evaluator =
            ScriptedEvaluator::new().with(ChemicalParameter::Ph, ReadingBand::BelowIdeal);
        let args = ValidateArgs {
            parameter: "ph".into(),
            value: 0.0,
        };
        let mut out = Vec::new();
        let code = run_validate(&args, &evaluator, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(code, exit_code::WARNING);
    }
}
