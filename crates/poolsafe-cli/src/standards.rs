//! # Standards Subcommand
//!
//! Prints the standards table the other subcommands evaluate against.

use std::io::Write;

use anyhow::Result;

use poolsafe_core::{ClosureSide, StandardsTable};

use crate::{exit_code, OutputFormat};

/// Execute the standards subcommand.
pub fn run_standards(
    table: &StandardsTable,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<u8> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(table)?)?,
        OutputFormat::Text => {
            writeln!(
                out,
                "{:<18} {:<16} {:<16} {}",
                "parameter", "acceptable", "ideal", "closes pool"
            )?;
            for (parameter, standard) in table.iter() {
                let closes = match standard.closure {
                    ClosureSide::Never => "no",
                    ClosureSide::BelowMin => "below min",
                    ClosureSide::AboveMax => "above max",
                    ClosureSide::EitherSide => "either side",
                };
                writeln!(
                    out,
                    "{:<18} {:<16} {:<16} {}",
                    parameter.as_str(),
                    standard.acceptable_range_label(),
                    standard.ideal_range_label(),
                    closes
                )?;
            }
        }
    }
    Ok(exit_code::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_table_lists_every_parameter() {
        let mut out = Vec::new();
        run_standards(&StandardsTable::mahc(), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1 + StandardsTable::mahc().len());
        assert!(text.contains("free_chlorine"));
        assert!(text.contains("either side"));
    }

    #[test]
    fn json_table_roundtrips() {
        let mut out = Vec::new();
        run_standards(&StandardsTable::mahc(), OutputFormat::Json, &mut out).unwrap();
        let back = StandardsTable::from_json_str(std::str::from_utf8(&out).unwrap()).unwrap();
        assert_eq!(back, StandardsTable::mahc());
    }
}
