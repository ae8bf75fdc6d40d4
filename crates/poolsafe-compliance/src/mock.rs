//! # Scripted Evaluator (test double)
//!
//! A [`ChemicalEvaluator`] whose verdicts are fixed per parameter instead of
//! computed from a standards table. Consumers of the trait use it to drive
//! specific verdict combinations without searching for values that produce
//! them.
//!
//! Parameters that are recognised but not scripted behave like parameters
//! missing from an injected table: they fail with `UnknownParameter`.

use std::collections::BTreeMap;

use poolsafe_core::{ChemicalParameter, PoolsafeError, ReadingSet};

use crate::evaluator::ChemicalEvaluator;
use crate::report::{ComplianceReport, ParameterVerdict};
use crate::verdict::{ReadingBand, ValidationVerdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scripted {
    band: ReadingBand,
    closure: bool,
}

/// Evaluator returning pre-scripted verdicts.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvaluator {
    script: BTreeMap<ChemicalParameter, Scripted>,
}

impl ScriptedEvaluator {
    /// Evaluator with no scripted parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the band returned for `parameter`. Never requires closure.
    pub fn with(mut self, parameter: ChemicalParameter, band: ReadingBand) -> Self {
        self.script.insert(
            parameter,
            Scripted {
                band,
                closure: false,
            },
        );
        self
    }

    /// Script a critical verdict that requires closure.
    pub fn with_closure(mut self, parameter: ChemicalParameter, band: ReadingBand) -> Self {
        self.script.insert(
            parameter,
            Scripted {
                band,
                closure: true,
            },
        );
        self
    }

    fn scripted(&self, name: &str) -> Result<(ChemicalParameter, Scripted), PoolsafeError> {
        let parameter: ChemicalParameter = name.parse()?;
        self.script
            .get(&parameter)
            .map(|s| (parameter, *s))
            .ok_or_else(|| PoolsafeError::unknown_parameter(name))
    }

    fn verdict(parameter: ChemicalParameter, scripted: Scripted) -> ValidationVerdict {
        let status = scripted.band.status();
        ValidationVerdict::new(
            scripted.band,
            scripted.closure,
            format!("{} scripted {status}", parameter.display_name()),
        )
    }
}

impl ChemicalEvaluator for ScriptedEvaluator {
    fn validate_chemical(
        &self,
        _value: f64,
        parameter: &str,
    ) -> Result<ValidationVerdict, PoolsafeError> {
        let (parameter, scripted) = self.scripted(parameter)?;
        Ok(Self::verdict(parameter, scripted))
    }

    fn generate_compliance_report(
        &self,
        readings: &ReadingSet,
    ) -> Result<ComplianceReport, PoolsafeError> {
        let entries = readings
            .iter()
            .map(|(name, value)| {
                let (parameter, scripted) = self.scripted(name)?;
                let verdict = Self::verdict(parameter, scripted);
                let recommendation = Some(format!("Adjust {}", parameter.lowercase_name()));
                Ok((
                    ParameterVerdict {
                        parameter,
                        value,
                        verdict,
                    },
                    recommendation,
                ))
            })
            .collect::<Result<Vec<_>, PoolsafeError>>()?;
        Ok(ComplianceReport::from_entries(entries))
    }
}
