//! # Chemical Evaluator
//!
//! Defines the [`ChemicalEvaluator`] trait (the seam consumers program
//! against) and [`MahcEvaluator`], which classifies readings against an
//! injected [`StandardsTable`].
//!
//! ## Classification
//!
//! Nested, inclusive range containment:
//!
//! ```text
//! v < min                  → critical  (below_minimum)
//! min <= v < ideal.min     → warning   (below_ideal)
//! ideal.min <= v <= ideal.max → good   (ideal)
//! ideal.max < v <= max     → warning   (above_ideal)
//! v > max                  → critical  (above_maximum)
//! NaN                      → critical  (not_a_number)
//! ```
//!
//! Critical readings require closure only when the standard's
//! [`ClosureSide`](poolsafe_core::ClosureSide) covers the side the value fell
//! on. NaN counts as unsafe on either side.
//!
//! ## Failure
//!
//! The only error is `UnknownParameter`. It is returned as-is: the evaluator
//! does not log it, skip the entry, or substitute a default, and multi-reading
//! operations fail on the first unknown name without partial output.

use std::fmt;
use std::sync::Arc;

use poolsafe_core::{
    ChemicalParameter, ChemicalReading, ChemicalStandard, PoolsafeError, ReadingSet,
    StandardsTable,
};

use crate::closure::ClosureDecision;
use crate::recommendation::recommend;
use crate::report::{ComplianceReport, ParameterVerdict};
use crate::verdict::{ReadingBand, ValidationStatus, ValidationVerdict};

// ---------------------------------------------------------------------------
// ChemicalEvaluator Trait
// ---------------------------------------------------------------------------

/// The three evaluator operations.
///
/// Implementations must be pure: the result depends only on the arguments
/// and the implementation's immutable configuration. The `Send + Sync`
/// bound lets concurrent callers share one evaluator without coordination.
pub trait ChemicalEvaluator: Send + Sync + fmt::Debug {
    /// Classify one value for the named parameter.
    fn validate_chemical(
        &self,
        value: f64,
        parameter: &str,
    ) -> Result<ValidationVerdict, PoolsafeError>;

    /// Decide whether the pool must close given its current readings.
    ///
    /// Callers pass only the latest reading per parameter (see
    /// [`poolsafe_core::latest_per_parameter`]).
    fn should_close_pool(
        &self,
        readings: &[ChemicalReading],
    ) -> Result<ClosureDecision, PoolsafeError> {
        let verdicts = readings
            .iter()
            .map(|r| self.validate_chemical(r.value(), r.parameter()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ClosureDecision::from_verdicts(&verdicts))
    }

    /// Evaluate every entry of a reading set into a compliance report.
    fn generate_compliance_report(
        &self,
        readings: &ReadingSet,
    ) -> Result<ComplianceReport, PoolsafeError>;
}

// ---------------------------------------------------------------------------
// Pure classification
// ---------------------------------------------------------------------------

/// Locate `value` within the nested ranges of `standard`.
pub(crate) fn band_for(standard: &ChemicalStandard, value: f64) -> ReadingBand {
    if value.is_nan() {
        ReadingBand::NotANumber
    } else if standard.is_ideal(value) {
        ReadingBand::Ideal
    } else if standard.is_acceptable(value) {
        if value < standard.ideal.min {
            ReadingBand::BelowIdeal
        } else {
            ReadingBand::AboveIdeal
        }
    } else if value < standard.min {
        ReadingBand::BelowMinimum
    } else {
        ReadingBand::AboveMaximum
    }
}

/// Classify `value` against `standard` and render the verdict message.
pub(crate) fn classify(
    parameter: ChemicalParameter,
    standard: &ChemicalStandard,
    value: f64,
) -> ValidationVerdict {
    let band = band_for(standard, value);
    let closure = band.status() == ValidationStatus::Critical && standard.closure_triggered(value);

    let name = parameter.display_name();
    let reading = standard.format_reading(value);
    let ideal = standard.ideal_range_label();
    let acceptable = standard.acceptable_range_label();

    let mut message = match band {
        ReadingBand::Ideal => format!("{name} {reading} is good: within the ideal range {ideal}"),
        ReadingBand::BelowIdeal => format!(
            "{name} {reading} needs attention: below the ideal range {ideal} (acceptable {acceptable})"
        ),
        ReadingBand::AboveIdeal => format!(
            "{name} {reading} needs attention: above the ideal range {ideal} (acceptable {acceptable})"
        ),
        ReadingBand::BelowMinimum => format!(
            "{name} {reading} is critical: below the minimum of {} (acceptable {acceptable})",
            standard.format_threshold(standard.min)
        ),
        ReadingBand::AboveMaximum => format!(
            "{name} {reading} is critical: above the maximum of {} (acceptable {acceptable})",
            standard.format_threshold(standard.max)
        ),
        ReadingBand::NotANumber => format!(
            "{name} reading is critical: not a valid measurement (acceptable {acceptable})"
        ),
    };
    if closure {
        message.push_str("; the pool must be closed");
    }

    ValidationVerdict::new(band, closure, message)
}

// ---------------------------------------------------------------------------
// MahcEvaluator
// ---------------------------------------------------------------------------

/// Evaluator backed by an injected standards table.
///
/// Cloning is cheap; clones share the same table.
#[derive(Debug, Clone)]
pub struct MahcEvaluator {
    standards: Arc<StandardsTable>,
}

impl MahcEvaluator {
    /// Create an evaluator over a shared table.
    pub fn new(standards: Arc<StandardsTable>) -> Self {
        Self { standards }
    }

    /// Create an evaluator that owns its table.
    pub fn from_table(standards: StandardsTable) -> Self {
        Self::new(Arc::new(standards))
    }

    /// The table this evaluator classifies against.
    pub fn standards(&self) -> &StandardsTable {
        &self.standards
    }

    fn evaluate_entry(
        &self,
        name: &str,
        value: f64,
    ) -> Result<(ParameterVerdict, Option<String>), PoolsafeError> {
        let (parameter, standard) = self.standards.lookup(name)?;
        let verdict = classify(parameter, standard, value);
        let recommendation = recommend(parameter, standard, &verdict);
        Ok((
            ParameterVerdict {
                parameter,
                value,
                verdict,
            },
            recommendation,
        ))
    }
}

impl Default for MahcEvaluator {
    fn default() -> Self {
        Self::from_table(StandardsTable::mahc())
    }
}

impl ChemicalEvaluator for MahcEvaluator {
    fn validate_chemical(
        &self,
        value: f64,
        parameter: &str,
    ) -> Result<ValidationVerdict, PoolsafeError> {
        let (parameter, standard) = self.standards.lookup(parameter)?;
        Ok(classify(parameter, standard, value))
    }

    fn generate_compliance_report(
        &self,
        readings: &ReadingSet,
    ) -> Result<ComplianceReport, PoolsafeError> {
        let entries = readings
            .iter()
            .map(|(name, value)| self.evaluate_entry(name, value))
            .collect::<Result<Vec<_>, _>>()?;
        let report = ComplianceReport::from_entries(entries);
        tracing::debug!(
            overall = %report.overall,
            passed = report.passed,
            warnings = report.warnings,
            critical = report.critical,
            emergency = report.emergency,
            "compliance report generated"
        );
        Ok(report)
    }
}
