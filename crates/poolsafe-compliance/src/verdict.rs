//! # Validation Verdict
//!
//! The per-reading classification produced by the evaluator. Verdicts are
//! derived on demand and never stored by this crate.
//!
//! Status ordering (best → worst): `Good < Warning < Critical`. The report's
//! overall state is the worst status present, so a single critical reading
//! dominates the aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of one reading against its standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// Within the ideal range.
    Good,
    /// Acceptable but outside the ideal range.
    Warning,
    /// Outside the acceptable range, or not a valid measurement.
    Critical,
}

impl ValidationStatus {
    /// Severity ordinal matching this status.
    pub fn severity(self) -> Severity {
        match self {
            Self::Good => Severity::Low,
            Self::Warning => Severity::Medium,
            Self::Critical => Severity::High,
        }
    }

    /// snake_case name, matching the serde format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal severity, one per status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Ideal reading.
    Low,
    /// Acceptable but needs adjustment.
    Medium,
    /// Outside the acceptable range.
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => f.write_str("low"),
            Self::Medium => f.write_str("medium"),
            Self::High => f.write_str("high"),
        }
    }
}

/// Where a value fell relative to the nested ranges of its standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingBand {
    /// `ideal.min <= v <= ideal.max`
    Ideal,
    /// `min <= v < ideal.min`
    BelowIdeal,
    /// `ideal.max < v <= max`
    AboveIdeal,
    /// `v < min`
    BelowMinimum,
    /// `v > max`
    AboveMaximum,
    /// NaN; has no position on the scale.
    NotANumber,
}

impl ReadingBand {
    /// Status implied by this band.
    pub fn status(self) -> ValidationStatus {
        match self {
            Self::Ideal => ValidationStatus::Good,
            Self::BelowIdeal | Self::AboveIdeal => ValidationStatus::Warning,
            Self::BelowMinimum | Self::AboveMaximum | Self::NotANumber => {
                ValidationStatus::Critical
            }
        }
    }

    /// Whether the value sits below its target.
    pub fn is_low(self) -> bool {
        matches!(self, Self::BelowIdeal | Self::BelowMinimum)
    }

    /// Whether the value sits above its target.
    pub fn is_high(self) -> bool {
        matches!(self, Self::AboveIdeal | Self::AboveMaximum)
    }
}

/// Result of validating one chemical value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// Good, warning, or critical.
    pub status: ValidationStatus,
    /// Ordinal matching `status`.
    pub severity: Severity,
    /// Where the value fell relative to the standard's ranges.
    pub band: ReadingBand,
    /// True for every warning and critical verdict.
    pub requires_action: bool,
    /// True only for critical readings on the unsafe side of a
    /// closure-triggering parameter.
    pub requires_closure: bool,
    /// Ready-to-render explanation naming the parameter, its classification,
    /// and for non-good verdicts the acceptable range.
    pub message: String,
}

impl ValidationVerdict {
    /// Assemble a verdict from its band. `requires_closure` is ignored unless
    /// the band is critical.
    pub fn new(band: ReadingBand, requires_closure: bool, message: impl Into<String>) -> Self {
        let status = band.status();
        Self {
            status,
            severity: status.severity(),
            band,
            requires_action: status != ValidationStatus::Good,
            requires_closure: requires_closure && status == ValidationStatus::Critical,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ordering_and_severity() {
        assert!(ValidationStatus::Good < ValidationStatus::Warning);
        assert!(ValidationStatus::Warning < ValidationStatus::Critical);
        assert_eq!(ValidationStatus::Good.severity(), Severity::Low);
        assert_eq!(ValidationStatus::Warning.severity(), Severity::Medium);
        assert_eq!(ValidationStatus::Critical.severity(), Severity::High);
    }

    #[test]
    fn band_to_status() {
        assert_eq!(ReadingBand::Ideal.status(), ValidationStatus::Good);
        assert_eq!(ReadingBand::BelowIdeal.status(), ValidationStatus::Warning);
        assert_eq!(ReadingBand::AboveIdeal.status(), ValidationStatus::Warning);
        assert_eq!(ReadingBand::BelowMinimum.status(), ValidationStatus::Critical);
        assert_eq!(ReadingBand::AboveMaximum.status(), ValidationStatus::Critical);
        assert_eq!(ReadingBand::NotANumber.status(), ValidationStatus::Critical);
    }

    #[test]
    fn closure_flag_only_sticks_to_critical() {
        let warning = ValidationVerdict::new(ReadingBand::BelowIdeal, true, "x");
        assert!(warning.requires_action);
        assert!(!warning.requires_closure);

        let critical = ValidationVerdict::new(ReadingBand::BelowMinimum, true, "x");
        assert!(critical.requires_closure);

        let good = ValidationVerdict::new(ReadingBand::Ideal, false, "x");
        assert!(!good.requires_action);
    }

    #[test]
    fn serde_uses_snake_case() {
        let v = ValidationVerdict::new(ReadingBand::AboveMaximum, false, "m");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["status"], "critical");
        assert_eq!(json["severity"], "high");
        assert_eq!(json["band"], "above_maximum");
    }
}
