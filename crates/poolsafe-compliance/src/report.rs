//! # Compliance Report
//!
//! Aggregate over one evaluation pass of a reading set. The report holds no
//! timestamps, identifiers, or counters beyond what its inputs determine,
//! so evaluating the same readings twice yields equal reports.

use std::fmt;

use serde::{Deserialize, Serialize};

use poolsafe_core::ChemicalParameter;

use crate::verdict::{ValidationStatus, ValidationVerdict};

/// Overall compliance of a reading set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallCompliance {
    /// Every reading is within its ideal range.
    Compliant,
    /// At least one warning, no criticals.
    NonCompliant,
    /// At least one critical reading.
    Critical,
}

impl OverallCompliance {
    /// Overall state implied by the worst status present.
    pub fn from_worst(worst: Option<ValidationStatus>) -> Self {
        match worst {
            None | Some(ValidationStatus::Good) => Self::Compliant,
            Some(ValidationStatus::Warning) => Self::NonCompliant,
            Some(ValidationStatus::Critical) => Self::Critical,
        }
    }
}

impl fmt::Display for OverallCompliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compliant => f.write_str("compliant"),
            Self::NonCompliant => f.write_str("non_compliant"),
            Self::Critical => f.write_str("critical"),
        }
    }
}

/// Operating status shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    /// Every reading is ideal.
    Operational,
    /// At least one reading needs adjustment; the pool stays open.
    AttentionRequired,
    /// At least one reading requires closing the pool.
    Closed,
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operational => f.write_str("operational"),
            Self::AttentionRequired => f.write_str("attention_required"),
            Self::Closed => f.write_str("closed"),
        }
    }
}

/// Verdict for one entry of the reading set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterVerdict {
    /// Parameter the reading resolved to.
    pub parameter: ChemicalParameter,
    /// Observed value as supplied.
    pub value: f64,
    /// Classification of `value`.
    pub verdict: ValidationVerdict,
}

/// Aggregate compliance over a reading set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    /// Worst status present, as an overall compliance state.
    pub overall: OverallCompliance,
    /// Readings classified `good`.
    pub passed: usize,
    /// Readings classified `warning`.
    pub warnings: usize,
    /// Readings classified `critical`.
    pub critical: usize,
    /// Critical readings that require closing the pool.
    pub emergency: usize,
    /// Per-parameter verdicts in input order.
    pub details: Vec<ParameterVerdict>,
    /// One suggestion per warning or critical verdict.
    pub recommendations: Vec<String>,
    /// Recommendations whose verdict requires action.
    pub required_actions: Vec<String>,
}

impl ComplianceReport {
    /// Aggregate verdicts, each paired with the recommendation the evaluator
    /// produced for it. Recommendations attached to `good` verdicts are
    /// dropped.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (ParameterVerdict, Option<String>)>,
    ) -> Self {
        let mut report = Self {
            overall: OverallCompliance::Compliant,
            passed: 0,
            warnings: 0,
            critical: 0,
            emergency: 0,
            details: Vec::new(),
            recommendations: Vec::new(),
            required_actions: Vec::new(),
        };
        let mut worst: Option<ValidationStatus> = None;

        for (detail, recommendation) in entries {
            let verdict = &detail.verdict;
            match verdict.status {
                ValidationStatus::Good => report.passed += 1,
                ValidationStatus::Warning => report.warnings += 1,
                ValidationStatus::Critical => report.critical += 1,
            }
            if verdict.requires_closure {
                report.emergency += 1;
            }
            worst = worst.max(Some(verdict.status));

            if verdict.status != ValidationStatus::Good {
                if let Some(text) = recommendation {
                    if verdict.requires_action {
                        report.required_actions.push(text.clone());
                    }
                    report.recommendations.push(text);
                }
            }
            report.details.push(detail);
        }

        report.overall = OverallCompliance::from_worst(worst);
        report
    }

    /// Total number of readings evaluated.
    pub fn total(&self) -> usize {
        self.details.len()
    }

    /// Dashboard status: closed on any emergency, attention on any
    /// non-good reading, operational otherwise.
    pub fn pool_status(&self) -> PoolStatus {
        if self.emergency > 0 {
            PoolStatus::Closed
        } else if self.overall != OverallCompliance::Compliant {
            PoolStatus::AttentionRequired
        } else {
            PoolStatus::Operational
        }
    }

    /// Verdict for a given parameter, if it was part of the reading set.
    pub fn detail(&self, parameter: ChemicalParameter) -> Option<&ParameterVerdict> {
        self.details.iter().find(|d| d.parameter == parameter)
    }
}
