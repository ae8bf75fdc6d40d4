//! # poolsafe-compliance: Chemical Compliance Evaluator
//!
//! Classifies pool chemistry readings against an injected MAHC standards
//! table and aggregates them into closure decisions and compliance reports.
//!
//! ## Architecture
//!
//! - **Verdict** (`verdict.rs`): `ValidationStatus`, `Severity`, and the
//!   per-reading `ValidationVerdict`.
//!
//! - **Evaluator** (`evaluator.rs`): The `ChemicalEvaluator` trait with its
//!   three operations (`validate_chemical`, `should_close_pool`,
//!   `generate_compliance_report`) and the table-backed `MahcEvaluator`.
//!
//! - **Closure** (`closure.rs`): Folds verdicts into a `ClosureDecision`.
//!
//! - **Report** (`report.rs`): `ComplianceReport` aggregation and the derived
//!   dashboard `PoolStatus`.
//!
//! - **Recommendation** (`recommendation.rs`): Direction-aware treatment
//!   guidance for non-ideal readings.
//!
//! - **Mock** (`mock.rs`): `ScriptedEvaluator`, a trait-compatible test
//!   double with fixed verdicts.
//!
//! ## Crate Policy
//!
//! - No I/O, no shared mutable state, no locks. Every operation is a pure
//!   function of its arguments and the evaluator's immutable table.
//! - `UnknownParameter` is returned to the caller, never logged or skipped.

pub mod closure;
pub mod evaluator;
pub mod mock;
pub mod recommendation;
pub mod report;
pub mod verdict;

pub use closure::ClosureDecision;
pub use evaluator::{ChemicalEvaluator, MahcEvaluator};
pub use mock::ScriptedEvaluator;
pub use report::{ComplianceReport, OverallCompliance, ParameterVerdict, PoolStatus};
pub use verdict::{ReadingBand, Severity, ValidationStatus, ValidationVerdict};
