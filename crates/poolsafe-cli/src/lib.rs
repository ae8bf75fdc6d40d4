//! # poolsafe-cli: Pool Chemistry Command-Line Interface
//!
//! Stands in for the entry form and the reporting dashboard: it feeds
//! readings to a [`ChemicalEvaluator`](poolsafe_compliance::ChemicalEvaluator)
//! and renders the results.
//!
//! ## Subcommands
//!
//! - `validate`: Classify one reading
//! - `report`: Compliance report over a reading set
//! - `closure`: Pool-closure decision over a reading history
//! - `standards`: Print the active standards table
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from evaluation logic.
//! - Handlers take `&dyn ChemicalEvaluator` and a writer so they can be
//!   tested against the scripted evaluator and in-memory buffers.

pub mod closure;
pub mod input;
pub mod report;
pub mod standards;
pub mod validate;

/// Rendering mode for handler output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines.
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Process exit codes shared by all subcommands.
pub mod exit_code {
    /// Good reading, compliant report, or pool stays open.
    pub const OK: u8 = 0;
    /// Command failed (bad input, unknown parameter, unreadable file).
    pub const ERROR: u8 = 1;
    /// Warning reading or non-compliant report.
    pub const WARNING: u8 = 2;
    /// Critical reading, critical report, or pool must close.
    pub const CRITICAL: u8 = 3;
}
