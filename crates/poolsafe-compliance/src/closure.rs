//! # Pool Closure Decision
//!
//! A pool closes when at least one reading is critical on the unsafe side of
//! a closure-triggering parameter. The decision carries the message of every
//! triggering verdict, in evaluation order.

use serde::{Deserialize, Serialize};

use crate::verdict::ValidationVerdict;

/// Outcome of a closure evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureDecision {
    /// Whether any reading requires closing the pool.
    pub should_close: bool,
    /// Messages of the closure-triggering verdicts.
    pub reasons: Vec<String>,
}

impl ClosureDecision {
    /// Fold verdicts into a decision.
    pub fn from_verdicts<'a>(verdicts: impl IntoIterator<Item = &'a ValidationVerdict>) -> Self {
        let reasons: Vec<String> = verdicts
            .into_iter()
            .filter(|v| v.requires_closure)
            .map(|v| v.message.clone())
            .collect();
        Self {
            should_close: !reasons.is_empty(),
            reasons,
        }
    }
}
