//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types used throughout poolsafe. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - `UnknownParameter` is the only error the evaluator itself raises. It is
//!   always returned to the caller, never logged or swallowed.
//! - Out-of-range and non-finite readings are data, not errors. They are
//!   classified as critical by the evaluator.
//! - Configuration errors name the offending parameter and the bound that
//!   broke the ordering invariant.

use thiserror::Error;

/// Top-level error type for poolsafe.
#[derive(Error, Debug)]
pub enum PoolsafeError {
    /// The parameter name is not recognised, or the injected standards table
    /// carries no standard for it.
    #[error("unknown chemical parameter: {name:?}")]
    UnknownParameter {
        /// The name exactly as supplied by the caller.
        name: String,
    },

    /// A chemical standard violates `min <= ideal.min <= ideal.max <= max`
    /// or carries a non-finite bound.
    #[error("invalid chemical standard: {0}")]
    InvalidStandard(String),

    /// A pool identifier failed validation.
    #[error("invalid pool id: {0}")]
    InvalidPoolId(String),

    /// Serialization/deserialization error while loading configuration or
    /// reading sets.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PoolsafeError {
    /// Build an [`PoolsafeError::UnknownParameter`] from any string-like name.
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Whether this error is the domain-level unknown-parameter condition.
    pub fn is_unknown_parameter(&self) -> bool {
        matches!(self, Self::UnknownParameter { .. })
    }
}

impl From<serde_json::Error> for PoolsafeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for PoolsafeError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_parameter_display_quotes_name() {
        let err = PoolsafeError::unknown_parameter("unknownChemical");
        assert_eq!(
            err.to_string(),
            "unknown chemical parameter: \"unknownChemical\""
        );
        assert!(err.is_unknown_parameter());
    }

    #[test]
    fn other_variants_are_not_unknown_parameter() {
        assert!(!PoolsafeError::InvalidStandard("x".into()).is_unknown_parameter());
        assert!(!PoolsafeError::Serialization("x".into()).is_unknown_parameter());
    }

    #[test]
    fn json_error_converts_to_serialization() {
        let err: PoolsafeError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PoolsafeError::Serialization(_)));
    }
}
