//! # Chemical Standard
//!
//! A single acceptable/ideal range pair for one parameter, plus the display
//! metadata used to render verdict messages.
//!
//! ## Invariant
//!
//! `min <= ideal.min <= ideal.max <= max`, all bounds finite. Enforced by
//! [`ChemicalStandard::validate`], which every table constructor calls.
//! Range checks are inclusive on both ends, so a boundary value always lands
//! in the safer of the two adjacent bands.

use serde::{Deserialize, Serialize};

use crate::error::PoolsafeError;
use crate::parameter::ChemicalParameter;

/// Which side of the acceptable range makes a reading a closure condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClosureSide {
    /// Out-of-range readings are critical but never close the pool.
    #[default]
    Never,
    /// Only readings below `min` close the pool.
    BelowMin,
    /// Only readings above `max` close the pool.
    AboveMax,
    /// Readings beyond either bound close the pool.
    EitherSide,
}

/// The tighter target range nested inside the acceptable range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealRange {
    /// Lower ideal bound (inclusive).
    pub min: f64,
    /// Upper ideal bound (inclusive).
    pub max: f64,
}

/// Acceptable and ideal ranges for one chemical parameter.
///
/// Deserialization goes through [`ChemicalStandard::new`], so a document
/// with out-of-order or non-finite bounds never produces a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StandardDocument")]
pub struct ChemicalStandard {
    /// Lower acceptable bound (inclusive).
    pub min: f64,
    /// Upper acceptable bound (inclusive).
    pub max: f64,
    /// Ideal sub-range.
    pub ideal: IdealRange,
    /// Display unit, e.g. `ppm`. Empty for unitless parameters such as pH.
    pub unit: String,
    /// Unsafe side for closure-triggering parameters.
    pub closure: ClosureSide,
    /// Minimum decimal places used when rendering values.
    pub precision: usize,
}

/// Serialized shape of a standard, before validation.
#[derive(Debug, Clone, Deserialize)]
struct StandardDocument {
    min: f64,
    max: f64,
    ideal: IdealRange,
    #[serde(default)]
    unit: String,
    #[serde(default)]
    closure: ClosureSide,
    #[serde(default = "default_precision")]
    precision: usize,
}

fn default_precision() -> usize {
    1
}

impl TryFrom<StandardDocument> for ChemicalStandard {
    type Error = PoolsafeError;

    fn try_from(doc: StandardDocument) -> Result<Self, Self::Error> {
        Self::new(
            doc.min,
            doc.ideal.min,
            doc.ideal.max,
            doc.max,
            doc.unit,
            doc.closure,
            doc.precision,
        )
    }
}

/// Upper limit on rendered decimal places.
const MAX_PRECISION: usize = 6;

impl ChemicalStandard {
    /// Build a standard and check the ordering invariant.
    pub fn new(
        min: f64,
        ideal_min: f64,
        ideal_max: f64,
        max: f64,
        unit: impl Into<String>,
        closure: ClosureSide,
        precision: usize,
    ) -> Result<Self, PoolsafeError> {
        let standard = Self {
            min,
            max,
            ideal: IdealRange {
                min: ideal_min,
                max: ideal_max,
            },
            unit: unit.into(),
            closure,
            precision,
        };
        standard
            .validate_unnamed()
            .map_err(PoolsafeError::InvalidStandard)?;
        Ok(standard)
    }

    /// Check the ordering invariant, naming `parameter` in any error.
    pub fn validate(&self, parameter: ChemicalParameter) -> Result<(), PoolsafeError> {
        self.validate_unnamed()
            .map_err(|e| PoolsafeError::InvalidStandard(format!("{parameter}: {e}")))
    }

    fn validate_unnamed(&self) -> Result<(), String> {
        let bounds = [
            ("min", self.min),
            ("ideal.min", self.ideal.min),
            ("ideal.max", self.ideal.max),
            ("max", self.max),
        ];
        if let Some((name, value)) = bounds.iter().find(|(_, v)| !v.is_finite()) {
            return Err(format!("{name} must be finite, got {value}"));
        }
        for pair in bounds.windows(2) {
            let (lo_name, lo) = pair[0];
            let (hi_name, hi) = pair[1];
            if lo > hi {
                return Err(format!("{lo_name} ({lo}) exceeds {hi_name} ({hi})"));
            }
        }
        if self.precision > MAX_PRECISION {
            return Err(format!(
                "precision {} exceeds maximum of {MAX_PRECISION}",
                self.precision
            ));
        }
        Ok(())
    }

    /// Whether `value` lies in the ideal range (inclusive). NaN is never ideal.
    pub fn is_ideal(&self, value: f64) -> bool {
        value >= self.ideal.min && value <= self.ideal.max
    }

    /// Whether `value` lies in the acceptable range (inclusive). NaN is never
    /// acceptable.
    pub fn is_acceptable(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether an out-of-range `value` falls on this standard's unsafe side.
    ///
    /// NaN has no side; it triggers closure for any parameter whose
    /// `closure` is not [`ClosureSide::Never`].
    pub fn closure_triggered(&self, value: f64) -> bool {
        let below = value.is_nan() || value < self.min;
        let above = value.is_nan() || value > self.max;
        match self.closure {
            ClosureSide::Never => false,
            ClosureSide::BelowMin => below,
            ClosureSide::AboveMax => above,
            ClosureSide::EitherSide => below || above,
        }
    }

    /// Render a threshold with its unit, e.g. `1.0 ppm`.
    pub fn format_threshold(&self, value: f64) -> String {
        self.with_unit(self.format_number(value))
    }

    /// Render an observed value with its unit, e.g. `7.45`.
    pub fn format_reading(&self, value: f64) -> String {
        self.with_unit(self.format_number(value))
    }

    /// Values that fit the configured precision are padded to it (`2.0`);
    /// finer values keep every digit (`0.25`). Never rounds.
    fn format_number(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let fixed = format!("{:.*}", self.precision, value);
        match fixed.parse::<f64>() {
            Ok(parsed) if parsed == value => fixed,
            _ => value.to_string(),
        }
    }

    /// `1.0-10.0 ppm`
    pub fn acceptable_range_label(&self) -> String {
        self.range_label(self.min, self.max)
    }

    /// `1.5-2.5 ppm`
    pub fn ideal_range_label(&self) -> String {
        self.range_label(self.ideal.min, self.ideal.max)
    }

    fn range_label(&self, lo: f64, hi: f64) -> String {
        self.with_unit(format!(
            "{}-{}",
            self.format_number(lo),
            self.format_number(hi)
        ))
    }

    fn with_unit(&self, number: String) -> String {
        if self.unit.is_empty() {
            number
        } else {
            format!("{number} {}", self.unit)
        }
    }
}
