//! # Standards Table: Injected Configuration
//!
//! An immutable mapping from [`ChemicalParameter`] to [`ChemicalStandard`].
//! The table is built once (from the built-in MAHC defaults or from a
//! configuration document) and handed to the evaluator at construction.
//! Nothing mutates it afterwards; overrides produce a new table.
//!
//! ## Document Format
//!
//! ```yaml
//! standards:
//!   free_chlorine:
//!     min: 1.0
//!     max: 10.0
//!     ideal: { min: 1.5, max: 2.5 }
//!     unit: ppm
//!     closure: below_min
//!     precision: 1
//! ```
//!
//! A document may cover a subset of parameters. Readings for parameters the
//! table does not cover fail with `UnknownParameter`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PoolsafeError;
use crate::parameter::ChemicalParameter;
use crate::standard::{ChemicalStandard, ClosureSide, IdealRange};

/// Immutable table of chemical standards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StandardsDocument", into = "StandardsDocument")]
pub struct StandardsTable {
    entries: BTreeMap<ChemicalParameter, ChemicalStandard>,
}

/// Serialized shape of a standards table.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StandardsDocument {
    standards: BTreeMap<ChemicalParameter, ChemicalStandard>,
}

impl TryFrom<StandardsDocument> for StandardsTable {
    type Error = PoolsafeError;

    fn try_from(doc: StandardsDocument) -> Result<Self, Self::Error> {
        Self::new(doc.standards)
    }
}

impl From<StandardsTable> for StandardsDocument {
    fn from(table: StandardsTable) -> Self {
        Self {
            standards: table.entries,
        }
    }
}

impl StandardsTable {
    /// Build a table, validating every entry.
    pub fn new(
        entries: impl IntoIterator<Item = (ChemicalParameter, ChemicalStandard)>,
    ) -> Result<Self, PoolsafeError> {
        let entries: BTreeMap<_, _> = entries.into_iter().collect();
        for (parameter, standard) in &entries {
            standard.validate(*parameter)?;
        }
        Ok(Self { entries })
    }

    /// The built-in table derived from the Model Aquatic Health Code.
    ///
    /// Free chlorine closes the pool only when it drops below the minimum;
    /// pH closes it on either side. All other parameters are advisory.
    pub fn mahc() -> Self {
        use ChemicalParameter::*;
        let entry = |min, ideal_min, ideal_max, max, unit: &str, closure, precision| {
            ChemicalStandard {
                min,
                max,
                ideal: IdealRange {
                    min: ideal_min,
                    max: ideal_max,
                },
                unit: unit.to_string(),
                closure,
                precision,
            }
        };
        let entries = BTreeMap::from([
            (
                FreeChlorine,
                entry(1.0, 1.5, 2.5, 10.0, "ppm", ClosureSide::BelowMin, 1),
            ),
            (
                TotalChlorine,
                entry(1.0, 1.5, 3.0, 10.0, "ppm", ClosureSide::Never, 1),
            ),
            (Ph, entry(7.2, 7.3, 7.5, 7.6, "", ClosureSide::EitherSide, 1)),
            (
                TotalAlkalinity,
                entry(60.0, 80.0, 120.0, 180.0, "ppm", ClosureSide::Never, 0),
            ),
            (
                CyanuricAcid,
                entry(0.0, 30.0, 50.0, 90.0, "ppm", ClosureSide::Never, 0),
            ),
            (
                CalciumHardness,
                entry(150.0, 200.0, 350.0, 400.0, "ppm", ClosureSide::Never, 0),
            ),
            (
                WaterTemperature,
                entry(68.0, 78.0, 82.0, 104.0, "°F", ClosureSide::Never, 0),
            ),
        ]);
        Self { entries }
    }

    /// Return a copy of this table with one standard replaced or added.
    pub fn with_standard(
        &self,
        parameter: ChemicalParameter,
        standard: ChemicalStandard,
    ) -> Result<Self, PoolsafeError> {
        standard.validate(parameter)?;
        let mut entries = self.entries.clone();
        entries.insert(parameter, standard);
        Ok(Self { entries })
    }

    /// Standard for a parameter, if the table covers it.
    pub fn get(&self, parameter: ChemicalParameter) -> Option<&ChemicalStandard> {
        self.entries.get(&parameter)
    }

    /// Resolve a raw parameter name to its parameter and standard.
    ///
    /// Fails with `UnknownParameter` carrying the name as supplied when the
    /// name is not recognised or the table has no entry for it.
    pub fn lookup(
        &self,
        name: &str,
    ) -> Result<(ChemicalParameter, &ChemicalStandard), PoolsafeError> {
        let parameter: ChemicalParameter = name.parse()?;
        self.get(parameter)
            .map(|standard| (parameter, standard))
            .ok_or_else(|| PoolsafeError::unknown_parameter(name))
    }

    /// Iterate entries in canonical parameter order.
    pub fn iter(&self) -> impl Iterator<Item = (ChemicalParameter, &ChemicalStandard)> {
        self.entries.iter().map(|(p, s)| (*p, s))
    }

    /// Number of parameters covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table covers no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML standards document.
    pub fn from_yaml_str(s: &str) -> Result<Self, PoolsafeError> {
        let doc: StandardsDocument = serde_yaml::from_str(s)?;
        Self::try_from(doc)
    }

    /// Parse a JSON standards document.
    pub fn from_json_str(s: &str) -> Result<Self, PoolsafeError> {
        let doc: StandardsDocument = serde_json::from_str(s)?;
        Self::try_from(doc)
    }

    /// Load a standards document from disk. `.json` files are parsed as
    /// JSON; everything else as YAML.
    pub fn load(path: &Path) -> Result<Self, PoolsafeError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let table = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::info!(
            path = %path.display(),
            standards = table.len(),
            "loaded chemical standards"
        );
        if table.len() < ChemicalParameter::all().len() {
            let missing: Vec<&str> = ChemicalParameter::all()
                .iter()
                .filter(|p| table.get(**p).is_none())
                .map(|p| p.as_str())
                .collect();
            tracing::warn!(
                missing = %missing.join(","),
                "standards table does not cover every parameter"
            );
        }
        Ok(table)
    }
}

impl Default for StandardsTable {
    fn default() -> Self {
        Self::mahc()
    }
}
