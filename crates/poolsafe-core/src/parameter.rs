//! # Chemical Parameter: Single Source of Truth
//!
//! Defines the `ChemicalParameter` enum with the seven parameters tracked for
//! every pool. Every `match` on `ChemicalParameter` is exhaustive, so adding
//! a parameter forces the standards table, message templates, and
//! recommendation text to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PoolsafeError;

/// Chemical and physical parameters covered by the MAHC standards table.
///
/// | # | Parameter | Canonical id | Form key |
/// |---|-----------|--------------|----------|
/// | 1 | Free chlorine | `free_chlorine` | `freeChlorine` |
/// | 2 | Total chlorine | `total_chlorine` | `totalChlorine` |
/// | 3 | pH | `ph` | `ph` |
/// | 4 | Total alkalinity | `total_alkalinity` | `alkalinity` |
/// | 5 | Cyanuric acid | `cyanuric_acid` | `cyanuricAcid` |
/// | 6 | Calcium hardness | `calcium_hardness` | `calciumHardness` |
/// | 7 | Water temperature | `water_temperature` | `temperature` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChemicalParameter {
    /// Free (available) chlorine, the primary sanitizer.
    FreeChlorine,
    /// Free plus combined chlorine.
    TotalChlorine,
    /// Acidity/basicity of the water.
    Ph,
    /// Buffering capacity against pH swings.
    TotalAlkalinity,
    /// Chlorine stabilizer.
    CyanuricAcid,
    /// Dissolved calcium.
    CalciumHardness,
    /// Water temperature.
    WaterTemperature,
}

/// Total number of chemical parameters.
pub const PARAMETER_COUNT: usize = 7;

impl ChemicalParameter {
    /// Returns all parameters in canonical order.
    pub fn all() -> &'static [ChemicalParameter] {
        &[
            Self::FreeChlorine,
            Self::TotalChlorine,
            Self::Ph,
            Self::TotalAlkalinity,
            Self::CyanuricAcid,
            Self::CalciumHardness,
            Self::WaterTemperature,
        ]
    }

    /// Returns the snake_case identifier. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FreeChlorine => "free_chlorine",
            Self::TotalChlorine => "total_chlorine",
            Self::Ph => "ph",
            Self::TotalAlkalinity => "total_alkalinity",
            Self::CyanuricAcid => "cyanuric_acid",
            Self::CalciumHardness => "calcium_hardness",
            Self::WaterTemperature => "water_temperature",
        }
    }

    /// Human-readable label used at the start of verdict messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::FreeChlorine => "Free chlorine",
            Self::TotalChlorine => "Total chlorine",
            Self::Ph => "pH",
            Self::TotalAlkalinity => "Total alkalinity",
            Self::CyanuricAcid => "Cyanuric acid",
            Self::CalciumHardness => "Calcium hardness",
            Self::WaterTemperature => "Water temperature",
        }
    }

    /// Label for use mid-sentence ("increase free chlorine ...").
    pub fn lowercase_name(&self) -> &'static str {
        match self {
            Self::FreeChlorine => "free chlorine",
            Self::TotalChlorine => "total chlorine",
            Self::Ph => "pH",
            Self::TotalAlkalinity => "total alkalinity",
            Self::CyanuricAcid => "cyanuric acid",
            Self::CalciumHardness => "calcium hardness",
            Self::WaterTemperature => "water temperature",
        }
    }
}

impl std::fmt::Display for ChemicalParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChemicalParameter {
    type Err = PoolsafeError;

    /// Parse a parameter from its canonical identifier or the camelCase key
    /// submitted by the reading-entry form. Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free_chlorine" | "freeChlorine" => Ok(Self::FreeChlorine),
            "total_chlorine" | "totalChlorine" => Ok(Self::TotalChlorine),
            "ph" => Ok(Self::Ph),
            "total_alkalinity" | "totalAlkalinity" | "alkalinity" => Ok(Self::TotalAlkalinity),
            "cyanuric_acid" | "cyanuricAcid" => Ok(Self::CyanuricAcid),
            "calcium_hardness" | "calciumHardness" => Ok(Self::CalciumHardness),
            "water_temperature" | "waterTemperature" | "temperature" => {
                Ok(Self::WaterTemperature)
            }
            other => Err(PoolsafeError::unknown_parameter(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_parameters_count() {
        assert_eq!(ChemicalParameter::all().len(), PARAMETER_COUNT);
    }

    #[test]
    fn all_parameters_unique() {
        let mut seen = std::collections::HashSet::new();
        for p in ChemicalParameter::all() {
            assert!(seen.insert(p), "duplicate parameter: {p}");
        }
    }

    #[test]
    fn as_str_roundtrip() {
        for p in ChemicalParameter::all() {
            let parsed: ChemicalParameter = p.as_str().parse().unwrap();
            assert_eq!(*p, parsed);
        }
    }

    #[test]
    fn form_keys_parse() {
        assert_eq!(
            "freeChlorine".parse::<ChemicalParameter>().unwrap(),
            ChemicalParameter::FreeChlorine
        );
        assert_eq!(
            "alkalinity".parse::<ChemicalParameter>().unwrap(),
            ChemicalParameter::TotalAlkalinity
        );
        assert_eq!(
            "temperature".parse::<ChemicalParameter>().unwrap(),
            ChemicalParameter::WaterTemperature
        );
        assert_eq!(
            "calciumHardness".parse::<ChemicalParameter>().unwrap(),
            ChemicalParameter::CalciumHardness
        );
    }

    #[test]
    fn unknown_names_rejected() {
        for name in ["unknownChemical", "PH", "", "free chlorine", "chlorine"] {
            let err = name.parse::<ChemicalParameter>().unwrap_err();
            match err {
                PoolsafeError::UnknownParameter { name: got } => assert_eq!(got, name),
                other => panic!("expected UnknownParameter, got {other:?}"),
            }
        }
    }

    #[test]
    fn serde_format_matches_as_str() {
        for p in ChemicalParameter::all() {
            let json = serde_json::to_string(p).unwrap();
            assert_eq!(json, format!("\"{}\"", p.as_str()));
        }
    }

    #[test]
    fn display_matches_as_str() {
        for p in ChemicalParameter::all() {
            assert_eq!(p.to_string(), p.as_str());
        }
    }
}
