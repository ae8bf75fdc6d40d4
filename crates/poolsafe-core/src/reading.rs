//! # Chemical Readings
//!
//! Observed values entered by technicians, and the ordered reading set the
//! compliance report is computed over.
//!
//! Readings keep the parameter as the raw name the caller supplied. Unknown
//! names are not rejected here; they travel to the evaluator, which surfaces
//! them as `UnknownParameter` to the caller.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PoolsafeError;
use crate::parameter::ChemicalParameter;

// ---------------------------------------------------------------------------
// PoolId
// ---------------------------------------------------------------------------

/// Identifier of a pool. Non-empty, surrounding whitespace trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PoolId(String);

impl PoolId {
    /// Create a pool id, rejecting blank input.
    pub fn new(id: impl Into<String>) -> Result<Self, PoolsafeError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(PoolsafeError::InvalidPoolId(
                "pool id must not be empty".into(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PoolId {
    type Error = PoolsafeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PoolId> for String {
    fn from(id: PoolId) -> Self {
        id.0
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// ChemicalReading
// ---------------------------------------------------------------------------

/// One observed value for one parameter of one pool at one point in time.
///
/// Readings are never mutated after construction. A correction is a new
/// reading with a later `observed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalReading {
    pool_id: PoolId,
    parameter: String,
    value: f64,
    observed_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    technician_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl ChemicalReading {
    /// Create a reading without technician or notes.
    pub fn new(
        pool_id: PoolId,
        parameter: impl Into<String>,
        value: f64,
        observed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            pool_id,
            parameter: parameter.into(),
            value,
            observed_at,
            technician_id: None,
            notes: None,
        }
    }

    /// Attach the technician who took the reading.
    pub fn with_technician(mut self, technician_id: impl Into<String>) -> Self {
        self.technician_id = Some(technician_id.into());
        self
    }

    /// Attach free-text notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Pool the reading was taken at.
    pub fn pool_id(&self) -> &PoolId {
        &self.pool_id
    }

    /// Parameter name as supplied.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Observed value. May be out of range or non-finite.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// When the sample was taken.
    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }

    /// Technician who took the reading, if recorded.
    pub fn technician_id(&self) -> Option<&str> {
        self.technician_id.as_deref()
    }

    /// Free-text notes, if any.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// Identity used to detect duplicate parameters: recognised names collapse
/// onto their canonical parameter, unrecognised names compare verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParameterKey<'a> {
    Known(ChemicalParameter),
    Raw(&'a str),
}

fn parameter_key(name: &str) -> ParameterKey<'_> {
    match name.parse::<ChemicalParameter>() {
        Ok(p) => ParameterKey::Known(p),
        Err(_) => ParameterKey::Raw(name),
    }
}

/// Reduce a reading history to the newest reading per pool and parameter.
///
/// Readings from different pools never replace each other. Output order
/// follows the first appearance of each `(pool, parameter)` pair in
/// `history`. When two readings share the newest timestamp the earlier one
/// in `history` is kept.
pub fn latest_per_parameter(history: &[ChemicalReading]) -> Vec<&ChemicalReading> {
    let mut latest: Vec<((&PoolId, ParameterKey<'_>), &ChemicalReading)> = Vec::new();
    for reading in history {
        let key = (&reading.pool_id, parameter_key(&reading.parameter));
        match latest.iter_mut().find(|(k, _)| *k == key) {
            Some((_, kept)) => {
                if reading.observed_at > kept.observed_at {
                    *kept = reading;
                }
            }
            None => latest.push((key, reading)),
        }
    }
    latest.into_iter().map(|(_, r)| r).collect()
}

// ---------------------------------------------------------------------------
// ReadingSet
// ---------------------------------------------------------------------------

/// Insertion-ordered mapping of parameter name to observed value.
///
/// Keys are unique per parameter: `freeChlorine` and `free_chlorine` name the
/// same entry. Deserialization keeps document order and rejects duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReadingSet {
    entries: Vec<(String, f64)>,
}

impl ReadingSet {
    /// Empty reading set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing entry for the same parameter keeps its
    /// position and original key; its value is replaced and returned.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        let name = name.into();
        match self.position(&name) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Value recorded for a parameter name (or any alias of it).
    pub fn get(&self, name: &str) -> Option<f64> {
        self.position(name).map(|idx| self.entries[idx].1)
    }

    /// Iterate `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Number of distinct parameters recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no readings are recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = parameter_key(name);
        self.entries
            .iter()
            .position(|(existing, _)| parameter_key(existing) == key)
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ReadingSet {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, value) in iter {
            set.insert(name, value);
        }
        set
    }
}

impl Serialize for ReadingSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ReadingSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReadingSetVisitor;

        impl<'de> Visitor<'de> for ReadingSetVisitor {
            type Value = ReadingSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of parameter name to numeric value")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ReadingSet, A::Error> {
                let mut set = ReadingSet::new();
                while let Some((name, value)) = access.next_entry::<String, f64>()? {
                    if set.position(&name).is_some() {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate parameter {name:?}"
                        )));
                    }
                    set.entries.push((name, value));
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ReadingSetVisitor)
    }
}
