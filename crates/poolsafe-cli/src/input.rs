//! # Input Documents
//!
//! Loading of reading files and parsing of inline `PARAM=VALUE` pairs.
//! `.json` files are parsed as JSON; everything else as YAML.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read and deserialize a JSON or YAML document.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON in {}", path.display()))
    } else {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML in {}", path.display()))
    }
}

/// Parse `name=value`. Used as a clap value parser.
pub fn parse_pair(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected PARAM=VALUE, got {s:?}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing parameter name in {s:?}"));
    }
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("invalid number {value:?} for {name}"))?;
    Ok((name.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use poolsafe_core::ReadingSet;

    #[test]
    fn parse_pair_accepts_valid_input() {
        assert_eq!(
            parse_pair("freeChlorine=2.0").unwrap(),
            ("freeChlorine".to_string(), 2.0)
        );
        assert_eq!(parse_pair(" ph = 7.4 ").unwrap(), ("ph".to_string(), 7.4));
        assert_eq!(parse_pair("ph=-1").unwrap().1, -1.0);
    }

    #[test]
    fn parse_pair_rejects_malformed_input() {
        assert!(parse_pair("ph").is_err());
        assert!(parse_pair("=7.4").is_err());
        assert!(parse_pair("ph=abc").is_err());
    }

    #[test]
    fn read_document_by_extension() {
        let dir = std::env::temp_dir().join(format!("poolsafe-cli-input-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let json = dir.join("r.json");
        std::fs::write(&json, r#"{"ph": 7.4, "freeChlorine": 2.0}"#).unwrap();
        let set: ReadingSet = read_document(&json).unwrap();
        assert_eq!(set.len(), 2);

        let yaml = dir.join("r.yaml");
        std::fs::write(&yaml, "ph: 7.4\n").unwrap();
        let set: ReadingSet = read_document(&yaml).unwrap();
        assert_eq!(set.get("ph"), Some(7.4));

        let err = read_document::<ReadingSet>(&dir.join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("failed to read"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
