//! Built-in label catalog.
//!
//! The catalog is embedded in the binary at compile time and sorted on
//! load, so the first screen always shows an alphabetical list.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::LabelStore;

/// Schema of the embedded artists.json.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[allow(dead_code)]
    version: String,
    labels: Vec<String>,
}

/// Raw catalog entries in file order.
pub fn labels() -> Result<Vec<String>> {
    let json_data = include_str!("artists.json");
    let catalog: CatalogFile =
        serde_json::from_str(json_data).context("Failed to parse embedded artists.json")?;
    Ok(catalog.labels)
}

/// Loads the catalog into a fresh, sorted store.
pub fn load() -> Result<LabelStore> {
    Ok(LabelStore::from_labels(labels()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_parses() {
        let labels = labels().unwrap();
        assert!(labels.len() > 100);
    }

    #[test]
    fn test_load_sorts_and_keeps_every_entry() {
        let raw = labels().unwrap();
        let store = load().unwrap();

        assert_eq!(store.len(), raw.len(), "catalog must not contain duplicates");
        assert!(store.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_catalog_entries_are_trimmed() {
        for label in labels().unwrap() {
            assert_eq!(label.trim(), label);
            assert!(!label.is_empty());
        }
    }
}
