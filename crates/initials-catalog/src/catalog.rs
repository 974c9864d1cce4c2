//! Ordered, read-only property catalog.

use crate::{CatalogError, PropertyRecord};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

/// Snapshot of `mdn-data`'s `css/properties.json` shipped with the crate.
const BUNDLED: &str = include_str!("../data/properties.json");

/// All known CSS properties, keyed by name, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyCatalog {
    properties: IndexMap<String, PropertyRecord>,
}

impl PropertyCatalog {
    /// Parse a catalog from JSON.
    ///
    /// Accepts either the bare property map (`{ "color": {...}, ... }`) or a
    /// full data bundle with the properties nested at `css.properties`.
    /// Individual records are read leniently (see [`PropertyRecord::from_json`]);
    /// only unparseable JSON or a bundle without properties is an error.
    pub fn from_json(source: &str) -> Result<Self, CatalogError> {
        let mut value: Value = serde_json::from_str(source)?;

        if let Some(css) = value.get_mut("css").filter(|css| css.is_object()) {
            value = css
                .get_mut("properties")
                .filter(|props| props.is_object())
                .map(Value::take)
                .ok_or(CatalogError::MissingProperties)?;
        }

        let raw: IndexMap<String, Value> = serde_json::from_value(value)?;
        let properties = raw
            .into_iter()
            .map(|(name, value)| {
                let record = PropertyRecord::from_json(name.as_str(), &value);
                (name, record)
            })
            .collect();

        Ok(Self { properties })
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// The snapshot compiled into this crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED)
    }

    /// `(name, record)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyRecord)> {
        self.properties
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<PropertyRecord> for PropertyCatalog {
    fn from_iter<I: IntoIterator<Item = PropertyRecord>>(iter: I) -> Self {
        let properties = iter
            .into_iter()
            .map(|record| (record.name.clone(), record))
            .collect();
        Self { properties }
    }
}
