//! Raw and normalized record types.

use serde::{Deserialize, Serialize};

/// One key/value metadata block from the source text, in source order.
///
/// Keys are unique within a record: the first occurrence wins and later
/// duplicates are rejected by [`RawRecord::insert`]. Insertion order is
/// preserved because it determines the default column order of the
/// non-canonical export columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, keeping the first value for a duplicate key.
    ///
    /// Returns `false` when the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.fields.iter().any(|(existing, _)| *existing == key) {
            return false;
        }
        self.fields.push((key, value.into()));
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A record with the four canonical fields resolved.
///
/// Canonical values are `None` when the source record has no matching field
/// or the value could not be parsed; absence is not an error. The extras
/// carry every other source field unchanged, keyed by its normalized
/// identifier, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// ISO 8601 date or date/time string.
    pub time: Option<String>,
    /// Signed decimal degrees, north positive.
    pub lat: Option<f64>,
    /// Signed decimal degrees, east positive.
    pub lon: Option<f64>,
    /// Depth in meters, unit suffix stripped.
    pub depth: Option<f64>,
    /// Remaining fields as (normalized name, raw value), in source order.
    pub extras: Vec<(String, String)>,
}

impl NormalizedRecord {
    /// Look up an extras value by its normalized name.
    pub fn extra(&self, name: &str) -> Option<&str> {
        self.extras
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }
}
