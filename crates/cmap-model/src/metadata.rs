//! Companion dataset metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Merged key/value metadata from the `_meta` and `_vars` companion files
/// next to an input. Feeds the dataset-metadata sheet and the per-column
/// unit lookup of the variable-metadata sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanionMetadata {
    values: BTreeMap<String, String>,
}

impl CompanionMetadata {
    /// Insert an entry; a later insert for the same key overwrites.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
