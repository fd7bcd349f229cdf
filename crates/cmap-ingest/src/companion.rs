//! Companion metadata files.
//!
//! An input `dir/<root>_data.txt` may ship with `dir/<root>_meta.txt` and
//! `dir/<root>_vars.txt`, each holding one tab-separated `key<TAB>value`
//! pair per line. Both files merge into a single
//! [`cmap_model::CompanionMetadata`] map (later keys overwrite). Missing
//! companions are not an error.

use std::path::Path;

use tracing::{debug, warn};

use cmap_model::CompanionMetadata;

/// The dataset root name for an input file: its stem with a trailing
/// `_data` suffix stripped. Output files are named after this root.
pub fn dataset_root(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset");
    stem.strip_suffix("_data").unwrap_or(stem).to_string()
}

/// Load and merge the `_meta` and `_vars` companions of an input file.
pub fn load_companion_metadata(input: &Path) -> CompanionMetadata {
    let mut metadata = CompanionMetadata::default();
    let root = dataset_root(input);
    let extension = input.extension().and_then(|ext| ext.to_str());
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    for suffix in ["_meta", "_vars"] {
        let mut name = format!("{root}{suffix}");
        if let Some(ext) = extension {
            name.push('.');
            name.push_str(ext);
        }
        let candidate = parent.join(name);
        if candidate.is_file() {
            merge_file(&mut metadata, &candidate);
        }
    }
    debug!(input = %input.display(), entries = metadata.len(), "companion metadata loaded");
    metadata
}

fn merge_file(metadata: &mut CompanionMetadata, path: &Path) {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            warn!(path = %path.display(), %error, "skipping unreadable companion file");
            return;
        }
    };
    for line in content.lines() {
        let Some((key, value)) = line.split_once('\t') else {
            debug!(path = %path.display(), line, "skipping companion line without tab");
            continue;
        };
        metadata.insert(key.trim(), value.trim());
    }
}
