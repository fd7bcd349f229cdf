//! CSV sheet writing.
//!
//! Each input file produces up to three sheets in the output directory:
//!
//! - `<root>.csv`: the data sheet
//! - `<root>_meta.csv`: dataset metadata (only when companion metadata
//!   was found next to the input)
//! - `<root>_vars.csv`: variable metadata, one row per non-canonical
//!   data column

use std::path::{Path, PathBuf};

use tracing::debug;

use cmap_model::{CompanionMetadata, Table};

use crate::error::ReportError;

/// Dataset-metadata sheet header.
pub const DATASET_META_FIELDS: [&str; 6] = [
    "dataset_make",
    "dataset_source",
    "dataset_doi",
    "dataset_history",
    "dataset_description",
    "dataset_references",
];

/// Variable-metadata sheet header.
pub const VARS_META_FIELDS: [&str; 11] = [
    "var_short_name",
    "var_long_name",
    "var_standard_name",
    "var_unit",
    "var_sensor",
    "var_spatial_res",
    "var_temporal_res",
    "var_missing_value",
    "var_discipline",
    "var_keywords",
    "var_comment",
];

/// Paths of the sheets written for one input file.
#[derive(Debug, Clone)]
pub struct SheetPaths {
    pub data: PathBuf,
    pub meta: Option<PathBuf>,
    pub vars: PathBuf,
}

/// Write the sheets for one input file into `outdir`.
///
/// `outdir` is created if absent. Fails only on I/O; the batch caller
/// reports the failure and moves on to the next file.
pub fn write_sheets(
    table: &Table,
    metadata: &CompanionMetadata,
    outdir: &Path,
    root: &str,
) -> Result<SheetPaths, ReportError> {
    std::fs::create_dir_all(outdir).map_err(|source| ReportError::CreateDir {
        path: outdir.to_path_buf(),
        source,
    })?;

    let data = outdir.join(format!("{root}.csv"));
    write_data_sheet(table, &data)?;

    let meta = if metadata.is_empty() {
        None
    } else {
        let path = outdir.join(format!("{root}_meta.csv"));
        write_meta_sheet(metadata, &path)?;
        Some(path)
    };

    let vars = outdir.join(format!("{root}_vars.csv"));
    write_vars_sheet(table, metadata, &vars)?;

    debug!(root, data = %data.display(), "sheets written");
    Ok(SheetPaths { data, meta, vars })
}

fn write_data_sheet(table: &Table, path: &Path) -> Result<(), ReportError> {
    let mut writer = open(path)?;
    wrap(path, writer.write_record(&table.columns))?;
    for row in &table.rows {
        wrap(path, writer.write_record(row.iter().map(|cell| cell.as_str())))?;
    }
    finish(path, writer)
}

fn write_meta_sheet(metadata: &CompanionMetadata, path: &Path) -> Result<(), ReportError> {
    let mut writer = open(path)?;
    wrap(path, writer.write_record(DATASET_META_FIELDS))?;
    let row: Vec<&str> = DATASET_META_FIELDS
        .iter()
        .map(|field| metadata.get(field).unwrap_or(""))
        .collect();
    wrap(path, writer.write_record(row))?;
    finish(path, writer)
}

fn write_vars_sheet(
    table: &Table,
    metadata: &CompanionMetadata,
    path: &Path,
) -> Result<(), ReportError> {
    let mut writer = open(path)?;
    wrap(path, writer.write_record(VARS_META_FIELDS))?;
    for column in table.extra_columns() {
        let mut row = vec![String::new(); VARS_META_FIELDS.len()];
        row[0] = column.clone();
        row[1] = long_name(column);
        row[3] = metadata.get(column).unwrap_or("").to_string();
        wrap(path, writer.write_record(row))?;
    }
    finish(path, writer)
}

/// A display name for a column: underscores to spaces, words title-cased
/// (`bio_sample` → `Bio Sample`).
fn long_name(column: &str) -> String {
    column
        .split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn open(path: &Path) -> Result<csv::Writer<std::fs::File>, ReportError> {
    csv::Writer::from_path(path).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn wrap(path: &Path, result: Result<(), csv::Error>) -> Result<(), ReportError> {
    result.map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn finish(path: &Path, mut writer: csv::Writer<std::fs::File>) -> Result<(), ReportError> {
    wrap(path, writer.flush().map_err(csv::Error::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_names_are_title_cased() {
        assert_eq!(long_name("bio_sample"), "Bio Sample");
        assert_eq!(long_name("run"), "Run");
        assert_eq!(long_name("datastore_filetype"), "Datastore Filetype");
    }
}
