//! CMAP export sheets.
//!
//! Assembles the per-file [`cmap_model::Table`] from normalized records and
//! writes the three CSV sheets the catalog import expects: the data sheet,
//! the dataset-metadata sheet and the variable-metadata sheet.

pub mod assemble;
pub mod error;
pub mod writer;

pub use assemble::assemble_table;
pub use error::ReportError;
pub use writer::{DATASET_META_FIELDS, SheetPaths, VARS_META_FIELDS, write_sheets};
