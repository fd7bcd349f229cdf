//! Data model for SRA-to-CMAP conversion.
//!
//! - **record**: raw and normalized per-sample records
//! - **table**: the per-file export table with canonical columns first
//! - **metadata**: companion dataset metadata shared by ingest and report

pub mod metadata;
pub mod record;
pub mod table;

pub use metadata::CompanionMetadata;
pub use record::{NormalizedRecord, RawRecord};
pub use table::{CANONICAL_COLUMNS, CellValue, Table};
