//! SRA run-report ingestion.
//!
//! This crate turns the plain-text record-block format
//! (`// ****** Record N ****** //` headers followed by key/value lines) into
//! ordered [`cmap_model::RawRecord`]s, and loads the optional `_meta`/`_vars`
//! companion files that accompany an input file.

pub mod companion;
pub mod delimiter;
pub mod error;
pub mod parser;

pub use companion::{dataset_root, load_companion_metadata};
pub use delimiter::Delimiter;
pub use error::IngestError;
pub use parser::{RecordBlocks, parse_records, read_records};
