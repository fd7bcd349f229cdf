//! Per-file conversion pipeline: read → parse → normalize → assemble → write.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use cmap_ingest::{Delimiter, dataset_root, load_companion_metadata, read_records};
use cmap_model::NormalizedRecord;
use cmap_report::{assemble_table, write_sheets};
use cmap_transform::Normalizer;

use crate::types::FileOutcome;

/// Everything a single file conversion needs, passed explicitly.
pub struct FileJob<'a> {
    pub path: &'a Path,
    pub delimiter: &'a Delimiter,
    pub outdir: &'a Path,
    pub normalizer: &'a Normalizer,
}

/// Convert one input file.
///
/// Failures are captured in the returned outcome; the batch caller decides
/// what to do with them.
pub fn process_file(job: &FileJob<'_>) -> FileOutcome {
    let root = dataset_root(job.path);
    let span = info_span!("file", root = %root);
    let _guard = span.enter();
    match convert(job, &root) {
        Ok(outcome) => outcome,
        Err(error) => FileOutcome {
            input: job.path.to_path_buf(),
            records: 0,
            columns: 0,
            output: None,
            error: Some(format!("{error:#}")),
        },
    }
}

fn convert(job: &FileJob<'_>, root: &str) -> Result<FileOutcome> {
    let start = Instant::now();
    let records = read_records(job.path, job.delimiter)?;
    let metadata = load_companion_metadata(job.path);
    let normalized: Vec<NormalizedRecord> = records
        .iter()
        .map(|record| job.normalizer.normalize(record))
        .collect();
    let table = assemble_table(&normalized);
    let paths = write_sheets(&table, &metadata, job.outdir, root)?;
    info!(
        input = %job.path.display(),
        records = table.record_count(),
        columns = table.columns.len(),
        duration_ms = start.elapsed().as_millis(),
        "exported"
    );
    Ok(FileOutcome {
        input: job.path.to_path_buf(),
        records: table.record_count(),
        columns: table.columns.len(),
        output: Some(paths.data),
        error: None,
    })
}
