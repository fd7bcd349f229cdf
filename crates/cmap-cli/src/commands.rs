//! Batch driver.

use std::path::Path;

use tracing::{info, warn};

use cmap_ingest::Delimiter;
use cmap_transform::Normalizer;

use crate::pipeline::{FileJob, process_file};
use crate::types::BatchResult;

/// Convert every input file, one at a time, in argument order.
///
/// Per-file failures are reported and the batch continues; the caller maps
/// the collected outcomes to an exit code.
pub fn run_batch(files: &[impl AsRef<Path>], delimiter: &Delimiter, outdir: &Path) -> BatchResult {
    let normalizer = Normalizer::default();
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let path = file.as_ref();
        if !path.is_file() {
            warn!(input = %path.display(), "not a file, skipping");
            outcomes.push(crate::types::FileOutcome {
                input: path.to_path_buf(),
                records: 0,
                columns: 0,
                output: None,
                error: Some("not a file".to_string()),
            });
            continue;
        }
        let outcome = process_file(&FileJob {
            path,
            delimiter,
            outdir,
            normalizer: &normalizer,
        });
        if let Some(error) = &outcome.error {
            warn!(input = %path.display(), error = %error, "conversion failed");
        }
        outcomes.push(outcome);
    }
    let result = BatchResult {
        outdir: outdir.to_path_buf(),
        files: outcomes,
    };
    info!(
        files = result.files.len(),
        converted = result.files.iter().filter(|f| f.succeeded()).count(),
        "batch complete"
    );
    result
}
