//! Record-block parser.
//!
//! An input file is a sequence of blocks, each introduced by a boundary line
//! of the form `// ****** Record <N> ****** //` (case-insensitive; the
//! number only marks where a new record starts). Every non-blank,
//! non-boundary line inside a block is split into a key/value pair at the
//! first delimiter occurrence; lines without the delimiter are skipped.

use std::path::Path;
use std::str::Lines;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use cmap_model::RawRecord;

use crate::delimiter::Delimiter;
use crate::error::IngestError;

static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^//\s*\*+\s*record\s*\d*\s*\*+\s*//$").expect("valid boundary pattern")
});

/// True when a line marks the start of a new record block.
pub fn is_boundary(line: &str) -> bool {
    BOUNDARY.is_match(line.trim())
}

/// Lazy iterator over the record blocks of one file's content.
///
/// Content before the first boundary line is ignored, so a file without any
/// boundary markers yields zero records.
pub struct RecordBlocks<'a> {
    lines: Lines<'a>,
    delimiter: &'a Delimiter,
    current: Option<RawRecord>,
}

impl<'a> RecordBlocks<'a> {
    fn push_line(record: &mut RawRecord, line: &str, delimiter: &Delimiter) {
        let Some((key, value)) = delimiter.split_line(line) else {
            debug!(line, "skipping line without delimiter");
            return;
        };
        if !record.insert(key, value) {
            debug!(key, "ignoring duplicate field");
        }
    }
}

impl Iterator for RecordBlocks<'_> {
    type Item = RawRecord;

    fn next(&mut self) -> Option<RawRecord> {
        for line in self.lines.by_ref() {
            if line.trim().is_empty() {
                continue;
            }
            if is_boundary(line) {
                let finished = self.current.replace(RawRecord::new());
                if let Some(record) = finished {
                    return Some(record);
                }
                continue;
            }
            if let Some(record) = self.current.as_mut() {
                Self::push_line(record, line, self.delimiter);
            }
        }
        self.current.take()
    }
}

/// Parse file content into a lazy sequence of records.
///
/// Restartable per file: call again on the same content for a fresh pass.
pub fn parse_records<'a>(content: &'a str, delimiter: &'a Delimiter) -> RecordBlocks<'a> {
    RecordBlocks {
        lines: content.lines(),
        delimiter,
        current: None,
    }
}

/// Read a file and collect its records.
///
/// An empty file yields zero records; only I/O failures are errors.
pub fn read_records(path: &Path, delimiter: &Delimiter) -> Result<Vec<RawRecord>, IngestError> {
    let content = std::fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records: Vec<RawRecord> = parse_records(&content, delimiter).collect();
    debug!(path = %path.display(), records = records.len(), "parsed input");
    Ok(records)
}
