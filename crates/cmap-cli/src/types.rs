use std::path::PathBuf;

/// Outcome of one input file.
#[derive(Debug)]
pub struct FileOutcome {
    pub input: PathBuf,
    pub records: usize,
    pub columns: usize,
    pub output: Option<PathBuf>,
    pub error: Option<String>,
}

impl FileOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome of the whole batch.
#[derive(Debug)]
pub struct BatchResult {
    pub outdir: PathBuf,
    pub files: Vec<FileOutcome>,
}

impl BatchResult {
    /// True when at least one file was converted.
    pub fn any_succeeded(&self) -> bool {
        self.files.iter().any(FileOutcome::succeeded)
    }
}
