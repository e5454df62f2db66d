use std::path::PathBuf;

/// A traversal-local failure. The walker reports these (in verbose mode) and
/// carries on with the next entry; they never escape a scan.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// A directory could not be opened or read for listing.
    #[error("Error opening {}: {}", .path.display(), .source)]
    OpenDir { path: PathBuf, source: std::io::Error },

    /// Metadata for a single entry could not be fetched.
    #[error("Error stating {}: {}", .path.display(), .source)]
    Stat { path: PathBuf, source: std::io::Error },
}

impl ScanError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::OpenDir { path, .. } | ScanError::Stat { path, .. } => path,
        }
    }
}

/// The primary error type for the `treestat` binary.
#[derive(Debug, thiserror::Error)]
pub enum TreestatError {
    /// The command line could not be parsed. Displays as the one-line usage text.
    #[error("Usage: {program} [directory] [options]")]
    Usage { program: String },

    /// The aggregate could not be serialized for `--json`.
    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Writing the report to standard output failed.
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),
}
