//! # Tree Walker
//!
//! Depth-first, pre-order traversal of a directory tree that folds every entry
//! into one [`Stats`] aggregate.
//!
//! The traversal runs on `walkdir`, which keeps its own stack of open
//! directory handles instead of recursing, so arbitrarily deep trees do not
//! exhaust the call stack. Entries are visited in whatever order the operating
//! system lists them. Symbolic links are never followed, except for the root
//! path itself which is opened the same way `opendir` would open it.
//!
//! Failures are local: an unreadable directory or an entry whose metadata
//! cannot be fetched is skipped, optionally reported, and the walk continues.

use crate::error::ScanError;
use crate::fsx;
use crate::stats::Stats;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Knobs that influence the traversal itself (as opposed to the report).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Print per-node failures to standard error.
    pub verbose: bool,
}

/// Scans `root` and returns a fresh aggregate for it.
pub fn scan(root: impl AsRef<Path>, opts: &ScanOptions) -> Stats {
    let root = root.as_ref();
    let mut stats = Stats::new(root);
    scan_into(root, opts, &mut stats);
    stats
}

/// Scans `root`, folding every entry into an existing aggregate.
pub fn scan_into(root: &Path, opts: &ScanOptions, stats: &mut Stats) {
    let _span = tracing::debug_span!("scan", root = %root.display()).entered();

    let mut it = WalkDir::new(root).follow_links(false).into_iter();

    while let Some(next) = it.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                report(opts, walk_error(err, root));
                continue;
            }
        };

        if entry.depth() == 0 {
            // The root is never counted, it only has to be listable.
            if !entry.path().is_dir() {
                if let Err(source) = fs::read_dir(entry.path()) {
                    report(opts, ScanError::OpenDir { path: entry.path().to_path_buf(), source });
                }
            }
            continue;
        }

        let metadata = match entry.metadata() {
            Ok(md) => md,
            Err(err) => {
                let source = err
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "metadata unavailable"));
                report(opts, ScanError::Stat { path: entry.path().to_path_buf(), source });
                // walkdir has already queued this directory; do not descend into it.
                if entry.file_type().is_dir() {
                    it.skip_current_dir();
                }
                continue;
            }
        };

        let file_type = metadata.file_type();
        if file_type.is_file() {
            stats.record_file(entry.path(), &fsx::file_facts(&metadata));
        } else if file_type.is_dir() {
            stats.record_dir();
        } else if file_type.is_symlink() {
            stats.record_symlink();
        } else {
            tracing::trace!(path = %entry.path().display(), "ignoring special file");
        }
    }

    tracing::debug!(
        files = stats.file_count,
        dirs = stats.dir_count,
        bytes = stats.total_size,
        "scan finished"
    );
}

fn walk_error(err: walkdir::Error, root: &Path) -> ScanError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
    ScanError::OpenDir { path, source }
}

fn report(opts: &ScanOptions, err: ScanError) {
    tracing::debug!(path = %err.path().display(), error = %err, "skipping node");
    if opts.verbose {
        eprintln!("{}", err);
    }
}
