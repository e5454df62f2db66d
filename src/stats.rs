//! # Scan Statistics
//!
//! `Stats` is the single running aggregate of a scan. The walker owns it for
//! the whole traversal and folds every entry into it in visitation order; the
//! report layer only reads it afterwards.

use crate::classify;
use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Files strictly larger than this (100 MiB) count as large.
pub const LARGE_FILE_THRESHOLD: u64 = 100 * 1024 * 1024;

/// The metadata the accumulator needs about one regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFacts {
    /// Size in bytes.
    pub size: u64,
    /// Modification time, seconds since the Unix epoch.
    pub mtime: i64,
    /// Any of the owner/group/other execute bits is set.
    pub executable: bool,
}

/// Aggregate statistics about one directory tree.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    /// The root path exactly as it was requested.
    #[serde(serialize_with = "lossy_path")]
    pub dir_path: PathBuf,

    pub total_size: u64,
    pub file_count: u64,
    pub dir_count: u64,
    pub empty_files: u64,
    pub non_empty_files: u64,
    /// Reserved. Never populated.
    pub empty_dirs: u64,
    /// Reserved. Never populated.
    pub non_empty_dirs: u64,

    pub text_files: u64,
    pub binary_files: u64,
    pub script_files: u64,
    pub large_files: u64,

    /// `u64::MAX` until the first regular file is seen.
    pub min_size: u64,
    pub max_size: u64,
    pub total_file_size: u64,
    pub text_size: u64,
    pub binary_size: u64,

    pub sym_links: u64,
    /// Reserved. Never populated.
    pub hard_links: u64,
    pub exec_files: u64,
    /// Reserved. Never populated.
    pub recent_files: u64,

    /// `i64::MAX` until the first regular file is seen.
    pub oldest_time: i64,
    pub newest_time: i64,
    #[serde(serialize_with = "lossy_opt_path")]
    pub oldest_file: Option<PathBuf>,
    #[serde(serialize_with = "lossy_opt_path")]
    pub newest_file: Option<PathBuf>,
}

// File names are not guaranteed to be UTF-8; JSON strings are.
fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn lossy_opt_path<S: Serializer>(path: &Option<PathBuf>, serializer: S) -> Result<S::Ok, S::Error> {
    match path {
        Some(p) => serializer.serialize_some(&p.to_string_lossy()),
        None => serializer.serialize_none(),
    }
}

impl Stats {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            dir_path: root.into(),
            total_size: 0,
            file_count: 0,
            dir_count: 0,
            empty_files: 0,
            non_empty_files: 0,
            empty_dirs: 0,
            non_empty_dirs: 0,
            text_files: 0,
            binary_files: 0,
            script_files: 0,
            large_files: 0,
            min_size: u64::MAX,
            max_size: 0,
            total_file_size: 0,
            text_size: 0,
            binary_size: 0,
            sym_links: 0,
            hard_links: 0,
            exec_files: 0,
            recent_files: 0,
            oldest_time: i64::MAX,
            newest_time: 0,
            oldest_file: None,
            newest_file: None,
        }
    }

    /// Folds one regular file into the aggregate.
    ///
    /// Extremes only move on strict comparisons, so on ties the file seen
    /// first keeps its place.
    pub fn record_file(&mut self, path: &Path, facts: &FileFacts) {
        let size = facts.size;

        self.file_count += 1;
        self.total_size += size;
        self.total_file_size += size;

        if size == 0 {
            self.empty_files += 1;
        } else {
            self.non_empty_files += 1;
        }

        if size > LARGE_FILE_THRESHOLD {
            self.large_files += 1;
        }

        if size < self.min_size {
            self.min_size = size;
        }
        if size > self.max_size {
            self.max_size = size;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let class = classify::classify(&name);
        if class.text {
            self.text_files += 1;
            self.text_size += size;
        } else {
            self.binary_files += 1;
            self.binary_size += size;
        }
        if class.script {
            self.script_files += 1;
        }

        if facts.executable {
            self.exec_files += 1;
        }

        if facts.mtime < self.oldest_time {
            self.oldest_time = facts.mtime;
            self.oldest_file = Some(path.to_path_buf());
        }
        if facts.mtime > self.newest_time {
            self.newest_time = facts.mtime;
            self.newest_file = Some(path.to_path_buf());
        }
    }

    pub fn record_dir(&mut self) {
        self.dir_count += 1;
    }

    pub fn record_symlink(&mut self) {
        self.sym_links += 1;
    }

    /// `total_size / file_count`, or `total_size` itself when there are no files.
    pub fn average_file_size(&self) -> u64 {
        self.total_size / self.file_count.max(1)
    }

    /// True once at least one regular file has been folded in.
    pub fn has_files(&self) -> bool {
        self.file_count > 0
    }
}
