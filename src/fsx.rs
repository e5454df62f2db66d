//! Cross-platform metadata helpers.
//!
//! On Unix the modification time and execute bits come straight from the
//! `stat` fields. Elsewhere the mtime is derived from `modified()` and no file
//! is ever considered executable, since there are no mode bits to inspect.

use crate::stats::FileFacts;
use std::fs::Metadata;

/// Owner, group and other execute bits.
#[cfg(unix)]
const EXEC_BITS: u32 = 0o111;

#[cfg(unix)]
pub fn file_facts(metadata: &Metadata) -> FileFacts {
    use std::os::unix::fs::MetadataExt;
    FileFacts {
        size: metadata.len(),
        mtime: metadata.mtime(),
        executable: metadata.mode() & EXEC_BITS != 0,
    }
}

#[cfg(not(unix))]
pub fn file_facts(metadata: &Metadata) -> FileFacts {
    use std::time::UNIX_EPOCH;
    let mtime = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0);
    FileFacts {
        size: metadata.len(),
        mtime,
        executable: false,
    }
}
