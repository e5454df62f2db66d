//! # treestat Core Library
//!
//! This crate walks a directory tree once and aggregates statistics about its
//! contents: file and directory counts, size extremes, text/binary/script
//! classification, modification-time extremes and link counts.
//!
//! It is designed to be used by the `treestat` command-line application, but
//! the walker and the aggregate can be used directly.
//!
//! ## Key Modules
//!
//! - [`walker`]: The depth-first traversal that feeds every entry into [`Stats`].
//! - [`stats`]: The running aggregate and its update rules.
//! - [`classify`]: Extension-based text/script classification.
//! - [`report`]: Text and JSON rendering of a finished aggregate.
//! - [`cli`]: Command-line definitions and report options.
//!
//! ## Examples
//!
//! ```no_run
//! use treestat::walker::{scan, ScanOptions};
//!
//! let stats = scan("/var/log", &ScanOptions { verbose: true });
//! println!("{} files, {} bytes", stats.file_count, stats.total_size);
//! ```

pub mod classify;
pub mod cli;
pub mod cli_runner;
pub mod error;
pub mod logging;
pub mod report;
pub mod stats;
pub mod walker;

// Cross-platform metadata helpers
pub mod fsx;

pub use error::{ScanError, TreestatError};
pub use stats::Stats;
