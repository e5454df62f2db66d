//! Text and JSON rendering of a finished [`Stats`] aggregate.

use crate::cli::{Options, Section};
use crate::error::TreestatError;
use crate::stats::Stats;
use chrono::{Local, TimeZone};
use std::fmt;
use std::path::Path;

const UNITS: [char; 7] = ['B', 'K', 'M', 'G', 'T', 'P', 'E'];

/// Formats a byte count.
///
/// In human mode the value is divided by 1024 while it is at least 1024 and a
/// larger unit exists, then printed with one decimal: `1536` -> `1.5K`.
pub fn format_size(bytes: u64, human: bool) -> String {
    if !human {
        return bytes.to_string();
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1}{}", value, UNITS[unit])
}

/// Renders a Unix timestamp as local time in `ctime` layout, e.g.
/// `Wed Jun 30 21:49:08 1993`.
pub fn format_time(secs: i64) -> String {
    match Local.timestamp_opt(secs, 0).earliest() {
        Some(dt) => dt.format("%a %b %e %H:%M:%S %Y").to_string(),
        None => secs.to_string(),
    }
}

fn format_extreme(time: i64, file: Option<&Path>) -> String {
    match file {
        Some(path) => format!("{} ({})", format_time(time), path.display()),
        None => "none".to_string(),
    }
}

/// The text report for one aggregate. The General section is always present;
/// the others follow the flags in `opts`.
pub struct Report<'a> {
    pub stats: &'a Stats,
    pub opts: &'a Options,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (stats, opts) = (self.stats, self.opts);
        let human = opts.human;

        writeln!(f, "Directory: {}\n", stats.dir_path.display())?;

        writeln!(f, "General:")?;
        writeln!(f, "  Total size: {}", format_size(stats.total_size, human))?;
        writeln!(f, "  Total files: {}", stats.file_count)?;
        writeln!(f, "  Total directories: {}", stats.dir_count)?;
        writeln!(f, "  Empty files: {}", stats.empty_files)?;
        writeln!(f, "  Non-empty files: {}", stats.non_empty_files)?;
        writeln!(f, "  Empty directories: {}", stats.empty_dirs)?;
        writeln!(f, "  Non-empty directories: {}", stats.non_empty_dirs)?;

        if opts.wants(Section::Types) {
            writeln!(f, "\nTypes:")?;
            writeln!(f, "  Text files: {}", stats.text_files)?;
            writeln!(f, "  Binary files: {}", stats.binary_files)?;
            writeln!(f, "  Script files: {}", stats.script_files)?;
            writeln!(f, "  Large files (>100MB): {}", stats.large_files)?;
        }

        if opts.wants(Section::Sizes) {
            writeln!(f, "\nSizes:")?;
            writeln!(f, "  Min file size: {}", format_size(stats.min_size, human))?;
            writeln!(f, "  Max file size: {}", format_size(stats.max_size, human))?;
            writeln!(f, "  Avg file size: {}", format_size(stats.average_file_size(), human))?;
        }

        if opts.wants(Section::Dates) {
            writeln!(f, "\nDates:")?;
            writeln!(
                f,
                "  Oldest file: {}",
                format_extreme(stats.oldest_time, stats.oldest_file.as_deref())
            )?;
            writeln!(
                f,
                "  Newest file: {}",
                format_extreme(stats.newest_time, stats.newest_file.as_deref())
            )?;
        }

        if opts.wants(Section::Links) {
            writeln!(f, "\nLinks:")?;
            writeln!(f, "  Symbolic links: {}", stats.sym_links)?;
            writeln!(f, "  Hard links: {}", stats.hard_links)?;
        }

        Ok(())
    }
}

/// Builds the text report as a string.
pub fn render(stats: &Stats, opts: &Options) -> String {
    Report { stats, opts }.to_string()
}

/// Serializes the whole aggregate as pretty-printed JSON.
pub fn render_json(stats: &Stats) -> Result<String, TreestatError> {
    Ok(serde_json::to_string_pretty(stats)?)
}
