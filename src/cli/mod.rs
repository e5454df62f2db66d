use crate::error::TreestatError;
use crate::walker::ScanOptions;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Walk a directory tree and report statistics about its contents.
///
/// `-h` is taken by `--human`, so clap's short help flag is disabled and help
/// is only reachable as `--help`.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(author, about, long_about = None, disable_help_flag = true)]
pub struct Cli {
    /// Directory to scan. Defaults to the current directory; extra paths are ignored.
    pub paths: Vec<PathBuf>,

    /// Show text/binary/script counts and large files.
    #[arg(short = 't', long)]
    pub types: bool,

    /// Show minimum, maximum and average file sizes.
    #[arg(short = 's', long)]
    pub size: bool,

    /// Reserved. Accepted for compatibility, produces no section.
    #[arg(short = 'p', long)]
    pub permissions: bool,

    /// Show the oldest and newest file.
    #[arg(short = 'd', long)]
    pub dates: bool,

    /// Show symbolic and hard link counts.
    #[arg(short = 'l', long)]
    pub links: bool,

    /// Report unreadable directories and entries on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Print sizes with binary units (K, M, G, ...).
    #[arg(short = 'h', long)]
    pub human: bool,

    /// Show every section.
    #[arg(short = 'a', long)]
    pub all: bool,

    /// Print the raw statistics as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Print help.
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// Optional report sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Types,
    Sizes,
    Permissions,
    Dates,
    Links,
}

/// Immutable run configuration derived from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub types: bool,
    pub size: bool,
    pub permissions: bool,
    pub dates: bool,
    pub links: bool,
    pub verbose: bool,
    pub human: bool,
    pub all: bool,
    pub json: bool,
}

impl Options {
    /// Whether the report should include `section`. `--all` forces everything.
    pub fn wants(&self, section: Section) -> bool {
        self.all
            || match section {
                Section::Types => self.types,
                Section::Sizes => self.size,
                Section::Permissions => self.permissions,
                Section::Dates => self.dates,
                Section::Links => self.links,
            }
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions { verbose: self.verbose }
    }
}

impl Cli {
    /// The root to scan: the first positional path, or `.`.
    pub fn root(&self) -> PathBuf {
        self.paths.first().cloned().unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn options(&self) -> Options {
        Options {
            types: self.types,
            size: self.size,
            permissions: self.permissions,
            dates: self.dates,
            links: self.links,
            verbose: self.verbose,
            human: self.human,
            all: self.all,
            json: self.json,
        }
    }
}

/// What the runner should do after parsing.
#[derive(Debug)]
pub enum Invocation {
    Scan(Cli),
    /// `--help`; the text has already been rendered.
    Info(String),
}

/// Parses an argument list (program name first).
///
/// Any parse failure other than a help request collapses into the
/// one-line usage error.
pub fn parse_from<I, T>(args: I) -> Result<Invocation, TreestatError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    match Cli::try_parse_from(&args) {
        Ok(cli) => Ok(Invocation::Scan(cli)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
            Ok(Invocation::Info(e.to_string()))
        }
        Err(e) => {
            tracing::debug!(error = %e, "command line rejected");
            Err(TreestatError::Usage { program })
        }
    }
}

/// Parses the process arguments.
pub fn run() -> Result<Invocation, TreestatError> {
    parse_from(std::env::args_os())
}
