//! Shared CLI runner: parse, scan, render.

use crate::cli::{self, Invocation};
use crate::error::TreestatError;
use crate::{logging, report, walker};
use std::io::{self, Write};

/// Public entry for running the CLI against the process arguments.
pub fn run_cli_app() -> Result<(), TreestatError> {
    if let Err(e) = logging::init() {
        // Logging is optional; the report does not depend on it.
        eprintln!("warning: {}", e);
    }

    let cli = match cli::run()? {
        Invocation::Scan(cli) => cli,
        Invocation::Info(text) => {
            print!("{}", text);
            return Ok(());
        }
    };

    let root = cli.root();
    let opts = cli.options();
    tracing::debug!(root = %root.display(), ?opts, "starting scan");

    let stats = walker::scan(&root, &opts.scan_options());

    let rendered = if opts.json {
        let mut json = report::render_json(&stats)?;
        json.push('\n');
        json
    } else {
        report::render(&stats, &opts)
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
