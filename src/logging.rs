//! Logging setup.
//!
//! Installs a global `tracing` subscriber that writes to stderr. The filter is
//! read from `TREESTAT_LOG` (same syntax as `RUST_LOG`) and defaults to `warn`,
//! which keeps a normal run silent. User-facing diagnostics for `--verbose`
//! are printed directly and do not depend on this filter.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "TREESTAT_LOG";
const DEFAULT_FILTER: &str = "warn";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing. Subsequent calls are no-ops.
pub fn init() -> Result<(), LoggingError> {
    if INSTALLED.get().is_some() {
        return Ok(());
    }

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let subscriber = Registry::default().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );
    tracing::subscriber::set_global_default(subscriber)?;
    let _ = INSTALLED.set(());
    Ok(())
}
