use std::path::Path;

use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE_PREFIX: &str = "backgammon-review.log";

/// Route tracing output to a daily rolling file in `dir`.
///
/// The terminal belongs to the UI, so nothing is written to stdout. `RUST_LOG`
/// takes precedence over `default_filter`. Keep the returned guard alive for
/// the life of the program or buffered lines are lost.
pub fn init_logging(dir: &Path, default_filter: &str) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {}", e))?;

    Ok(guard)
}
