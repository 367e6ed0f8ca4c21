//! Logging setup.
//!
//! The game owns stdout, so log records go to a file only.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "dungeon.log";

/// Routes `tracing` output to `<log_dir>/dungeon.log`.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Records are
/// flushed until the returned guard is dropped, so keep it alive for the
/// whole run.
pub fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());
    Ok(guard)
}
