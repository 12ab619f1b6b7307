//! Tracing setup.
//!
//! One-shot commands log to stderr. The browser owns the terminal, so it logs
//! to the workspace log file instead.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::types::LogLevel;

/// `RUST_LOG` wins over `--log-level` when set.
fn filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()))
}

pub fn init_stderr(level: LogLevel) {
    // A second init (tests calling `run` twice) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter(level))
        .with_target(false)
        .try_init();
}

/// Append to `log_path`. Keep the guard alive until exit so buffered lines
/// are flushed.
pub fn init_file(level: LogLevel, log_path: &Path) -> Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or(Path::new("."));
    let file_name = log_path
        .file_name()
        .with_context(|| format!("Invalid log path: {}", log_path.display()))?;
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter(level))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    tracing::info!("reelmark v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(guard)
}
