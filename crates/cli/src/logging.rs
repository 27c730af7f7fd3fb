// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup for the `sweep` binary

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;

/// File name prefix of per-run log files.
pub const LOG_PREFIX: &str = "sweep_batch_";

/// `<output_dir>/sweep_batch_<YYYYmmdd_HHMMSS>.log`
pub fn log_path(output_dir: &Path, now: NaiveDateTime) -> PathBuf {
    output_dir.join(format!("{}{}.log", LOG_PREFIX, now.format("%Y%m%d_%H%M%S")))
}

/// Install the global subscriber: stdout always, plus `log_file` when given.
///
/// The returned guard flushes the file writer on drop and must outlive the run.
pub fn setup_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
            let file_name = path
                .file_name()
                .with_context(|| format!("invalid log path {}", path.display()))?;

            let file_appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (
                Some(fmt::layer().with_writer(non_blocking).with_ansi(false)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_ansi(std::io::stdout().is_terminal()),
        )
        .with(file_layer)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
