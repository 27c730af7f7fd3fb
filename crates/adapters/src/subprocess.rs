// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subprocess execution helpers

use std::path::Path;
use std::process::{ExitStatus, Output};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Default timeout for a full tool run.
pub const TOOL_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

/// Default timeout for the tool's `--version` health check.
pub const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that keep a subprocess from producing an exit status
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{description} failed: {source}")]
    Launch {
        description: String,
        source: std::io::Error,
    },
    #[error("{description} timed out after {}s", timeout.as_secs())]
    Timeout {
        description: String,
        timeout: Duration,
    },
}

impl RunError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RunError::Timeout { .. })
    }
}

/// Run a subprocess command with a timeout.
///
/// Wraps `Command::output()` with `tokio::time::timeout`. The child is
/// spawned with `kill_on_drop`, so it is killed when the timeout elapses
/// and the output future is dropped.
pub async fn run_with_timeout(
    mut cmd: Command,
    timeout: Duration,
    description: &str,
) -> Result<Output, RunError> {
    cmd.kill_on_drop(true);
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(source)) => Err(RunError::Launch {
            description: description.to_string(),
            source,
        }),
        Err(_elapsed) => Err(RunError::Timeout {
            description: description.to_string(),
            timeout,
        }),
    }
}

/// Exit code of a finished process; a signal `N` maps to `-N`.
pub fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

/// Whether `path` is a regular file the current user may execute.
pub fn is_executable(path: &Path) -> bool {
    let Ok(meta) = std::fs::metadata(path) else {
        return false;
    };
    if !meta.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        meta.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
