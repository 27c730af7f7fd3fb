// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool health check before a run

use crate::error::BatchError;
use std::path::Path;
use std::time::Duration;
use sweep_adapters::{is_executable, ToolRunner};

/// Run `<tool> --version` and require a zero exit.
///
/// A failed check is only a warning when `tool` names an executable file;
/// some builds exit non-zero on `--version` without a display.
pub async fn check_tool<T: ToolRunner>(
    runner: &T,
    tool: &str,
    timeout: Duration,
) -> Result<(), BatchError> {
    let argv = [tool.to_string(), "--version".to_string()];
    let reason = match runner.run(&argv, timeout).await {
        Ok(output) if output.success() => {
            tracing::info!(tool, "tool validated");
            return Ok(());
        }
        Ok(output) => format!("--version exited with code {}", output.return_code),
        Err(e) => e.to_string(),
    };

    if is_executable(Path::new(tool)) {
        tracing::warn!(tool, %reason, "health check failed but the executable exists, continuing");
        return Ok(());
    }
    Err(BatchError::ToolUnavailable {
        tool: tool.to_string(),
        reason,
    })
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
