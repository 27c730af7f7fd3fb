// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors that carry a specific process exit code

use sweep_engine::BatchError;
use thiserror::Error;

/// Exit code for an unknown batch index or name.
pub const EXIT_NOT_FOUND: i32 = 3;
/// Exit code when the tool fails its health check.
pub const EXIT_TOOL_UNAVAILABLE: i32 = 4;
/// Exit code after Ctrl-C.
pub const EXIT_INTERRUPTED: i32 = 130;

/// An error that sets the exit code. An empty message prints nothing.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: String) -> Self {
        Self { code, message }
    }
}

/// Map a fatal run error to the error `main` reports.
pub fn from_batch_error(err: BatchError) -> anyhow::Error {
    match err {
        BatchError::Select(e) => ExitError::new(EXIT_NOT_FOUND, e.to_string()).into(),
        e @ BatchError::ToolUnavailable { .. } => {
            ExitError::new(EXIT_TOOL_UNAVAILABLE, e.to_string()).into()
        }
        other => other.into(),
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
