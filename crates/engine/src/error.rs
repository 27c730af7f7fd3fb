// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for batch runs

use std::path::PathBuf;
use sweep_config::SelectError;
use sweep_core::GridError;
use sweep_storage::SummaryError;
use thiserror::Error;

/// Errors that abort a whole run.
///
/// Per-job problems never surface here; they are statuses on `JobResult`.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("tool not available: {tool}: {reason}")]
    ToolUnavailable { tool: String, reason: String },
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Summary(#[from] SummaryError),
    #[error("batch {batch}: {source}")]
    Grid { batch: String, source: GridError },
    #[error("invalid custom parameters: {0}")]
    InvalidCustom(String),
    #[error("failed to create {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}
