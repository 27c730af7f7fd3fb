// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::subprocess::RunError;
use crate::tool::{ToolOutput, ToolRunner};
use async_trait::async_trait;
use std::time::Duration;
use tracing::Instrument;

/// Wrapper that adds tracing to any ToolRunner
#[derive(Clone)]
pub struct TracedTool<T> {
    inner: T,
}

impl<T> TracedTool<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: ToolRunner> ToolRunner for TracedTool<T> {
    async fn run(&self, argv: &[String], timeout: Duration) -> Result<ToolOutput, RunError> {
        let program = argv.first().map(String::as_str).unwrap_or_default();
        async {
            tracing::debug!(args = argv.len(), timeout_secs = timeout.as_secs(), "starting");
            let start = std::time::Instant::now();
            let result = self.inner.run(argv, timeout).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(out) => tracing::debug!(return_code = out.return_code, elapsed_ms, "exited"),
                Err(e) if e.is_timeout() => tracing::warn!(elapsed_ms, error = %e, "timed out"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "launch failed"),
            }
            result
        }
        .instrument(tracing::info_span!("tool.run", program))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
