// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External tool invocation adapters

mod system;

pub use system::SystemToolRunner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeResponse, FakeToolRunner, ToolCall};

use crate::subprocess::RunError;
use async_trait::async_trait;
use std::time::Duration;

/// Captured result of a tool process that ran to exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub return_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.return_code == 0
    }
}

/// Adapter for running the external tool
#[async_trait]
pub trait ToolRunner: Clone + Send + Sync + 'static {
    /// Run `argv` (program first) and wait up to `timeout` for it to exit.
    ///
    /// A non-zero exit is `Ok`; only launch failures and timeouts are `Err`.
    async fn run(&self, argv: &[String], timeout: Duration) -> Result<ToolOutput, RunError>;
}
