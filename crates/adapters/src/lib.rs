// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O

pub mod display;
pub mod report;
pub mod subprocess;
pub mod tool;
pub mod traced;

#[cfg(test)]
mod test_tracing;

pub use display::{detect_display_wrapper, DISPLAY_WRAPPER};
pub use report::{BatchBanner, LogReporter, Reporter};
pub use subprocess::{
    exit_code, is_executable, run_with_timeout, RunError, HEALTH_CHECK_TIMEOUT, TOOL_TIMEOUT,
};
pub use tool::{SystemToolRunner, ToolOutput, ToolRunner};
pub use traced::TracedTool;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use report::{FakeReporter, ReportEvent};
#[cfg(any(test, feature = "test-support"))]
pub use tool::{FakeResponse, FakeToolRunner, ToolCall};
