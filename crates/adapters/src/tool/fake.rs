// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake tool runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ToolOutput, ToolRunner};
use crate::subprocess::RunError;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use sweep_core::OUTPUT_FLAG;

/// Recorded tool invocation
#[derive(Debug, Clone)]
pub struct ToolCall {
    pub argv: Vec<String>,
    pub timeout: Duration,
}

impl ToolCall {
    /// Whether any argument contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.argv.iter().any(|a| a.contains(needle))
    }
}

#[derive(Debug, Clone)]
enum Outcome {
    Exit {
        code: i32,
        stdout: String,
        stderr: String,
    },
    Timeout,
    Launch(String),
}

/// Scripted result for calls matching a pattern
#[derive(Debug, Clone)]
pub struct FakeResponse {
    outcome: Outcome,
    delay: Duration,
    /// (suffix appended to the output prefix, size in bytes)
    artifacts: Vec<(String, usize)>,
}

impl FakeResponse {
    /// Exit with `code` and empty output.
    pub fn exit(code: i32) -> Self {
        Self {
            outcome: Outcome::Exit {
                code,
                stdout: String::new(),
                stderr: String::new(),
            },
            delay: Duration::ZERO,
            artifacts: Vec::new(),
        }
    }

    pub fn success() -> Self {
        Self::exit(0)
    }

    /// Exit with `code`, writing `stderr`.
    pub fn fail(code: i32, stderr: &str) -> Self {
        Self {
            outcome: Outcome::Exit {
                code,
                stdout: String::new(),
                stderr: stderr.to_string(),
            },
            ..Self::exit(code)
        }
    }

    /// Report a timeout after the delay.
    pub fn timeout() -> Self {
        Self {
            outcome: Outcome::Timeout,
            ..Self::exit(0)
        }
    }

    /// Fail to launch with `message`.
    pub fn launch_error(message: &str) -> Self {
        Self {
            outcome: Outcome::Launch(message.to_string()),
            ..Self::exit(0)
        }
    }

    pub fn with_stdout(mut self, text: &str) -> Self {
        if let Outcome::Exit { stdout, .. } = &mut self.outcome {
            *stdout = text.to_string();
        }
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Write `<output prefix><suffix>` with `bytes` bytes before exiting.
    pub fn with_artifact(mut self, suffix: &str, bytes: usize) -> Self {
        self.artifacts.push((suffix.to_string(), bytes));
        self
    }
}

struct FakeToolState {
    calls: Vec<ToolCall>,
    rules: Vec<(String, FakeResponse)>,
    default: FakeResponse,
    in_flight: usize,
    max_in_flight: usize,
}

/// Fake tool runner for testing
#[derive(Clone)]
pub struct FakeToolRunner {
    inner: Arc<Mutex<FakeToolState>>,
}

impl Default for FakeToolRunner {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeToolState {
                calls: Vec::new(),
                rules: Vec::new(),
                default: FakeResponse::success(),
                in_flight: 0,
                max_in_flight: 0,
            })),
        }
    }
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer calls whose argv contains `pattern` with `response`.
    /// Earlier rules win.
    pub fn on(self, pattern: &str, response: FakeResponse) -> Self {
        self.inner
            .lock()
            .rules
            .push((pattern.to_string(), response));
        self
    }

    /// Answer unmatched calls with `response`.
    pub fn otherwise(self, response: FakeResponse) -> Self {
        self.inner.lock().default = response;
        self
    }

    /// Get all recorded calls, in start order
    pub fn calls(&self) -> Vec<ToolCall> {
        self.inner.lock().calls.clone()
    }

    /// Highest number of calls that were running at once
    pub fn max_in_flight(&self) -> usize {
        self.inner.lock().max_in_flight
    }

    fn response_for(&self, argv: &[String]) -> FakeResponse {
        let state = self.inner.lock();
        state
            .rules
            .iter()
            .find(|(pattern, _)| argv.iter().any(|a| a.contains(pattern.as_str())))
            .map(|(_, r)| r.clone())
            .unwrap_or_else(|| state.default.clone())
    }
}

#[async_trait]
impl ToolRunner for FakeToolRunner {
    async fn run(&self, argv: &[String], timeout: Duration) -> Result<ToolOutput, RunError> {
        let response = self.response_for(argv);
        {
            let mut state = self.inner.lock();
            state.calls.push(ToolCall {
                argv: argv.to_vec(),
                timeout,
            });
            state.in_flight += 1;
            state.max_in_flight = state.max_in_flight.max(state.in_flight);
        }

        if !response.delay.is_zero() {
            tokio::time::sleep(response.delay).await;
        }
        self.inner.lock().in_flight -= 1;

        let description = argv.first().cloned().unwrap_or_default();
        match response.outcome {
            Outcome::Exit {
                code,
                stdout,
                stderr,
            } => {
                if let Some(prefix) = argv.iter().find_map(|a| a.strip_prefix(OUTPUT_FLAG)) {
                    for (suffix, bytes) in &response.artifacts {
                        let path = PathBuf::from(format!("{prefix}{suffix}"));
                        if let Some(parent) = path.parent() {
                            let _ = std::fs::create_dir_all(parent);
                        }
                        let _ = std::fs::write(&path, vec![0u8; *bytes]);
                    }
                }
                Ok(ToolOutput {
                    return_code: code,
                    stdout,
                    stderr,
                })
            }
            Outcome::Timeout => Err(RunError::Timeout {
                description,
                timeout,
            }),
            Outcome::Launch(message) => Err(RunError::Launch {
                description,
                source: std::io::Error::new(std::io::ErrorKind::NotFound, message),
            }),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
