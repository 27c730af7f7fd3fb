// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the engine crate.

use std::time::Duration;
use sweep_adapters::HEALTH_CHECK_TIMEOUT;

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

/// Per-job timeout override (`SWEEP_TIMEOUT_MS`).
pub fn timeout_override() -> Option<Duration> {
    parse_duration_ms("SWEEP_TIMEOUT_MS")
}

/// Startup jitter bounds override (`SWEEP_JITTER_MS`, `min,max`).
pub fn jitter_override() -> Option<(Duration, Duration)> {
    std::env::var("SWEEP_JITTER_MS")
        .ok()
        .and_then(|s| parse_jitter_ms(&s))
}

/// Health check timeout (`SWEEP_HEALTH_TIMEOUT_MS`, default: 10s).
pub fn health_check_timeout() -> Duration {
    parse_duration_ms("SWEEP_HEALTH_TIMEOUT_MS").unwrap_or(HEALTH_CHECK_TIMEOUT)
}

/// Parse `min,max` milliseconds; a single number means a fixed delay.
pub(crate) fn parse_jitter_ms(text: &str) -> Option<(Duration, Duration)> {
    let mut parts = text.split(',').map(|p| p.trim().parse::<u64>());
    let min = parts.next()?.ok()?;
    let max = match parts.next() {
        Some(max) => max.ok()?,
        None => min,
    };
    if parts.next().is_some() || min > max {
        return None;
    }
    Some((Duration::from_millis(min), Duration::from_millis(max)))
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
