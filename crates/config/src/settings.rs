// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scheduler settings from the `scheduler` table.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-job wall-clock budget.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2 * 60 * 60;

/// Bounds of the random delay before each parallel job starts.
pub const DEFAULT_JITTER_MIN_SECS: f64 = 2.0;
pub const DEFAULT_JITTER_MAX_SECS: f64 = 30.0;

/// Artifacts at or below this size count as "no finding".
pub const DEFAULT_ARTIFACT_MIN_BYTES: u64 = 1000;

/// Scheduling knobs. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerSettings {
    pub timeout_secs: u64,
    pub jitter_min_secs: f64,
    pub jitter_max_secs: f64,
    pub artifact_min_bytes: u64,
    /// Prepend a virtual display wrapper when no display is available.
    pub display_wrapper: bool,
}

impl Default for SchedulerSettings {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            jitter_min_secs: DEFAULT_JITTER_MIN_SECS,
            jitter_max_secs: DEFAULT_JITTER_MAX_SECS,
            artifact_min_bytes: DEFAULT_ARTIFACT_MIN_BYTES,
            display_wrapper: true,
        }
    }
}

impl SchedulerSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Jitter bounds as durations.
    pub fn jitter(&self) -> (Duration, Duration) {
        (
            Duration::try_from_secs_f64(self.jitter_min_secs).unwrap_or_default(),
            Duration::try_from_secs_f64(self.jitter_max_secs).unwrap_or_default(),
        )
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        let (min, max) = (self.jitter_min_secs, self.jitter_max_secs);
        if !min.is_finite() || !max.is_finite() || min < 0.0 || max < 0.0 {
            return Err(format!(
                "jitter bounds must be non-negative numbers, got {min}..{max}"
            ));
        }
        if min > max {
            return Err(format!("jitter_min_secs ({min}) exceeds jitter_max_secs ({max})"));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}
