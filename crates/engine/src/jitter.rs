// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup jitter for parallel jobs.
//!
//! Concurrent tool launches race on the shared virtual display, so each
//! parallel job sleeps a random delay before starting.

use rand::Rng;
use std::time::Duration;

/// Uniform random delay between `min` and `max`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartupJitter {
    min: Duration,
    max: Duration,
}

impl StartupJitter {
    /// Bounds are swapped if given in the wrong order.
    pub fn new(min: Duration, max: Duration) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn bounds(&self) -> (Duration, Duration) {
        (self.min, self.max)
    }

    pub fn is_none(&self) -> bool {
        self.max.is_zero()
    }

    /// Draw one delay from `[min, max]`.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        rand::rng().random_range(self.min..=self.max)
    }
}

impl Default for StartupJitter {
    fn default() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_secs(30))
    }
}

#[cfg(test)]
#[path = "jitter_tests.rs"]
mod tests;
