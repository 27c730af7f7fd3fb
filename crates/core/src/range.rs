// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric sweep ranges written as `start:step:end` or `start:end`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on values produced by a single range.
pub const MAX_RANGE_VALUES: usize = 100_000;

/// Decimal places every expanded value is rounded to.
const ROUND_DIGITS: i32 = 10;

/// Relative tolerance applied to the end bound.
const END_TOLERANCE: f64 = 1e-5;

/// A parsed numeric range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RangeSpec {
    pub start: f64,
    pub step: f64,
    pub end: f64,
}

impl RangeSpec {
    /// Parse the range grammar.
    ///
    /// Returns `None` when the text is not a range: characters other than
    /// digits, `.`, `-` and `:`, a field count other than 2 or 3, a field
    /// that is not a number, a step pointing away from `end`, or more than
    /// [`MAX_RANGE_VALUES`] values.
    pub fn parse(text: &str) -> Option<Self> {
        if !text.contains(':')
            || !text
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | ':'))
        {
            return None;
        }

        let fields = text
            .split(':')
            .map(|f| f.parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;

        let spec = match fields.as_slice() {
            [start, step, end] => RangeSpec {
                start: *start,
                step: *step,
                end: *end,
            },
            [start, end] => RangeSpec {
                start: *start,
                step: 1.0,
                end: *end,
            },
            _ => return None,
        };

        match spec.len() {
            Some(n) if n > 0 && n <= MAX_RANGE_VALUES => Some(spec),
            _ => None,
        }
    }

    /// Number of values [`expand`](Self::expand) produces, or `None` if
    /// the step can never reach `end`.
    fn len(&self) -> Option<usize> {
        if self.step == 0.0 {
            return Some(1);
        }
        let epsilon = self.step.abs() * END_TOLERANCE;
        let span = if self.step > 0.0 {
            self.end + epsilon - self.start
        } else {
            self.start - (self.end - epsilon)
        };
        if span < 0.0 {
            return None;
        }
        let steps = (span / self.step.abs()).floor();
        if !steps.is_finite() || steps >= MAX_RANGE_VALUES as f64 {
            return Some(usize::MAX);
        }
        Some(steps as usize + 1)
    }

    /// Expand into the ordered list of values, each rounded to 10 decimals.
    ///
    /// A zero step yields the single value `start`.
    pub fn expand(&self) -> Vec<f64> {
        let n = match self.len() {
            Some(n) => n.min(MAX_RANGE_VALUES),
            None => return Vec::new(),
        };
        if self.step == 0.0 {
            return vec![round_fixed(self.start)];
        }
        (0..n)
            .map(|i| round_fixed(self.start + self.step * i as f64))
            .collect()
    }
}

/// Expand a range string, or `None` if it is not one.
pub fn expand_range(text: &str) -> Option<Vec<f64>> {
    RangeSpec::parse(text).map(|spec| spec.expand())
}

fn round_fixed(x: f64) -> f64 {
    let scale = 10f64.powi(ROUND_DIGITS);
    let rounded = (x * scale).round() / scale;
    // Avoid printing "-0" for values that round to zero
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for RangeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.step, self.end)
    }
}

impl TryFrom<String> for RangeSpec {
    type Error = String;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        RangeSpec::parse(&text).ok_or_else(|| format!("not a numeric range: {text}"))
    }
}

impl From<RangeSpec> for String {
    fn from(spec: RangeSpec) -> Self {
        spec.to_string()
    }
}

#[cfg(test)]
#[path = "range_tests.rs"]
mod tests;
