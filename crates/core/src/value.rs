// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter values as they appear in sweep configurations.

use crate::range::RangeSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single concrete parameter value.
///
/// Configuration formats hand us loosely typed values; untagged
/// deserialization keeps integers and floats distinct so that `1000`
/// and `1000.0` both render without a decimal point. Arrays and objects
/// land in [`Scalar::Other`] so that one odd value in a summary file does
/// not reject the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Scalar {
    /// True for values that should be treated as "not provided".
    pub fn is_blank(&self) -> bool {
        match self {
            Scalar::Null => true,
            Scalar::Text(s) => s.is_empty(),
            _ => false,
        }
    }
}

/// Renders the value the way it appears on a tool command line.
///
/// Booleans render as `1`/`0`, whole floats drop their fraction
/// (`1000.0` -> `1000`), and null renders as an empty string. Arrays and
/// objects render as compact JSON.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{}", u8::from(*b)),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::Text(s)
    }
}

impl From<i64> for Scalar {
    fn from(i: i64) -> Self {
        Scalar::Int(i)
    }
}

impl From<f64> for Scalar {
    fn from(x: f64) -> Self {
        Scalar::Float(x)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

/// A configured parameter: fixed, an explicit list, or a numeric range.
///
/// Variant order matters for untagged deserialization: a string matching
/// the range grammar becomes [`ParamValue::Range`], any other string stays
/// a scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    List(Vec<Scalar>),
    Range(RangeSpec),
    Scalar(Scalar),
}

impl ParamValue {
    /// Values this parameter sweeps over, or `None` for a fixed scalar.
    pub fn sweep_values(&self) -> Option<Vec<Scalar>> {
        match self {
            ParamValue::Scalar(_) => None,
            ParamValue::List(items) => Some(items.clone()),
            ParamValue::Range(range) => {
                Some(range.expand().into_iter().map(Scalar::Float).collect())
            }
        }
    }

    /// Whether this value is a sweep (list or range).
    pub fn is_sweep(&self) -> bool {
        !matches!(self, ParamValue::Scalar(_))
    }
}

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Scalar(Scalar::from(s))
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Scalar(Scalar::Int(i))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Scalar(Scalar::Float(x))
    }
}

impl From<Vec<Scalar>> for ParamValue {
    fn from(items: Vec<Scalar>) -> Self {
        ParamValue::List(items)
    }
}

impl From<RangeSpec> for ParamValue {
    fn from(range: RangeSpec) -> Self {
        ParamValue::Range(range)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
