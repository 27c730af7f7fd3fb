// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Summary file persistence.
//!
//! Each run writes one summary file and never touches an existing one;
//! retries read an older file and write a new one next to it.

use chrono::NaiveDateTime;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use sweep_core::BatchSummary;
use thiserror::Error;

/// File name prefix of summary files.
pub const SUMMARY_PREFIX: &str = "analysis_summary_";

/// Errors that can occur in summary operations
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid summary {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> SummaryError + '_ {
    move |source| SummaryError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Path for a new summary in `dir`, stamped with `now`.
///
/// Appends `_1`, `_2`, ... when a file of that name already exists.
pub fn summary_path(dir: &Path, now: NaiveDateTime) -> PathBuf {
    let stem = format!("{}{}", SUMMARY_PREFIX, now.format("%Y%m%d_%H%M%S"));
    let first = dir.join(format!("{stem}.json"));
    if !first.exists() {
        return first;
    }
    (1..)
        .map(|n| dir.join(format!("{stem}_{n}.json")))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

/// Save a summary atomically (write to .tmp, then rename).
pub fn save_summary(summary: &BatchSummary, path: &Path) -> Result<(), SummaryError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err(parent))?;
    }

    let tmp_path = path.with_extension("json.tmp");
    {
        let file = File::create(&tmp_path).map_err(io_err(&tmp_path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, summary).map_err(|source| {
            SummaryError::Json {
                path: tmp_path.clone(),
                source,
            }
        })?;
        writer.write_all(b"\n").map_err(io_err(&tmp_path))?;
        let file = writer
            .into_inner()
            .map_err(|e| io_err(&tmp_path)(e.into_error()))?;
        file.sync_all().map_err(io_err(&tmp_path))?;
    }

    fs::rename(&tmp_path, path).map_err(io_err(path))?;
    tracing::debug!(
        path = %path.display(),
        analyses = summary.total_analyses,
        "summary saved"
    );
    Ok(())
}

/// Load a summary written by this or an older build.
pub fn load_summary(path: &Path) -> Result<BatchSummary, SummaryError> {
    let file = File::open(path).map_err(io_err(path))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| SummaryError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
