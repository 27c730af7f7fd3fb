// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dry-run listing

use std::fmt::Write;
use sweep_engine::PlannedBatch;

/// Render planned jobs as a name line followed by the exact command.
pub fn format_plan(planned: &[PlannedBatch]) -> String {
    let mut out = String::new();
    let mut total = 0;
    for batch in planned {
        let indent = match &batch.banner {
            Some(banner) => {
                let _ = writeln!(
                    out,
                    "BATCH {}/{}: {} ({} combinations)",
                    banner.position, banner.total, banner.name, banner.combinations
                );
                "  "
            }
            None => "",
        };
        for job in &batch.jobs {
            let _ = writeln!(out, "{indent}{}", job.name);
            let _ = writeln!(out, "{indent}    {}", job.command_line());
        }
        total += batch.jobs.len();
    }
    let _ = writeln!(out, "Dry run: {} analyses planned, nothing executed", total);
    out
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
