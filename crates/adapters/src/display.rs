// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Virtual display detection for headless hosts

use crate::subprocess::is_executable;
use std::ffi::OsString;

/// Program that provides a throwaway X server for one command.
pub const DISPLAY_WRAPPER: &str = "xvfb-run";

/// Argv prefix that gives the tool a virtual display, if one is needed.
///
/// Returns `[<path to xvfb-run>, "-a"]` on Linux when `DISPLAY` is unset or
/// empty and `xvfb-run` is on `PATH`; `None` otherwise.
pub fn detect_display_wrapper() -> Option<Vec<String>> {
    detect_with(
        cfg!(target_os = "linux"),
        std::env::var_os("DISPLAY"),
        std::env::var_os("PATH"),
    )
}

pub(crate) fn detect_with(
    is_linux: bool,
    display: Option<OsString>,
    path: Option<OsString>,
) -> Option<Vec<String>> {
    if !is_linux || display.is_some_and(|d| !d.is_empty()) {
        return None;
    }
    let path = path?;
    let Some(wrapper) = std::env::split_paths(&path)
        .map(|dir| dir.join(DISPLAY_WRAPPER))
        .find(|candidate| is_executable(candidate))
    else {
        tracing::debug!("no display and {} not on PATH", DISPLAY_WRAPPER);
        return None;
    };
    Some(vec![wrapper.display().to_string(), "-a".to_string()])
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
