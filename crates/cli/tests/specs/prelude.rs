//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the sweep binary in a scratch project.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

// Keep startup jitter short, in milliseconds.
const SWEEP_JITTER_MS: &str = "0,10";

/// Stand-in for the analysis tool.
///
/// Answers `--version`, appends every other invocation to `calls.log` next
/// to itself, fails with exit 2 when `--index_name=fail`, and otherwise
/// writes a 2000-byte increased-connectivity artifact at the output prefix.
pub const FAKE_TOOL: &str = r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    --version) echo "fake-tool 1.0"; exit 0 ;;
    --output=*) out="${arg#--output=}" ;;
    --index_name=fail) fail=1 ;;
  esac
done
echo "$*" >> "$(dirname "$0")/calls.log"
if [ -n "$fail" ]; then
  echo "analysis failed" >&2
  exit 2
fi
head -c 2000 /dev/zero > "${out}.inc.tt.gz"
echo "done"
"#;

/// Create a CLI builder for sweep commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: vec![
                ("SWEEP_JITTER_MS".into(), SWEEP_JITTER_MS.into()),
                // Keep the display wrapper out of recorded commands
                ("DISPLAY".into(), ":0".into()),
                ("RUST_LOG".into(), "info".into()),
            ],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(env!("CARGO_BIN_EXE_sweep"));
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        // Overrides from the parent shell would change timing under test
        cmd.env_remove("SWEEP_TIMEOUT_MS");
        cmd.env_remove("SWEEP_HEALTH_TIMEOUT_MS");

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert the process exited with `code`.
    pub fn code(self, code: i32) -> Self {
        assert_eq!(
            self.output.status.code(),
            Some(code),
            "unexpected exit code\nstderr: {}",
            self.stderr()
        );
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

// =============================================================================
// Project
// =============================================================================

/// Temporary project directory holding a fake tool and a configuration.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create an empty project
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// A project with the fake tool installed and [`sweep_config`] written
    /// to `sweep.json`.
    pub fn with_fake_tool() -> Self {
        let project = Self::empty();
        let tool = project.install_tool(FAKE_TOOL);
        project.file("sweep.json", &sweep_config(&tool));
        project
    }

    /// Get the project path
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file at the given path (parent directories created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.dir.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Write an executable script at `bin/tool` and return its path.
    pub fn install_tool(&self, script: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        self.file("bin/tool", script);
        let path = self.path().join("bin/tool");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    /// Default output directory of a run in this project
    pub fn results(&self) -> PathBuf {
        self.path().join("sweep_results")
    }

    /// Tool invocations recorded by the fake tool (health checks excluded)
    pub fn tool_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join("bin/calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Summary files in the default output directory, sorted by name
    pub fn summaries(&self) -> Vec<PathBuf> {
        files_with_prefix(&self.results(), "analysis_summary_")
    }

    /// Log files in the default output directory
    pub fn logs(&self) -> Vec<PathBuf> {
        files_with_prefix(&self.results(), "sweep_batch_")
    }

    /// Parse the only summary file
    pub fn summary(&self) -> serde_json::Value {
        let summaries = self.summaries();
        assert_eq!(summaries.len(), 1, "expected one summary: {:?}", summaries);
        let content = std::fs::read_to_string(&summaries[0]).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    /// Run sweep in this project's directory
    pub fn sweep(&self) -> CliBuilder {
        cli().pwd(self.path())
    }
}

fn files_with_prefix(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(prefix))
        })
        .collect();
    files.sort();
    files
}

/// Configuration with three batches:
///
/// - `effect_sweep`: effect_size 0.2 and 0.3 (2 jobs)
/// - `with_failure`: index_name qa and fail (2 jobs, one fails)
/// - `test_run`: one job at effect_size 0.5
pub fn sweep_config(tool: &Path) -> String {
    format!(
        r#"{{
  "tool_cmd": "{}",
  "core_parameters": {{
    "source": {{"value": "data.db.fz", "description": "connectometry database"}},
    "demo": {{"value": "demo.csv"}},
    "variable_list": {{"value": "0,1,2"}},
    "voi": {{"value": 1}}
  }},
  "threshold_parameters": {{
    "length_threshold": {{"value": 25}}
  }},
  "analysis_parameters": {{
    "index_name": {{"value": "qa"}},
    "effect_size": {{"value": 0.3}},
    "permutation": {{"value": 100}}
  }},
  "batch_configurations": [
    {{"name": "effect_sweep", "description": "effect size sweep", "parameters": {{"effect_size": [0.2, 0.3]}}}},
    {{"name": "with_failure", "parameters": {{"index_name": ["qa", "fail"]}}}},
    {{"name": "test_run", "parameters": {{"effect_size": 0.5}}}}
  ],
  "scheduler": {{"display_wrapper": false}}
}}"#,
        tool.display()
    )
}
