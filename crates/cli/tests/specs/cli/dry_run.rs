//! `--dry-run` plans without side effects.

use crate::prelude::*;

#[test]
fn lists_commands_without_running_them() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--dry-run"])
        .passes()
        .stdout_has("BATCH 1/2: effect_sweep (2 combinations)")
        .stdout_has("  qa_0.2_25_100\n")
        .stdout_has("--action=cnt --source=data.db.fz")
        .stdout_has("Dry run: 4 analyses planned, nothing executed");

    assert!(project.tool_calls().is_empty());
    assert!(!project.results().exists());
}

#[test]
fn skips_the_tool_health_check() {
    let project = Project::empty();
    project.file("sweep.json", &sweep_config(&project.path().join("missing-tool")));

    project
        .sweep()
        .args(&["--config", "sweep.json", "--test", "--dry-run"])
        .passes()
        .stdout_has("Dry run: 1 analyses planned");
}

#[test]
fn still_rejects_unknown_batches() {
    let project = Project::with_fake_tool();

    project
        .sweep()
        .args(&["--config", "sweep.json", "--batch", "nope", "--dry-run"])
        .fails()
        .stderr_has("no batch named 'nope'");
}
