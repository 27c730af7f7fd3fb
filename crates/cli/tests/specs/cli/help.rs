//! Help and version output.

use crate::prelude::*;

#[test]
fn help_lists_run_modes() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("--config <FILE>")
        .stdout_has("--batch <N|NAME>")
        .stdout_has("--retry-failed <SUMMARY>")
        .stdout_has("--dry-run")
        .stdout_has("Examples:");
}

#[test]
fn version_prints_name() {
    cli().args(&["--version"]).passes().stdout_has("sweep ");
}
