//! Asset refresh specs
//!
//! Verify refresh reports its outcome instead of crashing.

use crate::prelude::*;

#[test]
fn refresh_reports_loaded_count() {
    let temp = Project::with_assets();

    temp.relay()
        .args(&["assets", "refresh"])
        .passes()
        .stdout_eq("successful: Refresh successful. Loaded 2 hardware assets.\n");
}

#[test]
fn refresh_with_missing_file_reports_failure() {
    let temp = Project::with_assets();
    temp.remove("assets/hardware-assets.toml");

    temp.relay()
        .args(&["assets", "refresh"])
        .fails()
        .stdout_has("failed: Assets file missing. Looking for: ")
        .stderr_has("asset refresh failed");
}

#[test]
fn refresh_with_malformed_file_reports_parse_error() {
    let temp = Project::with_assets();
    temp.file("assets/hardware-assets.toml", "[[asset]\nid = ");

    temp.relay()
        .args(&["assets", "refresh"])
        .fails()
        .stdout_has("failed: Parse error in ");
}

#[test]
fn refresh_rejects_blank_names() {
    let temp = Project::with_assets();
    temp.file(
        "assets/hardware-assets.toml",
        "[[asset]]\nid = \"a1\"\nname = \" \"\n",
    );

    temp.relay()
        .args(&["assets", "refresh"])
        .fails()
        .stdout_has("asset 'a1' has an empty name");
}
