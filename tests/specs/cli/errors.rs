//! CLI error specs
//!
//! Verify configuration problems are reported before any command runs.

use crate::prelude::*;

#[test]
fn unknown_config_key_fails() {
    let temp = Project::with_assets();
    temp.file("relay.toml", "[chain]\nretries = 3\n");

    temp.relay()
        .args(&["assets", "search"])
        .fails()
        .stderr_has("invalid config");
}

#[test]
fn missing_explicit_config_fails() {
    let temp = Project::with_assets();
    let missing = temp.path().join("nope.toml");

    temp.relay()
        .args(&["--config", missing.to_str().unwrap()])
        .args(&["assets", "search"])
        .fails()
        .stderr_has("cannot read config");
}

#[test]
fn config_flag_wins_over_environment() {
    let temp = Project::with_assets();
    temp.file("relay.toml", "this is not toml");
    temp.file("alt.toml", "");
    let alt = temp.path().join("alt.toml");

    temp.relay()
        .args(&["--config", alt.to_str().unwrap()])
        .args(&["assets", "get", "a1"])
        .passes()
        .stdout_has("Forklift");
}
