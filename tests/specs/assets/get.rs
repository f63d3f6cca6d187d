//! Asset get specs
//!
//! Verify lookups by exact id.

use crate::prelude::*;

#[test]
fn get_prints_asset_fields() {
    let temp = Project::with_assets();

    temp.relay()
        .args(&["assets", "get", "a1"])
        .passes()
        .stdout_eq("a1\tForklift\tFL-100\n");
}

#[test]
fn get_json_includes_properties() {
    let temp = Project::with_assets();

    let json = temp
        .relay()
        .args(&["assets", "get", "a1", "--format", "json"])
        .passes()
        .stdout_json();

    assert_eq!(json["name"], "Forklift");
    assert_eq!(json["properties"]["capacity"], "2.5t");
}

#[test]
fn get_unknown_id_fails() {
    let temp = Project::with_assets();

    temp.relay()
        .args(&["assets", "get", "a9"])
        .fails()
        .stderr_has("asset not found: a9");
}

#[test]
fn get_is_case_sensitive() {
    let temp = Project::with_assets();

    temp.relay()
        .args(&["assets", "get", "A1"])
        .fails()
        .stderr_has("asset not found: A1");
}

#[test]
fn get_without_assets_folder_names_missing_path() {
    let temp = Project::empty();

    temp.relay()
        .args(&["assets", "get", "a1"])
        .fails()
        .stderr_has("Assets subfolder not found. Looking for: ")
        .stderr_has("--config-dir");
}

#[test]
fn config_dir_flag_overrides_config() {
    let temp = Project::empty();
    temp.file("elsewhere/assets/hardware-assets.toml", HARDWARE_ASSETS);
    let elsewhere = temp.path().join("elsewhere");

    temp.relay()
        .args(&["--config-dir", elsewhere.to_str().unwrap()])
        .args(&["assets", "get", "a2"])
        .passes()
        .stdout_has("Pallet Jack");
}

#[test]
fn configured_filename_is_used() {
    let temp = Project::empty();
    temp.file("relay.toml", "[assets]\nfilename = \"rigs.toml\"\n");
    temp.file("assets/rigs.toml", HARDWARE_ASSETS);

    temp.relay()
        .args(&["assets", "get", "a1"])
        .passes()
        .stdout_has("Forklift");
}
