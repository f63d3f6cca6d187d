//! Asset search specs
//!
//! Verify case-insensitive search and result ordering.

use crate::prelude::*;

#[test]
fn search_is_case_insensitive() {
    let temp = Project::with_assets();

    temp.relay()
        .args(&["assets", "search", "FORK"])
        .passes()
        .stdout_eq("a1\tForklift\tFL-100\n");
}

#[test]
fn search_without_query_lists_all_sorted_by_name() {
    let temp = Project::with_assets();

    temp.relay()
        .args(&["assets", "search"])
        .passes()
        .stdout_eq("a1\tForklift\tFL-100\na2\tPallet Jack\tPJ-7\n");
}

#[test]
fn search_matches_property_values() {
    let temp = Project::with_assets();

    temp.relay()
        .args(&["assets", "search", "2.5T"])
        .passes()
        .stdout_has("a1")
        .stdout_lacks("a2");
}

#[test]
fn search_with_no_match_says_so() {
    let temp = Project::with_assets();

    temp.relay()
        .args(&["assets", "search", "crane"])
        .passes()
        .stdout_eq("No assets found\n");
}

#[test]
fn search_json_is_an_array() {
    let temp = Project::with_assets();

    let json = temp
        .relay()
        .args(&["assets", "search", "--format", "json"])
        .passes()
        .stdout_json();

    let ids: Vec<_> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(ids, vec!["a1", "a2"]);
}
