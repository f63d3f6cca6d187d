//! CLI help specs
//!
//! Verify the command surface is discoverable.

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();

    temp.relay()
        .args(&["--help"])
        .passes()
        .stdout_has("assets")
        .stdout_has("dispatch");
}

#[test]
fn assets_help_lists_subcommands() {
    let temp = Project::empty();

    temp.relay()
        .args(&["assets", "--help"])
        .passes()
        .stdout_has("get")
        .stdout_has("search")
        .stdout_has("refresh");
}
