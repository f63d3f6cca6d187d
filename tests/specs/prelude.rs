//! Shared helpers for relay CLI specs
//!
//! Every spec runs against a fresh temp project holding its own `relay.toml`,
//! so nothing is read from the user's real config directory.

pub use predicates::prelude::*;

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub const HARDWARE_ASSETS: &str = r#"
[[asset]]
id = "a1"
name = "Forklift"
sku = "FL-100"
description = "Electric forklift"

[asset.properties]
capacity = "2.5t"

[[asset]]
id = "a2"
name = "Pallet Jack"
sku = "PJ-7"
"#;

pub const EVENTS: &str = r#"[
    {"kind": "measurements", "id": "m1", "device_assignment": "as-1", "event_date": "2026-01-05T10:00:00Z", "measurements": {"rpm": 900.0}},
    {"kind": "location", "id": "l1", "device_assignment": "as-1", "event_date": "2026-01-05T10:00:01Z", "latitude": 33.75, "longitude": -84.39},
    {"kind": "alert", "id": "al1", "device_assignment": "as-1", "event_date": "2026-01-05T10:00:02Z", "type": "overheat", "level": "warning", "message": "too hot"},
    {"kind": "measurements", "id": "m2", "device_assignment": "as-1", "event_date": "2026-01-05T10:00:03Z", "measurements": {"rpm": 950.0}}
]"#;

/// Temporary relay project
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Project with an empty `relay.toml` and no asset definitions
    pub fn empty() -> Self {
        let project = Self {
            dir: TempDir::new().unwrap(),
        };
        project.file("relay.toml", "");
        project
    }

    /// Project with the standard two hardware assets
    pub fn with_assets() -> Self {
        let project = Self::empty();
        project.file("assets/hardware-assets.toml", HARDWARE_ASSETS);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root, creating parent directories
    pub fn file(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.dir.path().join(relative)).unwrap();
    }

    /// `relay` command pointed at this project's config
    pub fn relay(&self) -> RelayCommand {
        let mut cmd = Command::cargo_bin("relay").unwrap();
        cmd.env("RELAY_CONFIG", self.dir.path().join("relay.toml"))
            .env("RUST_LOG", "warn")
            .current_dir(self.dir.path());
        RelayCommand { cmd }
    }
}

/// Fluent wrapper over the `relay` binary
pub struct RelayCommand {
    cmd: Command,
}

impl RelayCommand {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn env_remove(mut self, key: &str) -> Self {
        self.cmd.env_remove(key);
        self
    }

    pub fn passes(mut self) -> Outcome {
        Outcome(self.cmd.assert().success())
    }

    pub fn fails(mut self) -> Outcome {
        Outcome(self.cmd.assert().failure().code(1))
    }
}

/// Finished command, for chaining output checks
pub struct Outcome(Assert);

impl Outcome {
    pub fn stdout_has(self, text: &str) -> Self {
        Outcome(self.0.stdout(predicate::str::contains(text)))
    }

    pub fn stdout_lacks(self, text: &str) -> Self {
        Outcome(self.0.stdout(predicate::str::contains(text).not()))
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        let actual = String::from_utf8_lossy(&self.0.get_output().stdout).to_string();
        similar_asserts::assert_eq!(actual, expected);
        self
    }

    pub fn stderr_has(self, text: &str) -> Self {
        Outcome(self.0.stderr(predicate::str::contains(text)))
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.0.get_output().stdout).unwrap()
    }
}
