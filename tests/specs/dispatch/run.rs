//! Dispatch specs
//!
//! Verify events from a file are delivered through the chain.

use crate::prelude::*;

#[test]
fn dispatch_prints_per_kind_summary() {
    let temp = Project::empty();
    temp.file("events.json", EVENTS);

    temp.relay()
        .args(&["dispatch", "events.json"])
        .passes()
        .stdout_eq(
            "measurements: 2 delivered, 0 failed\n\
             location: 1 delivered, 0 failed\n\
             alert: 1 delivered, 0 failed\n\
             total: 4 events\n",
        );
}

#[test]
fn dispatch_json_summary() {
    let temp = Project::empty();
    temp.file("events.json", EVENTS);

    let json = temp
        .relay()
        .args(&["dispatch", "events.json", "--format", "json"])
        .passes()
        .stdout_json();

    assert_eq!(json["kinds"]["measurements"]["events"], 2);
    assert_eq!(json["kinds"]["alert"]["delivered"], 1);
}

#[test]
fn disabled_chain_skips_events() {
    let temp = Project::empty();
    temp.file("relay.toml", "[chain]\nenabled = false\n");
    temp.file("events.json", EVENTS);

    temp.relay()
        .args(&["dispatch", "events.json"])
        .passes()
        .stdout_has("measurements: 0 delivered, 0 failed, 2 skipped");
}

#[test]
fn dispatch_logs_each_event() {
    let temp = Project::empty();
    temp.file("events.json", EVENTS);

    temp.relay()
        .env("RUST_LOG", "info")
        .args(&["dispatch", "events.json"])
        .passes()
        .stderr_has("processor.handle")
        .stderr_has("overheat");
}

#[test]
fn dispatch_writes_log_file_when_configured() {
    let temp = Project::empty();
    temp.file("relay.toml", "[logging]\nlevel = \"info\"\nfile = \"logs/relay.log\"\n");
    temp.file("events.json", EVENTS);

    temp.relay()
        .env_remove("RUST_LOG")
        .args(&["dispatch", "events.json"])
        .passes();

    let log = std::fs::read_to_string(temp.path().join("logs/relay.log")).unwrap();
    assert!(log.contains("Outbound event processor chain started."));
}

#[test]
fn dispatch_rejects_unknown_event_kind() {
    let temp = Project::empty();
    temp.file(
        "events.json",
        r#"[{"kind": "heartbeat", "id": "h1", "device_assignment": "as-1", "event_date": "2026-01-05T10:00:00Z"}]"#,
    );

    temp.relay()
        .args(&["dispatch", "events.json"])
        .fails()
        .stderr_has("invalid events file events.json");
}

#[test]
fn dispatch_missing_file_fails() {
    let temp = Project::empty();

    temp.relay()
        .args(&["dispatch", "missing.json"])
        .fails()
        .stderr_has("cannot read events file missing.json");
}
