// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Device events routed through the outbound chain
//!
//! Each record describes a single occurrence reported for a device
//! assignment. The chain only routes by [`EventKind`]; the payloads are
//! opaque to it and are never mutated after construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The five kinds of outbound events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Measurements,
    Location,
    Alert,
    CommandInvocation,
    CommandResponse,
}

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::Measurements,
        EventKind::Location,
        EventKind::Alert,
        EventKind::CommandInvocation,
        EventKind::CommandResponse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Measurements => "measurements",
            EventKind::Location => "location",
            EventKind::Alert => "alert",
            EventKind::CommandInvocation => "command-invocation",
            EventKind::CommandResponse => "command-response",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown event kind: {0}")]
pub struct ParseEventKindError(String);

impl FromStr for EventKind {
    type Err = ParseEventKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseEventKindError(s.to_string()))
    }
}

/// Fields shared by every device event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventHeader {
    pub id: String,
    /// Token of the device assignment that produced the event
    pub device_assignment: String,
    pub event_date: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub received_date: DateTime<Utc>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl EventHeader {
    pub fn new(id: impl Into<String>, device_assignment: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            device_assignment: device_assignment.into(),
            event_date: now,
            received_date: now,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_event_date(mut self, date: DateTime<Utc>) -> Self {
        self.event_date = date;
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A batch of named measurement values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMeasurements {
    #[serde(flatten)]
    pub header: EventHeader,
    #[serde(default)]
    pub measurements: BTreeMap<String, f64>,
}

impl DeviceMeasurements {
    pub fn new(header: EventHeader) -> Self {
        Self {
            header,
            measurements: BTreeMap::new(),
        }
    }

    pub fn with_measurement(mut self, name: impl Into<String>, value: f64) -> Self {
        self.measurements.insert(name.into(), value);
        self
    }
}

/// A reported device position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceLocation {
    #[serde(flatten)]
    pub header: EventHeader,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
    Critical,
}

/// Whether an alert was raised by the device itself or by the system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSource {
    #[default]
    Device,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceAlert {
    #[serde(flatten)]
    pub header: EventHeader,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub level: AlertLevel,
    pub message: String,
    #[serde(default)]
    pub source: AlertSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommandInitiator {
    Rest,
    BatchOperation,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

/// A command sent toward a device
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCommandInvocation {
    #[serde(flatten)]
    pub header: EventHeader,
    pub command_token: String,
    pub initiator: CommandInitiator,
    pub initiator_id: String,
    pub target_id: String,
    #[serde(default)]
    pub status: CommandStatus,
    #[serde(default)]
    pub parameters: BTreeMap<String, String>,
}

/// A device's answer to an earlier command invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCommandResponse {
    #[serde(flatten)]
    pub header: EventHeader,
    pub originating_event_id: String,
    #[serde(default)]
    pub response_event_id: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
}

/// Any one of the outbound event records, tagged by kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum OutboundEvent {
    Measurements(DeviceMeasurements),
    Location(DeviceLocation),
    Alert(DeviceAlert),
    CommandInvocation(DeviceCommandInvocation),
    CommandResponse(DeviceCommandResponse),
}

impl OutboundEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            OutboundEvent::Measurements(_) => EventKind::Measurements,
            OutboundEvent::Location(_) => EventKind::Location,
            OutboundEvent::Alert(_) => EventKind::Alert,
            OutboundEvent::CommandInvocation(_) => EventKind::CommandInvocation,
            OutboundEvent::CommandResponse(_) => EventKind::CommandResponse,
        }
    }

    pub fn header(&self) -> &EventHeader {
        match self {
            OutboundEvent::Measurements(e) => &e.header,
            OutboundEvent::Location(e) => &e.header,
            OutboundEvent::Alert(e) => &e.header,
            OutboundEvent::CommandInvocation(e) => &e.header,
            OutboundEvent::CommandResponse(e) => &e.header,
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
