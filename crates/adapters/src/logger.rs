// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Processor that writes every event to the log

use async_trait::async_trait;
use relay_core::{
    DeviceAlert, DeviceCommandInvocation, DeviceCommandResponse, DeviceLocation,
    DeviceMeasurements, OutboundEventProcessor, ProcessorError,
};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Logs each event at `info` with its identifying fields
#[derive(Debug)]
pub struct LogProcessor {
    id: String,
    logged: AtomicU64,
}

impl LogProcessor {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            logged: AtomicU64::new(0),
        }
    }

    /// Number of events logged since creation
    pub fn logged(&self) -> u64 {
        self.logged.load(Ordering::Relaxed)
    }

    fn count(&self) {
        self.logged.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for LogProcessor {
    fn default() -> Self {
        Self::new("log")
    }
}

#[async_trait]
impl OutboundEventProcessor for LogProcessor {
    fn id(&self) -> &str {
        &self.id
    }

    async fn start(&self) -> Result<(), ProcessorError> {
        info!(processor = %self.id, "log processor started");
        Ok(())
    }

    async fn stop(&self) -> Result<(), ProcessorError> {
        info!(processor = %self.id, logged = self.logged(), "log processor stopped");
        Ok(())
    }

    async fn on_measurements(&self, event: &DeviceMeasurements) -> Result<(), ProcessorError> {
        self.count();
        info!(
            processor = %self.id,
            event_id = %event.header.id,
            assignment = %event.header.device_assignment,
            count = event.measurements.len(),
            "measurements"
        );
        Ok(())
    }

    async fn on_location(&self, event: &DeviceLocation) -> Result<(), ProcessorError> {
        self.count();
        info!(
            processor = %self.id,
            event_id = %event.header.id,
            assignment = %event.header.device_assignment,
            latitude = event.latitude,
            longitude = event.longitude,
            "location"
        );
        Ok(())
    }

    async fn on_alert(&self, event: &DeviceAlert) -> Result<(), ProcessorError> {
        self.count();
        info!(
            processor = %self.id,
            event_id = %event.header.id,
            assignment = %event.header.device_assignment,
            alert_type = %event.alert_type,
            level = ?event.level,
            message = %event.message,
            "alert"
        );
        Ok(())
    }

    async fn on_command_invocation(
        &self,
        event: &DeviceCommandInvocation,
    ) -> Result<(), ProcessorError> {
        self.count();
        info!(
            processor = %self.id,
            event_id = %event.header.id,
            assignment = %event.header.device_assignment,
            command = %event.command_token,
            status = ?event.status,
            "command invocation"
        );
        Ok(())
    }

    async fn on_command_response(
        &self,
        event: &DeviceCommandResponse,
    ) -> Result<(), ProcessorError> {
        self.count();
        info!(
            processor = %self.id,
            event_id = %event.header.id,
            assignment = %event.header.device_assignment,
            originating_event = %event.originating_event_id,
            "command response"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "logger_tests.rs"]
mod tests;
