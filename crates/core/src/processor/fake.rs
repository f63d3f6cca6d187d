// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake processor for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{OutboundEventProcessor, ProcessorError};
use crate::event::{
    DeviceAlert, DeviceCommandInvocation, DeviceCommandResponse, DeviceLocation,
    DeviceMeasurements,
};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded processor invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorCall {
    pub processor: String,
    /// `start`, `stop`, or the event kind name
    pub operation: String,
    pub event_id: Option<String>,
}

/// Call log shared between fakes so tests can assert on cross-processor order
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<ProcessorCall>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProcessorCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Ids of processors that handled `operation`, in call order
    pub fn processors_for(&self, operation: &str) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.operation == operation)
            .map(|c| c.processor)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, processor: &str, operation: &str, event_id: Option<&str>) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProcessorCall {
                processor: processor.to_string(),
                operation: operation.to_string(),
                event_id: event_id.map(str::to_string),
            });
    }
}

/// Fake processor that records every call and fails on request
#[derive(Clone)]
pub struct FakeProcessor {
    id: String,
    log: CallLog,
    failing: HashSet<String>,
    delay: Option<Duration>,
}

impl FakeProcessor {
    pub fn new(id: impl Into<String>, log: &CallLog) -> Self {
        Self {
            id: id.into(),
            log: log.clone(),
            failing: HashSet::new(),
            delay: None,
        }
    }

    /// Fail (after recording) whenever `operation` is invoked
    pub fn failing_on(mut self, operation: impl Into<String>) -> Self {
        self.failing.insert(operation.into());
        self
    }

    /// Sleep before handling each event
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    async fn handle(&self, operation: &str, event_id: Option<&str>) -> Result<(), ProcessorError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.log.record(&self.id, operation, event_id);
        if self.failing.contains(operation) {
            return Err(ProcessorError::Sink(format!(
                "{} failed on {}",
                self.id, operation
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl OutboundEventProcessor for FakeProcessor {
    fn id(&self) -> &str {
        &self.id
    }

    async fn start(&self) -> Result<(), ProcessorError> {
        self.handle("start", None).await
    }

    async fn stop(&self) -> Result<(), ProcessorError> {
        self.handle("stop", None).await
    }

    async fn on_measurements(&self, event: &DeviceMeasurements) -> Result<(), ProcessorError> {
        self.handle("measurements", Some(&event.header.id)).await
    }

    async fn on_location(&self, event: &DeviceLocation) -> Result<(), ProcessorError> {
        self.handle("location", Some(&event.header.id)).await
    }

    async fn on_alert(&self, event: &DeviceAlert) -> Result<(), ProcessorError> {
        self.handle("alert", Some(&event.header.id)).await
    }

    async fn on_command_invocation(
        &self,
        event: &DeviceCommandInvocation,
    ) -> Result<(), ProcessorError> {
        self.handle("command-invocation", Some(&event.header.id)).await
    }

    async fn on_command_response(
        &self,
        event: &DeviceCommandResponse,
    ) -> Result<(), ProcessorError> {
        self.handle("command-response", Some(&event.header.id)).await
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
