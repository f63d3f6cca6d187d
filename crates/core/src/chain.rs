// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound event processor chain
//!
//! Fans each event out to every registered processor in registration order.
//! Delivery to each processor is isolated: a failing processor is logged and
//! reported, and the remaining processors still receive the event.
//!
//! Lifecycle failures are treated asymmetrically:
//! - `start` is strict. The first processor that fails to start aborts the
//!   start, later processors are never started, and the ones already started
//!   are stopped again.
//! - `stop` is cleanup. A processor that fails to stop is logged and the
//!   remaining processors are still stopped.

use crate::config::ChainConfig;
use crate::event::{
    DeviceAlert, DeviceCommandInvocation, DeviceCommandResponse, DeviceLocation,
    DeviceMeasurements, EventKind, OutboundEvent,
};
use crate::lifecycle::{LifecycleError, LifecycleState};
use crate::processor::{deliver, EventRef, ProcessorError, ProcessorRef};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

const COMPONENT: &str = "outbound-event-processor-chain";

/// A processor failure contained during dispatch
#[derive(Debug)]
pub struct DispatchFailure {
    pub processor: String,
    pub kind: EventKind,
    pub error: ProcessorError,
}

/// Outcome of delivering one event to the chain
#[derive(Debug)]
pub struct DispatchReport {
    pub kind: EventKind,
    /// True when the chain was disabled and the event was dropped
    pub skipped: bool,
    /// Number of processors that handled the event successfully
    pub delivered: usize,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    fn new(kind: EventKind) -> Self {
        Self {
            kind,
            skipped: false,
            delivered: 0,
            failures: Vec::new(),
        }
    }

    fn disabled(kind: EventKind) -> Self {
        Self {
            skipped: true,
            ..Self::new(kind)
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Ids of the processors that failed, in registration order
    pub fn failed_processors(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.processor.as_str()).collect()
    }
}

/// Ordered set of processors with a lifecycle and a processing switch
pub struct OutboundEventProcessorChain {
    processors: RwLock<Vec<ProcessorRef>>,
    enabled: AtomicBool,
    state: Mutex<LifecycleState>,
    failures: AtomicU64,
}

impl OutboundEventProcessorChain {
    /// Create a stopped chain with processing disabled
    pub fn new(processors: Vec<ProcessorRef>) -> Self {
        Self {
            processors: RwLock::new(processors),
            enabled: AtomicBool::new(false),
            state: Mutex::new(LifecycleState::Stopped),
            failures: AtomicU64::new(0),
        }
    }

    pub fn from_config(config: &ChainConfig, processors: Vec<ProcessorRef>) -> Self {
        let chain = Self::new(processors);
        chain.set_processing_enabled(config.enabled);
        chain
    }

    pub fn state(&self) -> LifecycleState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn set_state(&self, state: LifecycleState) {
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = state;
    }

    /// Move from `from` to `to`, failing if the chain is in any other state
    fn transition(
        &self,
        from: LifecycleState,
        to: LifecycleState,
        operation: &'static str,
    ) -> Result<(), LifecycleError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        if *state != from {
            return Err(LifecycleError::InvalidState {
                component: COMPONENT.to_string(),
                state: *state,
                operation,
            });
        }
        *state = to;
        Ok(())
    }

    /// Start every processor in registration order
    pub async fn start(&self) -> Result<(), LifecycleError> {
        self.transition(LifecycleState::Stopped, LifecycleState::Starting, "start")?;
        info!("Outbound event processor chain starting...");

        let processors = self.processors.read().await;
        for (index, processor) in processors.iter().enumerate() {
            if let Err(e) = processor.start().await {
                error!(processor = processor.id(), error = %e, "processor failed to start");
                self.stop_all(&processors[..index]).await;
                self.set_state(LifecycleState::Stopped);
                return Err(LifecycleError::StartFailed {
                    component: processor.id().to_string(),
                    stage: "processor start",
                    source: Box::new(e),
                });
            }
        }

        self.set_state(LifecycleState::Started);
        info!(
            processors = processors.len(),
            "Outbound event processor chain started."
        );
        Ok(())
    }

    /// Stop every processor in registration order, continuing past failures
    pub async fn stop(&self) -> Result<(), LifecycleError> {
        if self.state() == LifecycleState::Stopped {
            debug!("chain already stopped");
            return Ok(());
        }
        self.transition(LifecycleState::Started, LifecycleState::Stopping, "stop")?;
        info!("Outbound event processor chain stopping...");

        let processors = self.processors.read().await;
        self.stop_all(&processors).await;

        self.set_state(LifecycleState::Stopped);
        info!("Outbound event processor chain stopped.");
        Ok(())
    }

    async fn stop_all(&self, processors: &[ProcessorRef]) {
        for processor in processors {
            if let Err(e) = processor.stop().await {
                warn!(processor = processor.id(), error = %e, "processor failed to stop");
            }
        }
    }

    pub fn set_processing_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Release);
    }

    pub fn is_processing_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    /// Snapshot of the registered processors in delivery order
    pub async fn processors(&self) -> Vec<ProcessorRef> {
        self.processors.read().await.clone()
    }

    /// Replace the processor list
    ///
    /// Waits for in-flight dispatches to finish; dispatches that begin after
    /// this returns see only the new list.
    pub async fn set_processors(&self, processors: Vec<ProcessorRef>) {
        let mut guard = self.processors.write().await;
        *guard = processors;
    }

    /// Total processor failures contained since the chain was created
    pub fn failure_count(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    pub async fn on_measurements(&self, event: &DeviceMeasurements) -> DispatchReport {
        self.fan_out(EventRef::Measurements(event)).await
    }

    pub async fn on_location(&self, event: &DeviceLocation) -> DispatchReport {
        self.fan_out(EventRef::Location(event)).await
    }

    pub async fn on_alert(&self, event: &DeviceAlert) -> DispatchReport {
        self.fan_out(EventRef::Alert(event)).await
    }

    pub async fn on_command_invocation(&self, event: &DeviceCommandInvocation) -> DispatchReport {
        self.fan_out(EventRef::CommandInvocation(event)).await
    }

    pub async fn on_command_response(&self, event: &DeviceCommandResponse) -> DispatchReport {
        self.fan_out(EventRef::CommandResponse(event)).await
    }

    /// Route any event to the handler for its kind
    pub async fn dispatch(&self, event: &OutboundEvent) -> DispatchReport {
        self.fan_out(EventRef::from(event)).await
    }

    async fn fan_out(&self, event: EventRef<'_>) -> DispatchReport {
        let kind = event.kind();
        if !self.is_processing_enabled() {
            return DispatchReport::disabled(kind);
        }

        let processors = self.processors.read().await;
        let mut report = DispatchReport::new(kind);
        for processor in processors.iter() {
            match deliver(processor.as_ref(), event).await {
                Ok(()) => report.delivered += 1,
                Err(error) => {
                    self.failures.fetch_add(1, Ordering::Relaxed);
                    error!(
                        processor = processor.id(),
                        kind = %kind,
                        error = %error,
                        "processor failed to handle event"
                    );
                    report.failures.push(DispatchFailure {
                        processor: processor.id().to_string(),
                        kind,
                        error,
                    });
                }
            }
        }
        report
    }
}

impl Default for OutboundEventProcessorChain {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
