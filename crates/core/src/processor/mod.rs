// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound event processor trait
//!
//! A processor receives a copy of every event distributed by the chain and
//! typically forwards it to an external sink (database, queue, API).

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

use crate::event::{
    DeviceAlert, DeviceCommandInvocation, DeviceCommandResponse, DeviceLocation,
    DeviceMeasurements, EventKind, OutboundEvent,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by a processor's lifecycle hooks or event handlers
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("sink error: {0}")]
    Sink(String),
    #[error("event rejected: {0}")]
    Rejected(String),
    #[error("sink unavailable: {0}")]
    Unavailable(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared handle to a registered processor
pub type ProcessorRef = Arc<dyn OutboundEventProcessor>;

/// Handler for outbound events
///
/// Every method has a no-op default so a processor only overrides the event
/// kinds it forwards.
#[async_trait]
pub trait OutboundEventProcessor: Send + Sync {
    /// Identity used when logging and reporting failures
    fn id(&self) -> &str;

    async fn start(&self) -> Result<(), ProcessorError> {
        Ok(())
    }

    async fn stop(&self) -> Result<(), ProcessorError> {
        Ok(())
    }

    async fn on_measurements(&self, _event: &DeviceMeasurements) -> Result<(), ProcessorError> {
        Ok(())
    }

    async fn on_location(&self, _event: &DeviceLocation) -> Result<(), ProcessorError> {
        Ok(())
    }

    async fn on_alert(&self, _event: &DeviceAlert) -> Result<(), ProcessorError> {
        Ok(())
    }

    async fn on_command_invocation(
        &self,
        _event: &DeviceCommandInvocation,
    ) -> Result<(), ProcessorError> {
        Ok(())
    }

    async fn on_command_response(
        &self,
        _event: &DeviceCommandResponse,
    ) -> Result<(), ProcessorError> {
        Ok(())
    }
}

/// Route an event to the handler matching its kind
pub(crate) async fn deliver(
    processor: &dyn OutboundEventProcessor,
    event: EventRef<'_>,
) -> Result<(), ProcessorError> {
    match event {
        EventRef::Measurements(e) => processor.on_measurements(e).await,
        EventRef::Location(e) => processor.on_location(e).await,
        EventRef::Alert(e) => processor.on_alert(e).await,
        EventRef::CommandInvocation(e) => processor.on_command_invocation(e).await,
        EventRef::CommandResponse(e) => processor.on_command_response(e).await,
    }
}

/// Borrowed view of one event, used to share a single fan-out loop across kinds
#[derive(Debug, Clone, Copy)]
pub(crate) enum EventRef<'a> {
    Measurements(&'a DeviceMeasurements),
    Location(&'a DeviceLocation),
    Alert(&'a DeviceAlert),
    CommandInvocation(&'a DeviceCommandInvocation),
    CommandResponse(&'a DeviceCommandResponse),
}

impl EventRef<'_> {
    pub(crate) fn kind(&self) -> EventKind {
        match self {
            EventRef::Measurements(_) => EventKind::Measurements,
            EventRef::Location(_) => EventKind::Location,
            EventRef::Alert(_) => EventKind::Alert,
            EventRef::CommandInvocation(_) => EventKind::CommandInvocation,
            EventRef::CommandResponse(_) => EventKind::CommandResponse,
        }
    }
}

impl<'a> From<&'a OutboundEvent> for EventRef<'a> {
    fn from(event: &'a OutboundEvent) -> Self {
        match event {
            OutboundEvent::Measurements(e) => EventRef::Measurements(e),
            OutboundEvent::Location(e) => EventRef::Location(e),
            OutboundEvent::Alert(e) => EventRef::Alert(e),
            OutboundEvent::CommandInvocation(e) => EventRef::CommandInvocation(e),
            OutboundEvent::CommandResponse(e) => EventRef::CommandResponse(e),
        }
    }
}
