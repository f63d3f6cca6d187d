// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced processor wrapper for consistent observability

use async_trait::async_trait;
use relay_core::{
    DeviceAlert, DeviceCommandInvocation, DeviceCommandResponse, DeviceLocation,
    DeviceMeasurements, EventKind, OutboundEventProcessor, ProcessorError,
};
use std::future::Future;
use std::time::Instant;
use tracing::Instrument;

/// Wrapper that adds a span, timing and error logging to any processor
#[derive(Clone)]
pub struct TracedProcessor<P> {
    inner: P,
}

impl<P> TracedProcessor<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl<P: OutboundEventProcessor> TracedProcessor<P> {
    async fn handle<F>(&self, kind: EventKind, event_id: &str, call: F) -> Result<(), ProcessorError>
    where
        F: Future<Output = Result<(), ProcessorError>> + Send,
    {
        let span = tracing::info_span!(
            "processor.handle",
            processor = self.inner.id(),
            kind = %kind,
            event_id
        );

        async {
            let start = Instant::now();
            let result = call.await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::debug!(elapsed_ms, "handled"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "handle failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

#[async_trait]
impl<P: OutboundEventProcessor> OutboundEventProcessor for TracedProcessor<P> {
    fn id(&self) -> &str {
        self.inner.id()
    }

    async fn start(&self) -> Result<(), ProcessorError> {
        let span = tracing::info_span!("processor.start", processor = self.inner.id());
        async {
            tracing::info!("starting");
            let start = Instant::now();
            let result = self.inner.start().await;
            let elapsed_ms = start.elapsed().as_millis() as u64;

            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "started"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "start failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn stop(&self) -> Result<(), ProcessorError> {
        let span = tracing::info_span!("processor.stop", processor = self.inner.id());
        async {
            let result = self.inner.stop().await;
            // The chain keeps stopping the rest, so this is not fatal
            match &result {
                Ok(()) => tracing::info!("stopped"),
                Err(e) => tracing::warn!(error = %e, "stop failed"),
            }
            result
        }
        .instrument(span)
        .await
    }

    async fn on_measurements(&self, event: &DeviceMeasurements) -> Result<(), ProcessorError> {
        self.handle(
            EventKind::Measurements,
            &event.header.id,
            self.inner.on_measurements(event),
        )
        .await
    }

    async fn on_location(&self, event: &DeviceLocation) -> Result<(), ProcessorError> {
        self.handle(
            EventKind::Location,
            &event.header.id,
            self.inner.on_location(event),
        )
        .await
    }

    async fn on_alert(&self, event: &DeviceAlert) -> Result<(), ProcessorError> {
        self.handle(
            EventKind::Alert,
            &event.header.id,
            self.inner.on_alert(event),
        )
        .await
    }

    async fn on_command_invocation(
        &self,
        event: &DeviceCommandInvocation,
    ) -> Result<(), ProcessorError> {
        self.handle(
            EventKind::CommandInvocation,
            &event.header.id,
            self.inner.on_command_invocation(event),
        )
        .await
    }

    async fn on_command_response(
        &self,
        event: &DeviceCommandResponse,
    ) -> Result<(), ProcessorError> {
        self.handle(
            EventKind::CommandResponse,
            &event.header.id,
            self.inner.on_command_response(event),
        )
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
