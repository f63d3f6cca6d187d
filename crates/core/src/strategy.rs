// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound processing strategies
//!
//! A strategy is the entry point used by the ingestion side. The direct
//! strategy hands each event to the chain currently installed in its
//! [`ChainHandle`], resolving the handle on every call.

use crate::chain::{DispatchReport, OutboundEventProcessorChain};
use crate::config::FailurePolicy;
use crate::event::{
    DeviceAlert, DeviceCommandInvocation, DeviceCommandResponse, DeviceLocation,
    DeviceMeasurements, OutboundEvent,
};
use crate::handle::ChainHandle;
use crate::lifecycle::LifecycleError;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("no outbound event processor chain is configured")]
    ChainUnavailable,
    #[error("{} processor(s) failed to handle {} event: {}", .report.failures.len(), .report.kind, .report.failed_processors().join(", "))]
    ProcessorFailures { report: DispatchReport },
}

/// Receives events from the ingestion boundary
#[async_trait]
pub trait OutboundProcessingStrategy: Send + Sync {
    async fn start(&self) -> Result<(), LifecycleError>;

    async fn stop(&self) -> Result<(), LifecycleError>;

    async fn on_measurements(
        &self,
        event: &DeviceMeasurements,
    ) -> Result<DispatchReport, DeliveryError>;

    async fn on_location(&self, event: &DeviceLocation) -> Result<DispatchReport, DeliveryError>;

    async fn on_alert(&self, event: &DeviceAlert) -> Result<DispatchReport, DeliveryError>;

    async fn on_command_invocation(
        &self,
        event: &DeviceCommandInvocation,
    ) -> Result<DispatchReport, DeliveryError>;

    async fn on_command_response(
        &self,
        event: &DeviceCommandResponse,
    ) -> Result<DispatchReport, DeliveryError>;

    /// Route any event to the entry point for its kind
    async fn deliver(&self, event: &OutboundEvent) -> Result<DispatchReport, DeliveryError> {
        match event {
            OutboundEvent::Measurements(e) => self.on_measurements(e).await,
            OutboundEvent::Location(e) => self.on_location(e).await,
            OutboundEvent::Alert(e) => self.on_alert(e).await,
            OutboundEvent::CommandInvocation(e) => self.on_command_invocation(e).await,
            OutboundEvent::CommandResponse(e) => self.on_command_response(e).await,
        }
    }
}

/// Strategy that sends events straight to the installed chain
#[derive(Debug, Clone)]
pub struct DirectOutboundProcessingStrategy {
    handle: ChainHandle,
    policy: FailurePolicy,
}

impl DirectOutboundProcessingStrategy {
    pub fn new(handle: ChainHandle) -> Self {
        Self {
            handle,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    fn chain(&self) -> Result<Arc<OutboundEventProcessorChain>, DeliveryError> {
        self.handle.current().ok_or(DeliveryError::ChainUnavailable)
    }

    fn apply_policy(&self, report: DispatchReport) -> Result<DispatchReport, DeliveryError> {
        match self.policy {
            FailurePolicy::Surface if report.has_failures() => {
                Err(DeliveryError::ProcessorFailures { report })
            }
            _ => Ok(report),
        }
    }
}

#[async_trait]
impl OutboundProcessingStrategy for DirectOutboundProcessingStrategy {
    // The chain owns the lifecycle of its processors
    async fn start(&self) -> Result<(), LifecycleError> {
        Ok(())
    }

    async fn stop(&self) -> Result<(), LifecycleError> {
        Ok(())
    }

    async fn on_measurements(
        &self,
        event: &DeviceMeasurements,
    ) -> Result<DispatchReport, DeliveryError> {
        let report = self.chain()?.on_measurements(event).await;
        self.apply_policy(report)
    }

    async fn on_location(&self, event: &DeviceLocation) -> Result<DispatchReport, DeliveryError> {
        let report = self.chain()?.on_location(event).await;
        self.apply_policy(report)
    }

    async fn on_alert(&self, event: &DeviceAlert) -> Result<DispatchReport, DeliveryError> {
        let report = self.chain()?.on_alert(event).await;
        self.apply_policy(report)
    }

    async fn on_command_invocation(
        &self,
        event: &DeviceCommandInvocation,
    ) -> Result<DispatchReport, DeliveryError> {
        let report = self.chain()?.on_command_invocation(event).await;
        self.apply_policy(report)
    }

    async fn on_command_response(
        &self,
        event: &DeviceCommandResponse,
    ) -> Result<DispatchReport, DeliveryError> {
        let report = self.chain()?.on_command_response(event).await;
        self.apply_policy(report)
    }
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;
