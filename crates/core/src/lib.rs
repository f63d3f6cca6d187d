// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! relay-core: outbound event distribution
//!
//! This crate provides:
//! - Device event records (measurements, locations, alerts, commands)
//! - The `OutboundEventProcessor` trait implemented by sinks
//! - `OutboundEventProcessorChain`, the fan-out with per-processor isolation
//! - `DirectOutboundProcessingStrategy`, the ingestion-side entry point
//! - Lifecycle and command-response types shared with asset modules

pub mod chain;
pub mod command;
pub mod config;
pub mod event;
pub mod handle;
pub mod lifecycle;
pub mod processor;
pub mod strategy;

pub use chain::{DispatchFailure, DispatchReport, OutboundEventProcessorChain};
pub use command::{CommandResponse, CommandResult};
pub use config::{ChainConfig, FailurePolicy};
pub use event::{
    AlertLevel, AlertSource, CommandInitiator, CommandStatus, DeviceAlert,
    DeviceCommandInvocation, DeviceCommandResponse, DeviceLocation, DeviceMeasurements,
    EventHeader, EventKind, OutboundEvent, ParseEventKindError,
};
pub use handle::ChainHandle;
pub use lifecycle::{LifecycleError, LifecycleState};
pub use processor::{OutboundEventProcessor, ProcessorError, ProcessorRef};
pub use strategy::{DeliveryError, DirectOutboundProcessingStrategy, OutboundProcessingStrategy};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use processor::fake::{CallLog, FakeProcessor, ProcessorCall};
