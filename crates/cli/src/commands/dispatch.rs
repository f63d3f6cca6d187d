// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `relay dispatch` - Deliver recorded events through a logging chain

use crate::config::Config;
use crate::output::{self, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use relay_adapters::{LogProcessor, TracedProcessor};
use relay_core::{
    ChainHandle, DeliveryError, DirectOutboundProcessingStrategy, DispatchReport, EventKind,
    OutboundEvent, OutboundEventProcessorChain, OutboundProcessingStrategy, ProcessorRef,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args)]
pub struct DispatchArgs {
    /// JSON file holding an array of events
    pub events: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Per-kind totals for one dispatch run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct KindTotals {
    pub events: usize,
    /// Successful processor deliveries
    pub delivered: usize,
    /// Processor failures
    pub failed: usize,
    /// Events dropped because processing was disabled
    pub skipped: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchSummary {
    pub kinds: BTreeMap<EventKind, KindTotals>,
}

impl DispatchSummary {
    pub fn record(&mut self, report: &DispatchReport) {
        let totals = self.kinds.entry(report.kind).or_default();
        totals.events += 1;
        totals.delivered += report.delivered;
        totals.failed += report.failures.len();
        if report.skipped {
            totals.skipped += 1;
        }
    }

    pub fn events(&self) -> usize {
        self.kinds.values().map(|t| t.events).sum()
    }
}

impl fmt::Display for DispatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kinds.is_empty() {
            return write!(f, "No events dispatched");
        }
        for (kind, totals) in &self.kinds {
            write!(
                f,
                "{}: {} delivered, {} failed",
                kind, totals.delivered, totals.failed
            )?;
            if totals.skipped > 0 {
                write!(f, ", {} skipped", totals.skipped)?;
            }
            writeln!(f)?;
        }
        write!(f, "total: {} events", self.events())
    }
}

/// Deliver every event in order, stopping only if no chain is installed
pub async fn dispatch_events(
    strategy: &dyn OutboundProcessingStrategy,
    events: &[OutboundEvent],
) -> Result<DispatchSummary, DeliveryError> {
    let mut summary = DispatchSummary::default();
    for event in events {
        match strategy.deliver(event).await {
            Ok(report) => summary.record(&report),
            Err(DeliveryError::ProcessorFailures { report }) => {
                tracing::warn!(
                    event_id = %event.header().id,
                    failed = report.failures.len(),
                    "event had processor failures"
                );
                summary.record(&report);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(summary)
}

pub async fn run(args: DispatchArgs, config: &Config) -> Result<()> {
    let contents = tokio::fs::read_to_string(&args.events)
        .await
        .with_context(|| format!("cannot read events file {}", args.events.display()))?;
    let events: Vec<OutboundEvent> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid events file {}", args.events.display()))?;

    let processor: ProcessorRef = Arc::new(TracedProcessor::new(LogProcessor::default()));
    let chain = Arc::new(OutboundEventProcessorChain::from_config(
        &config.chain,
        vec![processor],
    ));
    let strategy =
        DirectOutboundProcessingStrategy::new(ChainHandle::with_chain(Arc::clone(&chain)))
            .with_failure_policy(config.chain.failure_policy);

    chain.start().await?;
    strategy.start().await?;
    let outcome = dispatch_events(&strategy, &events).await;
    strategy.stop().await?;
    chain.stop().await?;

    output::print(&outcome?, args.format)
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
