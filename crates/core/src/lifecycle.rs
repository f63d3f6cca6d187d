// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Lifecycle states shared by startable components

use thiserror::Error;

/// Where a component is in its start/stop lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Stopped,
    Starting,
    Started,
    Stopping,
}

impl LifecycleState {
    /// Get the state name for logging/debugging
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleState::Stopped => "stopped",
            LifecycleState::Starting => "starting",
            LifecycleState::Started => "started",
            LifecycleState::Stopping => "stopping",
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A lifecycle stage failed; `component` names the failing part
    #[error("{stage} failed for '{component}': {source}")]
    StartFailed {
        component: String,
        stage: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("cannot {operation} '{component}' while {state}")]
    InvalidState {
        component: String,
        state: LifecycleState,
        operation: &'static str,
    },
}
