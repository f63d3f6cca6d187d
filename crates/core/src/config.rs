// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Chain configuration

use serde::{Deserialize, Serialize};

/// What the delivery strategy does with processor failures contained by the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log and report failures but always return success to the caller
    #[default]
    Contain,
    /// After the full fan-out, return an error listing the failed processors
    Surface,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainConfig {
    /// Initial value of the chain's processing switch
    pub enabled: bool,
    pub failure_policy: FailurePolicy,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            failure_policy: FailurePolicy::Contain,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
