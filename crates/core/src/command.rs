// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Results reported by administrative commands

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandResult {
    Successful,
    Failed,
}

impl fmt::Display for CommandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandResult::Successful => write!(f, "successful"),
            CommandResult::Failed => write!(f, "failed"),
        }
    }
}

/// Outcome of a command that reports instead of failing, such as an asset refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub result: CommandResult,
    pub message: String,
}

impl CommandResponse {
    pub fn successful(message: impl Into<String>) -> Self {
        Self {
            result: CommandResult::Successful,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            result: CommandResult::Failed,
            message: message.into(),
        }
    }

    pub fn is_successful(&self) -> bool {
        self.result == CommandResult::Successful
    }
}

impl fmt::Display for CommandResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.result, self.message)
    }
}
