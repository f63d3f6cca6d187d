// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-facing errors with context and suggestions

use relay_assets::AssetError;
use std::fmt;
use std::path::Path;

/// Error rendered to the terminal with optional hints
#[derive(Debug)]
pub struct RelayError {
    /// What went wrong
    pub message: String,
    /// Why it might have happened
    pub context: Vec<String>,
    /// How to fix it
    pub suggestions: Vec<String>,
}

impl RelayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn asset_not_found(id: &str) -> Self {
        RelayError::new(format!("asset not found: {}", id))
            .with_context("Asset ids are matched exactly, including case")
            .with_suggestion("Search by name instead: relay assets search <text>")
    }

    /// Asset definitions could not be loaded from `config_dir`
    pub fn assets_unavailable(err: &AssetError, config_dir: &Path) -> Self {
        let base = RelayError::new(err.to_string());
        match err {
            AssetError::FolderMissing { .. } | AssetError::FileMissing { .. } => base
                .with_context(format!("Config directory: {}", config_dir.display()))
                .with_suggestion("Point at another directory with --config-dir <dir>"),
            AssetError::Parse { .. } | AssetError::Invalid { .. } => {
                base.with_suggestion("Fix the definition file and run: relay assets refresh")
            }
            AssetError::Io { .. } => base,
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for ctx in &self.context {
                writeln!(f, "  -> {}", ctx)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for RelayError {}

/// Render any command error for stderr
pub fn render(err: &anyhow::Error) -> String {
    match err.downcast_ref::<RelayError>() {
        Some(relay) => relay.to_string(),
        None => format!("error: {:#}\n", err),
    }
}
