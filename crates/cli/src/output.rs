// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print one value in the requested format
pub fn print<T: Serialize + Display>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// Print a list, one item per line in text mode
///
/// An empty list prints `empty` in text mode and `[]` in JSON.
pub fn print_list<T: Serialize + Display>(
    items: &[T],
    format: OutputFormat,
    empty: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text if items.is_empty() => println!("{}", empty),
        OutputFormat::Text => {
            for item in items {
                println!("{}", item);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
    }
    Ok(())
}
