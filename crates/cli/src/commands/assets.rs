// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `relay assets` - Hardware asset lookups

use crate::config::Config;
use crate::error::RelayError;
use crate::output::{self, OutputFormat};
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use relay_assets::{AssetModule, FileSystemHardwareAssetModule, HardwareAsset};
use std::path::Path;

#[derive(Args)]
pub struct AssetsArgs {
    #[command(subcommand)]
    pub command: AssetsCommand,
}

#[derive(Subcommand)]
pub enum AssetsCommand {
    /// Show one asset by id
    Get {
        /// Asset id (exact match)
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Search assets by id, name, sku, description or property value
    Search {
        /// Case-insensitive text; lists every asset when omitted
        query: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Reload the asset definitions and report the outcome
    Refresh,
}

pub fn run(args: AssetsArgs, config: &Config) -> Result<()> {
    let config_dir = config.base_dir();
    let module = FileSystemHardwareAssetModule::from_config(&config_dir, &config.assets);
    tracing::debug!(
        module = module.id(),
        path = %module.definition_path().display(),
        "asset module configured"
    );

    match args.command {
        AssetsCommand::Get { id, format } => {
            start(&module, &config_dir)?;
            let asset = module
                .get_asset_by_id(&id)
                .ok_or_else(|| RelayError::asset_not_found(&id))?;
            output::print(asset.as_ref(), format)
        }
        AssetsCommand::Search { query, format } => {
            start(&module, &config_dir)?;
            let results = module.search(query.as_deref().unwrap_or(""));
            let items: Vec<&HardwareAsset> = results.iter().map(|a| a.as_ref()).collect();
            output::print_list(&items, format, "No assets found")
        }
        AssetsCommand::Refresh => {
            let response = module.refresh();
            println!("{}", response);
            if !response.is_successful() {
                bail!("asset refresh failed");
            }
            Ok(())
        }
    }
}

fn start(module: &FileSystemHardwareAssetModule, config_dir: &Path) -> Result<()> {
    module
        .start()
        .map_err(|e| RelayError::assets_unavailable(&e, config_dir))?;
    Ok(())
}
