// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! relay - Outbound event relay and hardware asset CLI

mod commands;
mod config;
mod error;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{assets, dispatch};
use config::{Config, ConfigSource, CONFIG_ENV};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "relay",
    version,
    about = "Relay - Outbound device events and hardware asset lookups"
)]
struct Cli {
    /// Config file (defaults to $RELAY_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base directory holding the assets folder
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hardware asset lookups
    Assets(assets::AssetsArgs),
    /// Deliver events from a JSON file through a logging chain
    Dispatch(dispatch::DispatchArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprint!("{}", error::render(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = ConfigSource::locate(cli.config, std::env::var_os(CONFIG_ENV));
    let config = Config::resolve(source.as_ref(), cli.config_dir)?;

    let _guard = logging::init(&config.logging)?;
    match &source {
        Some(source) => {
            tracing::debug!(config = %source.path.display(), "configuration loaded")
        }
        None => tracing::debug!("no config file, using defaults"),
    }

    match cli.command {
        Commands::Assets(args) => assets::run(args, &config),
        Commands::Dispatch(args) => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(dispatch::run(args, &config)),
    }
}
