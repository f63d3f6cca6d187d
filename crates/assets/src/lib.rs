// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Hardware asset reference data
//!
//! Assets are loaded in bulk from a TOML definition file into an immutable
//! snapshot. Reloads build a complete new snapshot and publish it with a
//! single atomic swap, so lookups never observe a partially loaded cache.

mod asset;
mod config;
mod error;
mod loader;
mod matcher;
mod module;

pub use asset::{AssetType, HardwareAsset};
pub use config::AssetsConfig;
pub use error::AssetError;
pub use loader::{load_hardware_assets, parse_hardware_assets};
pub use matcher::{AssetMatcher, HardwareAssetMatcher};
pub use module::{
    AssetModule, FileSystemHardwareAssetModule, ASSETS_FOLDER, HARDWARE_CONFIG_FILENAME,
    MODULE_ID, MODULE_NAME,
};
