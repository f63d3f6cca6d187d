// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hardware asset definition loader
//!
//! Definition files are TOML with one `[[asset]]` table per asset:
//!
//! ```toml
//! [[asset]]
//! id = "a1"
//! name = "Forklift"
//! sku = "FL-100"
//!
//! [asset.properties]
//! capacity = "2.5t"
//! ```

use crate::asset::HardwareAsset;
use crate::error::AssetError;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DefinitionFile {
    #[serde(default, rename = "asset")]
    assets: Vec<HardwareAsset>,
}

/// Read and parse a definition file
pub fn load_hardware_assets(path: &Path) -> Result<Vec<HardwareAsset>, AssetError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_hardware_assets(&contents, path)
}

/// Parse definition file contents; `origin` is only used in error messages
pub fn parse_hardware_assets(
    contents: &str,
    origin: &Path,
) -> Result<Vec<HardwareAsset>, AssetError> {
    let file: DefinitionFile = toml::from_str(contents).map_err(|source| AssetError::Parse {
        path: origin.to_path_buf(),
        source,
    })?;

    for (index, asset) in file.assets.iter().enumerate() {
        validate(index, asset)?;
    }
    Ok(file.assets)
}

fn validate(index: usize, asset: &HardwareAsset) -> Result<(), AssetError> {
    if asset.id.trim().is_empty() {
        return Err(AssetError::Invalid {
            index,
            reason: "id must not be empty".to_string(),
        });
    }
    if asset.name.trim().is_empty() {
        return Err(AssetError::Invalid {
            index,
            reason: format!("asset '{}' has an empty name", asset.id),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
