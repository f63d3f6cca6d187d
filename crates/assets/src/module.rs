// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Asset modules
//!
//! [`FileSystemHardwareAssetModule`] serves hardware assets loaded from
//! `<config_dir>/assets/<filename>`. Each reload builds a complete snapshot
//! off to the side and publishes it with one atomic swap. Readers load the
//! current snapshot without locking; reloads are serialized so a slower,
//! older reload can never overwrite a newer snapshot.

use crate::asset::{AssetType, HardwareAsset};
use crate::config::AssetsConfig;
use crate::error::AssetError;
use crate::loader;
use crate::matcher::{AssetMatcher, HardwareAssetMatcher};
use arc_swap::ArcSwap;
use relay_core::CommandResponse;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Default module id
pub const MODULE_ID: &str = "fs-hardware";

/// Default module name
pub const MODULE_NAME: &str = "Default Hardware Management";

/// Default definition file name
pub const HARDWARE_CONFIG_FILENAME: &str = "hardware-assets.toml";

/// Subfolder of the config directory holding asset definitions
pub const ASSETS_FOLDER: &str = "assets";

/// Read-only source of reference assets
pub trait AssetModule: Send + Sync {
    type Asset;

    fn id(&self) -> &str;

    fn name(&self) -> &str;

    fn asset_type(&self) -> AssetType;

    /// Load the initial data; fails if the definition cannot be loaded
    fn start(&self) -> Result<(), AssetError>;

    fn stop(&self) -> Result<(), AssetError>;

    fn get_asset_by_id(&self, id: &str) -> Option<Arc<Self::Asset>>;

    /// Case-insensitive search, sorted by the asset's natural order
    fn search(&self, criteria: &str) -> Vec<Arc<Self::Asset>>;

    /// Reload the data, reporting the outcome instead of failing
    fn refresh(&self) -> CommandResponse;
}

/// One published generation of the asset cache
#[derive(Debug, Default)]
struct AssetSnapshot {
    generation: u64,
    by_id: HashMap<String, Arc<HardwareAsset>>,
}

/// Hardware assets loaded from a TOML file on the filesystem
pub struct FileSystemHardwareAssetModule {
    config_dir: PathBuf,
    filename: String,
    module_id: String,
    module_name: String,
    matcher: Box<dyn AssetMatcher<HardwareAsset>>,
    snapshot: ArcSwap<AssetSnapshot>,
    reload_lock: Mutex<()>,
}

impl FileSystemHardwareAssetModule {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            filename: HARDWARE_CONFIG_FILENAME.to_string(),
            module_id: MODULE_ID.to_string(),
            module_name: MODULE_NAME.to_string(),
            matcher: Box::new(HardwareAssetMatcher),
            snapshot: ArcSwap::from_pointee(AssetSnapshot::default()),
            reload_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config_dir: impl Into<PathBuf>, config: &AssetsConfig) -> Self {
        Self::new(config_dir)
            .with_filename(&config.filename)
            .with_module_id(&config.module_id)
            .with_module_name(&config.module_name)
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    pub fn with_module_id(mut self, id: impl Into<String>) -> Self {
        self.module_id = id.into();
        self
    }

    pub fn with_module_name(mut self, name: impl Into<String>) -> Self {
        self.module_name = name.into();
        self
    }

    pub fn with_matcher(mut self, matcher: impl AssetMatcher<HardwareAsset> + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Path of the definition file, whether or not it exists
    pub fn definition_path(&self) -> PathBuf {
        absolute(&self.config_dir.join(ASSETS_FOLDER).join(&self.filename))
    }

    /// Number of snapshots published so far (0 before the first load)
    pub fn generation(&self) -> u64 {
        self.snapshot.load().generation
    }

    /// Number of assets in the current snapshot
    pub fn len(&self) -> usize {
        self.snapshot.load().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn resolve_definition(&self) -> Result<PathBuf, AssetError> {
        let folder = absolute(&self.config_dir.join(ASSETS_FOLDER));
        if !folder.is_dir() {
            return Err(AssetError::FolderMissing { path: folder });
        }
        let file = folder.join(&self.filename);
        if !file.is_file() {
            return Err(AssetError::FileMissing { path: file });
        }
        Ok(file)
    }

    /// Rebuild the cache from the definition file and publish it
    ///
    /// Returns the number of assets in the new snapshot.
    pub fn reload(&self) -> Result<usize, AssetError> {
        let _guard = self.reload_lock.lock().unwrap_or_else(|e| e.into_inner());

        let path = self.resolve_definition()?;
        info!(path = %path.display(), "Loading assets");
        let assets = loader::load_hardware_assets(&path)?;

        let mut by_id = HashMap::with_capacity(assets.len());
        for asset in assets {
            let id = asset.id.clone();
            if by_id.insert(id.clone(), Arc::new(asset)).is_some() {
                warn!(id = %id, "duplicate asset id, later definition wins");
            }
        }

        let count = by_id.len();
        let generation = self.snapshot.load().generation + 1;
        self.snapshot.store(Arc::new(AssetSnapshot { generation, by_id }));
        info!(generation, "Loaded {} hardware assets.", count);
        Ok(count)
    }
}

impl AssetModule for FileSystemHardwareAssetModule {
    type Asset = HardwareAsset;

    fn id(&self) -> &str {
        &self.module_id
    }

    fn name(&self) -> &str {
        &self.module_name
    }

    fn asset_type(&self) -> AssetType {
        AssetType::Hardware
    }

    fn start(&self) -> Result<(), AssetError> {
        self.reload().map(|_| ())
    }

    fn stop(&self) -> Result<(), AssetError> {
        Ok(())
    }

    fn get_asset_by_id(&self, id: &str) -> Option<Arc<HardwareAsset>> {
        self.snapshot.load().by_id.get(id).cloned()
    }

    fn search(&self, criteria: &str) -> Vec<Arc<HardwareAsset>> {
        let snapshot = self.snapshot.load_full();
        let mut results: Vec<Arc<HardwareAsset>> = if criteria.trim().is_empty() {
            snapshot.by_id.values().cloned().collect()
        } else {
            let query = criteria.to_lowercase();
            snapshot
                .by_id
                .values()
                .filter(|asset| self.matcher.matches(asset, &query))
                .cloned()
                .collect()
        };
        results.sort();
        results
    }

    fn refresh(&self) -> CommandResponse {
        match self.reload() {
            Ok(count) => CommandResponse::successful(format!(
                "Refresh successful. Loaded {} hardware assets.",
                count
            )),
            Err(e) => {
                warn!(module = %self.module_id, error = %e, "asset refresh failed");
                CommandResponse::failed(e.to_string())
            }
        }
    }
}

/// Make `path` absolute against the current directory without touching the filesystem
fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
#[path = "module_tests.rs"]
mod tests;
