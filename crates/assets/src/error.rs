// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for asset loading

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Assets subfolder not found. Looking for: {}", .path.display())]
    FolderMissing { path: PathBuf },

    #[error("Assets file missing. Looking for: {}", .path.display())]
    FileMissing { path: PathBuf },

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid asset at position {index}: {reason}")]
    Invalid { index: usize, reason: String },
}
