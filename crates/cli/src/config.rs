// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `relay.toml` loading
//!
//! The config file is taken from `--config`, then `RELAY_CONFIG`, then
//! `<user config dir>/relay/relay.toml`. Only the default location may be
//! absent, in which case every setting takes its default.

use relay_assets::AssetsConfig;
use relay_core::ChainConfig;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "RELAY_CONFIG";

const CONFIG_FILENAME: &str = "relay.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no user config directory; pass --config, --config-dir or set RELAY_CONFIG")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    pub level: String,
    /// Write logs here instead of stderr
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base directory; asset definitions live in `<config_dir>/assets`
    pub config_dir: Option<PathBuf>,
    pub chain: ChainConfig,
    pub assets: AssetsConfig,
    pub logging: LoggingConfig,
}

/// Where the config file was found and whether it has to exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub required: bool,
}

impl ConfigSource {
    /// Pick the config file from the flag, the environment, or the default location
    ///
    /// Returns `None` when neither is given and there is no user config directory.
    pub fn locate(flag: Option<PathBuf>, env: Option<OsString>) -> Option<Self> {
        Self::locate_in(flag, env, dirs::config_dir())
    }

    fn locate_in(
        flag: Option<PathBuf>,
        env: Option<OsString>,
        user_config_dir: Option<PathBuf>,
    ) -> Option<Self> {
        if let Some(path) = flag {
            return Some(Self {
                path,
                required: true,
            });
        }
        if let Some(path) = env.filter(|v| !v.is_empty()) {
            return Some(Self {
                path: PathBuf::from(path),
                required: true,
            });
        }
        user_config_dir.map(|dir| Self {
            path: dir.join("relay").join(CONFIG_FILENAME),
            required: false,
        })
    }
}

impl Config {
    /// Load the located config and apply a `--config-dir` override
    ///
    /// Without a config file, an override is enough to run on defaults.
    pub fn resolve(
        source: Option<&ConfigSource>,
        config_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let mut config = match source {
            Some(source) => Self::load(source)?,
            None if config_dir.is_some() => Self::default(),
            None => return Err(ConfigError::NoConfigDir),
        };
        if config_dir.is_some() {
            config.config_dir = config_dir;
        }
        Ok(config)
    }

    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        let mut config = match std::fs::read_to_string(&source.path) {
            Ok(contents) => Self::parse(&contents, &source.path)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !source.required => Self::default(),
            Err(source_err) => {
                return Err(ConfigError::Read {
                    path: source.path.clone(),
                    source: source_err,
                })
            }
        };
        if config.config_dir.is_none() {
            config.config_dir = source.path.parent().map(Path::to_path_buf);
        }
        Ok(config)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Base directory for asset definitions
    pub fn base_dir(&self) -> PathBuf {
        self.config_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
