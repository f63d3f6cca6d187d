// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Asset module configuration

use crate::module::{HARDWARE_CONFIG_FILENAME, MODULE_ID, MODULE_NAME};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetsConfig {
    /// Definition file name inside the assets subfolder
    pub filename: String,
    pub module_id: String,
    pub module_name: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            filename: HARDWARE_CONFIG_FILENAME.to_string(),
            module_id: MODULE_ID.to_string(),
            module_name: MODULE_NAME.to_string(),
        }
    }
}
