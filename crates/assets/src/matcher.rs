// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Free-text matching for asset searches

use crate::asset::HardwareAsset;

/// Decides whether an asset matches a search query
///
/// `query` is already lowercased and not blank.
pub trait AssetMatcher<A>: Send + Sync {
    fn matches(&self, asset: &A, query: &str) -> bool;
}

/// Substring match over id, name, sku, description and property values
#[derive(Debug, Clone, Copy, Default)]
pub struct HardwareAssetMatcher;

impl AssetMatcher<HardwareAsset> for HardwareAssetMatcher {
    fn matches(&self, asset: &HardwareAsset, query: &str) -> bool {
        let contains = |field: &str| field.to_lowercase().contains(query);

        contains(&asset.id)
            || contains(&asset.name)
            || contains(&asset.sku)
            || contains(&asset.description)
            || asset.properties.values().any(|value| contains(value))
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
