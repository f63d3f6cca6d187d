// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Swappable handle to the currently configured chain

use crate::chain::OutboundEventProcessorChain;
use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Shared slot holding the chain that delivery strategies resolve on every call
///
/// Clones share the same slot, so installing a new chain through any clone
/// is visible to every holder on its next lookup.
#[derive(Clone, Default)]
pub struct ChainHandle {
    slot: Arc<ArcSwapOption<OutboundEventProcessorChain>>,
}

impl ChainHandle {
    /// Create an empty handle
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_chain(chain: Arc<OutboundEventProcessorChain>) -> Self {
        let handle = Self::new();
        handle.install(chain);
        handle
    }

    /// Publish `chain` as the current chain, returning the one it replaced
    pub fn install(
        &self,
        chain: Arc<OutboundEventProcessorChain>,
    ) -> Option<Arc<OutboundEventProcessorChain>> {
        self.slot.swap(Some(chain))
    }

    /// Remove the current chain
    pub fn clear(&self) -> Option<Arc<OutboundEventProcessorChain>> {
        self.slot.swap(None)
    }

    pub fn current(&self) -> Option<Arc<OutboundEventProcessorChain>> {
        self.slot.load_full()
    }
}

impl std::fmt::Debug for ChainHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainHandle")
            .field("installed", &self.slot.load().is_some())
            .finish()
    }
}
