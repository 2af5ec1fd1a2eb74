// Live sync status - shared between the polling collaborator and readers
// Concurrent readers, single writer; readers never observe a half-updated
// snapshot.

use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Per-chain syncing numbers reported by the deployment collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ChainSync {
    pub best_height: u64,
    pub sync_ratio: f64,
}

/// Whole-node syncing snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncStatus {
    /// Overall progress, 0.0 to 100.0.
    pub sync_progress: f64,
    /// Chain symbol -> syncing numbers, in display order.
    pub chains: BTreeMap<String, ChainSync>,
}

/// Shared handle to the live status.
///
/// Cloning shares the underlying state: the polling collaborator holds one
/// clone and writes, display paths hold others and read.
#[derive(Debug, Clone, Default)]
pub struct StatusHandle {
    inner: Arc<RwLock<SyncStatus>>,
}

impl StatusHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one update under the write lock.
    pub fn update<F>(&self, apply: F)
    where
        F: FnOnce(&mut SyncStatus),
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        apply(&mut guard);
    }

    /// Copy of the current status.
    pub fn snapshot(&self) -> SyncStatus {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Operator-facing status text.
    pub fn report(&self) -> String {
        let status = self.snapshot();
        let mut text = format!(
            "[Syncing status]\n{:.2}% finished.\n\n[Blockchain syncing status]\n",
            status.sync_progress
        );
        for (chain, sync) in &status.chains {
            text.push_str(&format!(
                "{}: #{} ({:.3}%)\n",
                chain, sync.best_height, sync.sync_ratio
            ));
        }
        text
    }
}
