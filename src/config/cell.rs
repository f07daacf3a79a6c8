//! Atomic publication of resolved snapshots
//!
//! Readers load the current snapshot without locking and keep using it for as
//! long as they hold the `Arc`; a publish never mutates a snapshot in place.

use arc_swap::ArcSwap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use super::snapshot::ConfigSnapshot;

pub struct SnapshotCell {
    current: ArcSwap<ConfigSnapshot>,
    epoch: AtomicU64,
}

impl SnapshotCell {
    pub fn new(initial: ConfigSnapshot) -> Self {
        Self { current: ArcSwap::from_pointee(initial), epoch: AtomicU64::new(0) }
    }

    pub fn current(&self) -> Arc<ConfigSnapshot> {
        self.current.load_full()
    }

    /// Replace the current snapshot. Returns the new epoch.
    ///
    /// The epoch is bumped after the store. A reader that observes epoch `n`
    /// then calls [`SnapshotCell::current`] gets the `n`th snapshot or a later
    /// one, never an earlier one. The reverse does not hold: `current()` may
    /// briefly return a snapshot whose epoch is not yet visible.
    pub fn publish(&self, snapshot: ConfigSnapshot) -> u64 {
        self.current.store(Arc::new(snapshot));
        let epoch = self.epoch.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!(epoch, "published config snapshot");
        epoch
    }

    /// Number of publishes since construction. Lags `current()` during a publish.
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::Acquire)
    }
}

impl std::fmt::Debug for SnapshotCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotCell").field("epoch", &self.epoch()).finish_non_exhaustive()
    }
}
